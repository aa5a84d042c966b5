//! Client for the SPL Token program and associated token accounts.

pub mod associated;
pub mod instructions;
pub mod layout;
pub mod state;

pub use associated::{create_associated_token_account, derive_associated_token_address};
pub use instructions::*;
pub use layout::{AuthorityType, TokenInstruction, TokenInstructionType};
pub use state::{AccountState, Mint, TokenAccount, MINT_LEN, TOKEN_ACCOUNT_LEN};
