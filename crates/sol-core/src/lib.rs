//! Ledger primitives shared by the program clients.
//!
//! This crate holds the pieces every instruction codec needs: the 32-byte
//! [`Address`], the positional [`AccountMeta`] / [`Instruction`] pair, and the
//! program-derived-address search. Like the rest of the workspace it avoids
//! `solana-sdk`; addresses are Base58 via `bs58`, derivation hashes with
//! `sha2` and the off-curve test uses `curve25519-dalek` directly.
//!
//! Nothing in here performs I/O. Submission and account retrieval are left to
//! an implementation of [`Connection`].

pub mod address;
pub mod connection;
pub mod error;
pub mod instruction;
pub mod pda;

// Re-export key public types for ergonomic imports.
pub use address::{Address, ADDRESS_LEN};
pub use connection::{AccountEncoding, Connection};
pub use error::CoreError;
pub use instruction::{AccountMeta, Instruction};
pub use pda::{
    create_program_address, create_with_seed, find_program_address, find_program_address_with,
    verify_program_address, BumpSearch, MAX_SEEDS, MAX_SEED_LEN, PDA_MARKER,
};
