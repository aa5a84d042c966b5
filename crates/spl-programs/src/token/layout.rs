//! SPL Token instruction data layout.
//!
//! Every payload starts with a one-byte discriminant. Optional addresses are a
//! one-byte flag (0 or 1) followed by 32 bytes that are zeroed when unset.
//!
//! ```text
//!  0 InitializeMint      decimals u8 | mint_authority [32] |
//!                      freeze_option u8 | freeze_authority [32]
//!  1 InitializeAccount
//!  2 InitializeMultisig  m u8
//!  3 Transfer            amount u64
//!  4 Approve             amount u64
//!  5 Revoke
//!  6 SetAuthority        authority_type u8 | new_option u8 | new_authority [32]
//!  7 MintTo              amount u64
//!  8 Burn                amount u64
//!  9 CloseAccount
//! 10 FreezeAccount
//! 11 ThawAccount
//! 12 TransferChecked     amount u64 | decimals u8
//! 13 ApproveChecked      amount u64 | decimals u8
//! 14 MintToChecked       amount u64 | decimals u8
//! 15 BurnChecked         amount u64 | decimals u8
//! ```

use std::fmt;

use sol_core::Address;

use crate::error::ProgramError;
use crate::layout::{Reader, Writer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenInstructionType {
    InitializeMint = 0,
    InitializeAccount = 1,
    InitializeMultisig = 2,
    Transfer = 3,
    Approve = 4,
    Revoke = 5,
    SetAuthority = 6,
    MintTo = 7,
    Burn = 8,
    CloseAccount = 9,
    FreezeAccount = 10,
    ThawAccount = 11,
    TransferChecked = 12,
    ApproveChecked = 13,
    MintToChecked = 14,
    BurnChecked = 15,
}

impl TryFrom<u8> for TokenInstructionType {
    type Error = ProgramError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        use TokenInstructionType::*;
        Ok(match tag {
            0 => InitializeMint,
            1 => InitializeAccount,
            2 => InitializeMultisig,
            3 => Transfer,
            4 => Approve,
            5 => Revoke,
            6 => SetAuthority,
            7 => MintTo,
            8 => Burn,
            9 => CloseAccount,
            10 => FreezeAccount,
            11 => ThawAccount,
            12 => TransferChecked,
            13 => ApproveChecked,
            14 => MintToChecked,
            15 => BurnChecked,
            other => return Err(ProgramError::UnknownInstructionType(other)),
        })
    }
}

impl fmt::Display for TokenInstructionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Which authority a `SetAuthority` instruction replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AuthorityType {
    MintTokens = 0,
    FreezeAccount = 1,
    AccountOwner = 2,
    CloseAccount = 3,
}

impl TryFrom<u8> for AuthorityType {
    type Error = ProgramError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::MintTokens),
            1 => Ok(Self::FreezeAccount),
            2 => Ok(Self::AccountOwner),
            3 => Ok(Self::CloseAccount),
            other => Err(ProgramError::Decoding(format!("invalid authority type {other}"))),
        }
    }
}

/// A decoded token program instruction payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenInstruction {
    InitializeMint {
        decimals: u8,
        mint_authority: Address,
        freeze_authority: Option<Address>,
    },
    InitializeAccount,
    InitializeMultisig {
        /// Signatures required out of the listed signers.
        m: u8,
    },
    Transfer {
        amount: u64,
    },
    Approve {
        amount: u64,
    },
    Revoke,
    SetAuthority {
        authority_type: AuthorityType,
        new_authority: Option<Address>,
    },
    MintTo {
        amount: u64,
    },
    Burn {
        amount: u64,
    },
    CloseAccount,
    FreezeAccount,
    ThawAccount,
    TransferChecked {
        amount: u64,
        decimals: u8,
    },
    ApproveChecked {
        amount: u64,
        decimals: u8,
    },
    MintToChecked {
        amount: u64,
        decimals: u8,
    },
    BurnChecked {
        amount: u64,
        decimals: u8,
    },
}

impl TokenInstruction {
    pub fn instruction_type(&self) -> TokenInstructionType {
        use TokenInstructionType as T;
        match self {
            Self::InitializeMint { .. } => T::InitializeMint,
            Self::InitializeAccount => T::InitializeAccount,
            Self::InitializeMultisig { .. } => T::InitializeMultisig,
            Self::Transfer { .. } => T::Transfer,
            Self::Approve { .. } => T::Approve,
            Self::Revoke => T::Revoke,
            Self::SetAuthority { .. } => T::SetAuthority,
            Self::MintTo { .. } => T::MintTo,
            Self::Burn { .. } => T::Burn,
            Self::CloseAccount => T::CloseAccount,
            Self::FreezeAccount => T::FreezeAccount,
            Self::ThawAccount => T::ThawAccount,
            Self::TransferChecked { .. } => T::TransferChecked,
            Self::ApproveChecked { .. } => T::ApproveChecked,
            Self::MintToChecked { .. } => T::MintToChecked,
            Self::BurnChecked { .. } => T::BurnChecked,
        }
    }

    /// Serialize into instruction data.
    pub fn pack(&self) -> Vec<u8> {
        let mut w = Writer::with_capacity(67);
        w.u8(self.instruction_type() as u8);

        match self {
            Self::InitializeMint {
                decimals,
                mint_authority,
                freeze_authority,
            } => {
                w.u8(*decimals).address(mint_authority);
                write_option_address(&mut w, freeze_authority.as_ref());
            }
            Self::InitializeMultisig { m } => {
                w.u8(*m);
            }
            Self::Transfer { amount }
            | Self::Approve { amount }
            | Self::MintTo { amount }
            | Self::Burn { amount } => {
                w.u64(*amount);
            }
            Self::SetAuthority {
                authority_type,
                new_authority,
            } => {
                w.u8(*authority_type as u8);
                write_option_address(&mut w, new_authority.as_ref());
            }
            Self::TransferChecked { amount, decimals }
            | Self::ApproveChecked { amount, decimals }
            | Self::MintToChecked { amount, decimals }
            | Self::BurnChecked { amount, decimals } => {
                w.u64(*amount).u8(*decimals);
            }
            Self::InitializeAccount
            | Self::Revoke
            | Self::CloseAccount
            | Self::FreezeAccount
            | Self::ThawAccount => {}
        }

        w.finish()
    }

    /// Decode a payload that must occupy the whole buffer.
    pub fn unpack(data: &[u8]) -> Result<Self, ProgramError> {
        let mut r = Reader::new(data);
        let instruction = Self::read(&mut r)?;
        r.finish()?;
        Ok(instruction)
    }

    /// Decode a payload from the front of `data`, returning it with the
    /// number of bytes it occupied.
    pub fn unpack_prefix(data: &[u8]) -> Result<(Self, usize), ProgramError> {
        let mut r = Reader::new(data);
        let instruction = Self::read(&mut r)?;
        Ok((instruction, r.position()))
    }

    fn read(r: &mut Reader<'_>) -> Result<Self, ProgramError> {
        use TokenInstructionType as T;

        Ok(match T::try_from(r.u8()?)? {
            T::InitializeMint => Self::InitializeMint {
                decimals: r.u8()?,
                mint_authority: r.address()?,
                freeze_authority: read_option_address(r)?,
            },
            T::InitializeAccount => Self::InitializeAccount,
            T::InitializeMultisig => Self::InitializeMultisig { m: r.u8()? },
            T::Transfer => Self::Transfer { amount: r.u64()? },
            T::Approve => Self::Approve { amount: r.u64()? },
            T::Revoke => Self::Revoke,
            T::SetAuthority => Self::SetAuthority {
                authority_type: AuthorityType::try_from(r.u8()?)?,
                new_authority: read_option_address(r)?,
            },
            T::MintTo => Self::MintTo { amount: r.u64()? },
            T::Burn => Self::Burn { amount: r.u64()? },
            T::CloseAccount => Self::CloseAccount,
            T::FreezeAccount => Self::FreezeAccount,
            T::ThawAccount => Self::ThawAccount,
            T::TransferChecked => Self::TransferChecked {
                amount: r.u64()?,
                decimals: r.u8()?,
            },
            T::ApproveChecked => Self::ApproveChecked {
                amount: r.u64()?,
                decimals: r.u8()?,
            },
            T::MintToChecked => Self::MintToChecked {
                amount: r.u64()?,
                decimals: r.u8()?,
            },
            T::BurnChecked => Self::BurnChecked {
                amount: r.u64()?,
                decimals: r.u8()?,
            },
        })
    }
}

fn write_option_address(w: &mut Writer, value: Option<&Address>) {
    match value {
        Some(address) => w.u8(1).address(address),
        None => w.u8(0).address(&Address::default()),
    };
}

fn read_option_address(r: &mut Reader<'_>) -> Result<Option<Address>, ProgramError> {
    let flag = r.u8()?;
    let address = r.address()?;
    match flag {
        0 => Ok(None),
        1 => Ok(Some(address)),
        other => Err(ProgramError::Decoding(format!("invalid option flag {other}"))),
    }
}
