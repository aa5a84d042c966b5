//! Token program account state.
//!
//! Optional fields use a 4-byte little-endian `COption` tag (0 or 1) in front
//! of a fixed-width value that is present either way.

use sol_core::Address;

use crate::error::ProgramError;
use crate::layout::Reader;

/// Packed size of a mint account.
pub const MINT_LEN: usize = 82;

/// Packed size of a token account.
pub const TOKEN_ACCOUNT_LEN: usize = 165;

/// A token mint.
///
/// ```text
/// mint_authority   COption<[32]>   36
/// supply           u64              8
/// decimals         u8               1
/// is_initialized   u8               1
/// freeze_authority COption<[32]>   36
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mint {
    pub mint_authority: Option<Address>,
    pub supply: u64,
    pub decimals: u8,
    pub is_initialized: bool,
    pub freeze_authority: Option<Address>,
}

impl Mint {
    pub fn unpack(data: &[u8]) -> Result<Self, ProgramError> {
        check_len("mint", data, MINT_LEN)?;
        let mut r = Reader::new(data);
        let mint = Self {
            mint_authority: read_coption(&mut r, Reader::address)?,
            supply: r.u64()?,
            decimals: r.u8()?,
            is_initialized: read_bool(&mut r)?,
            freeze_authority: read_coption(&mut r, Reader::address)?,
        };
        r.finish()?;
        Ok(mint)
    }
}

/// Lifecycle state of a token account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum AccountState {
    Uninitialized = 0,
    Initialized = 1,
    Frozen = 2,
}

impl TryFrom<u8> for AccountState {
    type Error = ProgramError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Uninitialized),
            1 => Ok(Self::Initialized),
            2 => Ok(Self::Frozen),
            other => Err(ProgramError::Decoding(format!("invalid account state {other}"))),
        }
    }
}

/// A token account holding a balance of one mint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenAccount {
    pub mint: Address,
    pub owner: Address,
    pub amount: u64,
    pub delegate: Option<Address>,
    pub state: AccountState,
    /// Rent-exempt reserve, present only for wrapped native accounts.
    pub is_native: Option<u64>,
    pub delegated_amount: u64,
    pub close_authority: Option<Address>,
}

impl TokenAccount {
    pub fn unpack(data: &[u8]) -> Result<Self, ProgramError> {
        check_len("token account", data, TOKEN_ACCOUNT_LEN)?;
        let mut r = Reader::new(data);
        let account = Self {
            mint: r.address()?,
            owner: r.address()?,
            amount: r.u64()?,
            delegate: read_coption(&mut r, Reader::address)?,
            state: AccountState::try_from(r.u8()?)?,
            is_native: read_coption(&mut r, Reader::u64)?,
            delegated_amount: r.u64()?,
            close_authority: read_coption(&mut r, Reader::address)?,
        };
        r.finish()?;
        Ok(account)
    }

    pub fn is_frozen(&self) -> bool {
        self.state == AccountState::Frozen
    }
}

fn check_len(what: &str, data: &[u8], expected: usize) -> Result<(), ProgramError> {
    if data.len() != expected {
        return Err(ProgramError::Decoding(format!(
            "{what} data is {} bytes, expected {expected}",
            data.len()
        )));
    }
    Ok(())
}

fn read_coption<'a, T>(
    r: &mut Reader<'a>,
    read: impl FnOnce(&mut Reader<'a>) -> Result<T, ProgramError>,
) -> Result<Option<T>, ProgramError> {
    let tag = r.u32()?;
    let value = read(r)?;
    match tag {
        0 => Ok(None),
        1 => Ok(Some(value)),
        other => Err(ProgramError::Decoding(format!("invalid COption tag {other}"))),
    }
}

fn read_bool(r: &mut Reader<'_>) -> Result<bool, ProgramError> {
    match r.u8()? {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(ProgramError::Decoding(format!("invalid bool {other}"))),
    }
}
