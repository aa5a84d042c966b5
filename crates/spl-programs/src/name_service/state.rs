//! Name account state.
//!
//! ```text
//! parent_name [u8; 32] | owner [u8; 32] | class [u8; 32] | data [u8; ..]
//! ```

use sol_core::{AccountEncoding, Address, Connection};

use crate::error::ProgramError;
use crate::layout::Reader;

/// Size of the fixed header at the front of every name account.
pub const NAME_RECORD_HEADER_LEN: usize = 96;

/// The fixed metadata the name service keeps in front of a record's data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameRecordHeader {
    /// The parent name account, or the default address for a root name.
    pub parent_name: Address,
    pub owner: Address,
    /// The class account, or the default address when unset.
    pub class: Address,
}

impl NameRecordHeader {
    pub fn unpack(data: &[u8]) -> Result<Self, ProgramError> {
        let mut r = Reader::new(data);
        let header = Self::read(&mut r)?;
        r.finish()?;
        Ok(header)
    }

    fn read(r: &mut Reader<'_>) -> Result<Self, ProgramError> {
        Ok(Self {
            parent_name: r.address()?,
            owner: r.address()?,
            class: r.address()?,
        })
    }
}

/// A name account: header followed by the owner's data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRecord {
    pub header: NameRecordHeader,
    pub data: Vec<u8>,
}

impl NameRecord {
    pub fn unpack(data: &[u8]) -> Result<Self, ProgramError> {
        let mut r = Reader::new(data);
        let header = NameRecordHeader::read(&mut r)?;
        let rest = r.take(r.remaining())?;
        Ok(Self {
            header,
            data: rest.to_vec(),
        })
    }
}

/// Fetch a name account and decode it.
pub fn fetch_name_record<C: Connection>(
    connection: &C,
    address: &Address,
) -> Result<NameRecord, ProgramError> {
    let bytes = connection
        .fetch_account_bytes(address, AccountEncoding::Base64)
        .map_err(|e| ProgramError::Connection(e.to_string()))?;
    tracing::debug!(%address, len = bytes.len(), "fetched name account");
    NameRecord::unpack(&bytes)
}
