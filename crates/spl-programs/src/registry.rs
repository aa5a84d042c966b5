//! Program identifiers and fixed parameters, bundled as one immutable value.
//!
//! Every builder and decoder takes a `&ProgramRegistry` instead of reading
//! module-level globals, so the same code can target mainnet, devnet or a
//! local validator with its own deployments.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use sol_core::Address;

use crate::error::ProgramError;

// ---------------------------------------------------------------------------
// Well-known program IDs
// ---------------------------------------------------------------------------

/// The System Program: 32 zero bytes, `11111111111111111111111111111111`.
///
/// Also the default address used to mean "unset" for optional accounts.
pub const SYSTEM_PROGRAM_ID: Address = Address::new([0u8; 32]);

/// Mainnet name service: `namesLPneVptA9Z5rqUDD9tMTWEJwofgaYwp8cawRkX`
pub const MAINNET_NAME_PROGRAM_ID: Address = Address::new([
    0x0b, 0xad, 0x51, 0xf4, 0x13, 0xc1, 0xf3, 0xa9, 0x94, 0x60, 0xd9, 0x00, 0xd8, 0xbf, 0x2e,
    0xd6, 0x92, 0x7e, 0xca, 0x34, 0xd7, 0xb7, 0x84, 0x2b, 0xf8, 0x10, 0xa9, 0x73, 0x08, 0x2d,
    0x1e, 0xdc,
]);

/// Devnet name service: `Gh9eN9nDuS3ysmAkKf4QJ6yBzf3YNqsn6MD8Ms3TsXmA`
pub const DEVNET_NAME_PROGRAM_ID: Address = Address::new([
    0xe9, 0x28, 0x4f, 0x70, 0x4e, 0x9b, 0x68, 0x45, 0xeb, 0xdd, 0x8e, 0xfc, 0x9e, 0xbe, 0xca,
    0xb0, 0x99, 0x0d, 0xd0, 0x49, 0xc6, 0x6a, 0x29, 0x8e, 0x32, 0x10, 0x19, 0x60, 0x08, 0xf6,
    0x80, 0x69,
]);

/// Memo Program v2: `MemoSq4gqABAXKb96qnH8TysNcWxMyWCqXgDLGmfcHr`
pub const MEMO_PROGRAM_ID: Address = Address::new([
    0x05, 0x4a, 0x53, 0x5a, 0x99, 0x29, 0x21, 0x06, 0x4d, 0x24, 0xe8, 0x71, 0x60, 0xda, 0x38,
    0x7c, 0x7c, 0x35, 0xb5, 0xdd, 0xbc, 0x92, 0xbb, 0x81, 0xe4, 0x1f, 0xa8, 0x40, 0x41, 0x05,
    0x44, 0x8d,
]);

/// SPL Token Program: `TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA`
pub const TOKEN_PROGRAM_ID: Address = Address::new([
    0x06, 0xdd, 0xf6, 0xe1, 0xd7, 0x65, 0xa1, 0x93, 0xd9, 0xcb, 0xe1, 0x46, 0xce, 0xeb, 0x79,
    0xac, 0x1c, 0xb4, 0x85, 0xed, 0x5f, 0x5b, 0x37, 0x91, 0x3a, 0x8c, 0xf5, 0x85, 0x7e, 0xff,
    0x00, 0xa9,
]);

/// Associated Token Account Program: `ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL`
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Address = Address::new([
    0x8c, 0x97, 0x25, 0x8f, 0x4e, 0x24, 0x89, 0xf1, 0xbb, 0x3d, 0x10, 0x29, 0x14, 0x8e, 0x0d,
    0x83, 0x0b, 0x5a, 0x13, 0x99, 0xda, 0xff, 0x10, 0x84, 0x04, 0x8e, 0x7b, 0xd8, 0xdb, 0xe9,
    0xf8, 0x59,
]);

/// Rent sysvar: `SysvarRent111111111111111111111111111111111`
pub const SYSVAR_RENT_ID: Address = Address::new([
    0x06, 0xa7, 0xd5, 0x17, 0x19, 0x2c, 0x5c, 0x51, 0x21, 0x8c, 0xc9, 0x4c, 0x3d, 0x4a, 0xf1,
    0x7f, 0x58, 0xda, 0xee, 0x08, 0x9b, 0xa1, 0xfd, 0x44, 0xe3, 0xdb, 0xd9, 0x8a, 0x00, 0x00,
    0x00, 0x00,
]);

/// Prepended to a human-readable name before hashing it into seed material.
pub const NAME_HASH_PREFIX: &str = "SPL Name Service";

/// Bytes every name account reserves for its header metadata.
pub const MIN_ACCOUNT_BUFFER: u32 = 96;

/// A cluster with a known set of deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cluster {
    Mainnet,
    Devnet,
}

/// Program ids and constants consumed by the builders and decoders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramRegistry {
    pub name_program_id: Address,
    pub memo_program_id: Address,
    pub token_program_id: Address,
    pub associated_token_program_id: Address,
    /// The System Program, doubling as the default address for optional
    /// account parameters.
    pub system_program_id: Address,
    pub rent_sysvar_id: Address,
    pub name_hash_prefix: String,
    /// Extra bytes reserved on account creation for header metadata.
    pub account_buffer: u32,
}

impl ProgramRegistry {
    pub fn for_cluster(cluster: Cluster) -> Self {
        let name_program_id = match cluster {
            Cluster::Mainnet => MAINNET_NAME_PROGRAM_ID,
            Cluster::Devnet => DEVNET_NAME_PROGRAM_ID,
        };

        Self {
            name_program_id,
            memo_program_id: MEMO_PROGRAM_ID,
            token_program_id: TOKEN_PROGRAM_ID,
            associated_token_program_id: ASSOCIATED_TOKEN_PROGRAM_ID,
            system_program_id: SYSTEM_PROGRAM_ID,
            rent_sysvar_id: SYSVAR_RENT_ID,
            name_hash_prefix: NAME_HASH_PREFIX.to_owned(),
            account_buffer: MIN_ACCOUNT_BUFFER,
        }
    }

    pub fn mainnet() -> Self {
        Self::for_cluster(Cluster::Mainnet)
    }

    pub fn devnet() -> Self {
        Self::for_cluster(Cluster::Devnet)
    }

    /// Load a registry from JSON. Missing fields fall back to devnet.
    pub fn from_json(json: &str) -> Result<Self, ProgramError> {
        serde_json::from_str(json).map_err(|e| ProgramError::Config(e.to_string()))
    }

    /// The well-known address meaning "no account supplied".
    pub fn default_address(&self) -> Address {
        self.system_program_id
    }

    /// Hash a human-readable name with the configured prefix.
    pub fn hash_name(&self, name: &str) -> [u8; 32] {
        hashed_name(&self.name_hash_prefix, name)
    }

    /// Total account size to quote for rent when storing `space` data bytes.
    pub fn required_account_size(&self, space: u32) -> Result<u32, ProgramError> {
        space.checked_add(self.account_buffer).ok_or_else(|| {
            ProgramError::Encoding(format!(
                "space {space} plus buffer {} overflows u32",
                self.account_buffer
            ))
        })
    }
}

impl Default for ProgramRegistry {
    fn default() -> Self {
        Self::devnet()
    }
}

/// `SHA-256(prefix || name)`, the seed material for a name account.
pub fn hashed_name(prefix: &str, name: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(prefix.as_bytes());
    hasher.update(name.as_bytes());
    hasher.finalize().into()
}
