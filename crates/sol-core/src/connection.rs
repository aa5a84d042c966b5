//! The narrow surface this workspace needs from an RPC client.
//!
//! Transport, signing, retries and confirmation polling all live behind this
//! trait. Builders produce the [`Instruction`] handed to `submit`; the account
//! decoders consume the bytes returned by `fetch_account_bytes`.

use crate::address::Address;
use crate::instruction::Instruction;

/// Encoding requested when fetching account data over RPC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountEncoding {
    Base58,
    #[default]
    Base64,
    JsonParsed,
}

impl AccountEncoding {
    /// The name used in the `encoding` field of an RPC request.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountEncoding::Base58 => "base58",
            AccountEncoding::Base64 => "base64",
            AccountEncoding::JsonParsed => "jsonParsed",
        }
    }
}

/// A connection to a cluster.
///
/// Implementations may block. Only the trait lives here; callers bring the
/// transport.
pub trait Connection {
    type Error: std::error::Error;

    /// Sign with the keys behind `signers`, submit, and return the
    /// transaction signature.
    fn submit(&self, instruction: &Instruction, signers: &[Address]) -> Result<String, Self::Error>;

    /// Fetch the raw data of an account, already decoded from `encoding`.
    fn fetch_account_bytes(
        &self,
        address: &Address,
        encoding: AccountEncoding,
    ) -> Result<Vec<u8>, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_names() {
        assert_eq!(AccountEncoding::Base58.as_str(), "base58");
        assert_eq!(AccountEncoding::Base64.as_str(), "base64");
        assert_eq!(AccountEncoding::JsonParsed.as_str(), "jsonParsed");
        assert_eq!(AccountEncoding::default(), AccountEncoding::Base64);
    }
}
