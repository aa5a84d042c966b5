//! The 32-byte account address.
//!
//! An address is either an Ed25519 public key (a point on the curve, which
//! may sign) or a program-derived address (guaranteed off the curve). Both are
//! the same type; only provenance tells them apart. The human-readable form is
//! the Base58 encoding of the raw bytes using the Bitcoin alphabet.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;

/// Length in bytes of every address.
pub const ADDRESS_LEN: usize = 32;

/// A 32-byte account address.
///
/// `Address::default()` is all zeros, which is the System Program and the
/// sentinel used for "unset" optional accounts.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    pub const fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    pub const fn to_bytes(self) -> [u8; ADDRESS_LEN] {
        self.0
    }

    pub const fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Build an address from a slice that must be exactly 32 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self, CoreError> {
        let arr: [u8; ADDRESS_LEN] = bytes.try_into().map_err(|_| {
            CoreError::InvalidAddress(format!("expected 32 bytes, got {}", bytes.len()))
        })?;
        Ok(Self(arr))
    }

    /// True when every byte is zero.
    pub fn is_default(&self) -> bool {
        self.0 == [0u8; ADDRESS_LEN]
    }

    /// Check whether these bytes decompress to a valid Ed25519 point.
    ///
    /// Key-pair addresses are on the curve; program-derived addresses never
    /// are.
    pub fn is_on_curve(&self) -> bool {
        bytes_are_curve_point(&self.0)
    }
}

/// Uses `curve25519-dalek` to attempt decompression. If it succeeds, the
/// bytes are a curve point.
pub(crate) fn bytes_are_curve_point(bytes: &[u8; ADDRESS_LEN]) -> bool {
    curve25519_dalek::edwards::CompressedEdwardsY(*bytes)
        .decompress()
        .is_some()
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Address> for [u8; ADDRESS_LEN] {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bs58::encode(self.0).into_string())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

impl FromStr for Address {
    type Err = CoreError;

    /// Decode a Base58 string. Fails if the string is not valid Base58 or
    /// does not decode to exactly 32 bytes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|e| CoreError::InvalidAddress(format!("base58 decode failed: {e}")))?;

        let arr: [u8; ADDRESS_LEN] = bytes.try_into().map_err(|v: Vec<u8>| {
            CoreError::InvalidAddress(format!("expected 32 bytes, got {}", v.len()))
        })?;

        Ok(Self(arr))
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The System Program address is 32 zero bytes, which encodes to
    /// "11111111111111111111111111111111" in Base58.
    #[test]
    fn system_program_address() {
        let addr = Address::default();
        assert_eq!(addr.to_string(), "11111111111111111111111111111111");
        assert!(addr.is_default());
    }

    #[test]
    fn roundtrip_encode_decode() {
        let address = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";
        let parsed: Address = address.parse().unwrap();
        assert_eq!(parsed.to_string(), address);
    }

    #[test]
    fn bytes_survive_base58() {
        let pubkey: [u8; 32] = [
            0x0e, 0xf2, 0x35, 0x68, 0x3f, 0xbc, 0xb4, 0x92, 0xf1, 0x12, 0x66, 0x7c, 0xc6,
            0x22, 0xaf, 0x04, 0x0d, 0x13, 0x96, 0xab, 0x2b, 0x12, 0x3f, 0x8f, 0xc1, 0xa1,
            0xe1, 0x22, 0x64, 0xfe, 0xd6, 0xb7,
        ];
        let address = Address::new(pubkey);
        let recovered: Address = address.to_string().parse().unwrap();
        assert_eq!(recovered.to_bytes(), pubkey);
    }

    #[test]
    fn parse_garbage_returns_error() {
        let result = "not-a-valid-address!!!".parse::<Address>();
        assert!(matches!(result, Err(CoreError::InvalidAddress(_))));
    }

    #[test]
    fn parse_too_short_returns_error() {
        // "1" decodes to a single zero byte, which is not 32 bytes.
        let err = "1".parse::<Address>().unwrap_err();
        assert_eq!(err.to_string(), "invalid address: expected 32 bytes, got 1");
    }

    #[test]
    fn try_from_slice_checks_length() {
        assert!(Address::try_from_slice(&[7u8; 32]).is_ok());
        assert!(Address::try_from_slice(&[7u8; 31]).is_err());
        assert!(Address::try_from_slice(&[7u8; 33]).is_err());
    }

    #[test]
    fn debug_shows_base58() {
        let debug = format!("{:?}", Address::default());
        assert_eq!(debug, "Address(11111111111111111111111111111111)");
    }

    #[test]
    fn keypair_address_is_on_curve() {
        let signing_key = ed25519_dalek::SigningKey::generate(&mut rand::rngs::OsRng);
        let address = Address::new(signing_key.verifying_key().to_bytes());
        assert!(address.is_on_curve());
    }

    #[test]
    fn basepoint_is_on_curve() {
        let mut basepoint = [0x66u8; 32];
        basepoint[0] = 0x58;
        assert!(Address::new(basepoint).is_on_curve());
    }

    #[test]
    fn non_point_is_off_curve() {
        // y = 0x0202..02 has no matching x coordinate.
        assert!(!Address::new([0x02; 32]).is_on_curve());
    }

    #[test]
    fn serde_uses_base58_strings() {
        let address: Address = "MemoSq4gqABAXKb96qnH8TysNcWxMyWCqXgDLGmfcHr".parse().unwrap();
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, "\"MemoSq4gqABAXKb96qnH8TysNcWxMyWCqXgDLGmfcHr\"");
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, address);
    }

    #[test]
    fn serde_rejects_bad_strings() {
        assert!(serde_json::from_str::<Address>("\"xyz\"").is_err());
    }
}
