use thiserror::Error;

/// Errors raised by address handling and program-address derivation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid seeds: {0}")]
    InvalidSeeds(String),

    #[error("derived address lies on the ed25519 curve")]
    OnCurve,

    /// No bump in `0..=255` produced an off-curve digest. Callers should
    /// treat this as an invariant violation, not retry with other seeds.
    #[error("no off-curve program address exists for the supplied seeds")]
    DerivationExhausted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_address() {
        let err = CoreError::InvalidAddress("bad decode".into());
        assert_eq!(err.to_string(), "invalid address: bad decode");
    }

    #[test]
    fn display_invalid_seeds() {
        let err = CoreError::InvalidSeeds("seed 3 is 40 bytes".into());
        assert_eq!(err.to_string(), "invalid seeds: seed 3 is 40 bytes");
    }

    #[test]
    fn display_on_curve() {
        assert_eq!(
            CoreError::OnCurve.to_string(),
            "derived address lies on the ed25519 curve"
        );
    }

    #[test]
    fn display_derivation_exhausted() {
        assert_eq!(
            CoreError::DerivationExhausted.to_string(),
            "no off-curve program address exists for the supplied seeds"
        );
    }

    #[test]
    fn error_trait_is_implemented() {
        let err: Box<dyn std::error::Error> = Box::new(CoreError::InvalidAddress("test".into()));
        assert!(err.to_string().contains("test"));
    }
}
