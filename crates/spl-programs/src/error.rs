use sol_core::{Address, CoreError};
use thiserror::Error;

/// Errors raised while encoding, decoding, validating or building program
/// instructions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgramError {
    // -- Encoding -----------------------------------------------------------
    #[error("encoding error: field `{field}` must be {expected} bytes, got {found}")]
    FieldWidth {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("encoding error: field `{field}` declares {declared} bytes but {actual} were supplied")]
    LengthMismatch {
        field: &'static str,
        declared: usize,
        actual: usize,
    },

    #[error("encoding error: {0}")]
    Encoding(String),

    // -- Decoding -----------------------------------------------------------
    #[error("decoding error: buffer too short, need {needed} bytes, got {found}")]
    BufferTooShort { needed: usize, found: usize },

    #[error("decoding error: unknown instruction type {0}")]
    UnknownInstructionType(u8),

    #[error("decoding error: {0}")]
    Decoding(String),

    // -- Validation ---------------------------------------------------------
    #[error("validation error: expected {expected} account references, found {found}")]
    AccountCount { expected: String, found: usize },

    #[error("validation error: expected instruction type {expected}, found {found}")]
    InstructionTypeMismatch { expected: String, found: String },

    #[error("validation error: expected program {expected}, found {found}")]
    ProgramIdMismatch { expected: Address, found: Address },

    #[error("validation error: account {index} should be {expected}, found {found}")]
    AccountMismatch {
        index: usize,
        expected: Address,
        found: Address,
    },

    #[error("validation error: account {index} ({address}) must be a signer")]
    MissingSigner { index: usize, address: Address },

    // -- Build-time constraints ---------------------------------------------
    #[error("constraint violated: {0}")]
    Constraint(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}
