//! Instruction codecs and clients for the name service, SPL Token and memo
//! programs.
//!
//! Each program module provides:
//!
//! * a tagged layout codec (`pack` / `unpack`) for its instruction data,
//! * builders that take a [`ProgramRegistry`] plus a params struct and return
//!   a [`sol_core::Instruction`] with its accounts in the order the program
//!   reads them,
//! * decoders that validate an [`Instruction`](sol_core::Instruction) and
//!   recover the params it was built from.
//!
//! Building and decoding are pure; nothing here talks to a cluster except
//! through a caller-supplied [`sol_core::Connection`].

pub mod error;
pub mod memo;
pub mod name_service;
pub mod registry;
pub mod token;
pub mod validate;

pub(crate) mod layout;

// Re-export key public types for ergonomic imports.
pub use error::ProgramError;
pub use memo::{decode_memo, memo_instruction, MemoParams};
pub use registry::{hashed_name, Cluster, ProgramRegistry};
