//! Name service instruction data layout.
//!
//! ```text
//! instruction_type      u8
//! Create:   hashed_name_size u32 | hashed_name [u8; 32] | lamports u64 | space u32
//! Update:   offset u32 | size u32 | input_data [u8; size]
//! Transfer: new_owner [u8; 32]
//! Delete:   (empty)
//! ```

use std::fmt;

use sol_core::Address;

use crate::error::ProgramError;
use crate::layout::{size_field, Reader, Writer};

/// Width of the SHA-256 name hash carried by `Create`.
pub const HASHED_NAME_LEN: usize = 32;

/// Name service instruction discriminants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum NameInstructionType {
    Create = 0,
    Update = 1,
    Transfer = 2,
    Delete = 3,
}

impl TryFrom<u8> for NameInstructionType {
    type Error = ProgramError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Self::Create),
            1 => Ok(Self::Update),
            2 => Ok(Self::Transfer),
            3 => Ok(Self::Delete),
            other => Err(ProgramError::UnknownInstructionType(other)),
        }
    }
}

impl fmt::Display for NameInstructionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A decoded name service instruction payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameInstruction {
    Create {
        hashed_name_size: u32,
        hashed_name: Vec<u8>,
        lamports: u64,
        space: u32,
    },
    Update {
        offset: u32,
        size: u32,
        input_data: Vec<u8>,
    },
    Transfer {
        new_owner: Address,
    },
    Delete,
}

impl NameInstruction {
    /// `Create` with `hashed_name_size` taken from the hash itself.
    pub fn create(hashed_name: &[u8], lamports: u64, space: u32) -> Result<Self, ProgramError> {
        Ok(Self::Create {
            hashed_name_size: size_field("hashed_name", hashed_name.len())?,
            hashed_name: hashed_name.to_vec(),
            lamports,
            space,
        })
    }

    /// `Update` with `size` taken from the data.
    pub fn update(offset: u32, input_data: &[u8]) -> Result<Self, ProgramError> {
        Ok(Self::Update {
            offset,
            size: size_field("input_data", input_data.len())?,
            input_data: input_data.to_vec(),
        })
    }

    pub fn instruction_type(&self) -> NameInstructionType {
        match self {
            Self::Create { .. } => NameInstructionType::Create,
            Self::Update { .. } => NameInstructionType::Update,
            Self::Transfer { .. } => NameInstructionType::Transfer,
            Self::Delete => NameInstructionType::Delete,
        }
    }

    /// Serialize into instruction data.
    pub fn pack(&self) -> Result<Vec<u8>, ProgramError> {
        match self {
            Self::Create {
                hashed_name_size,
                hashed_name,
                lamports,
                space,
            } => {
                if hashed_name.len() != HASHED_NAME_LEN {
                    return Err(ProgramError::FieldWidth {
                        field: "hashed_name",
                        expected: HASHED_NAME_LEN,
                        found: hashed_name.len(),
                    });
                }
                check_declared_size("hashed_name", *hashed_name_size, hashed_name.len())?;

                let mut w = Writer::with_capacity(1 + 4 + HASHED_NAME_LEN + 8 + 4);
                w.u8(NameInstructionType::Create as u8)
                    .u32(*hashed_name_size)
                    .bytes(hashed_name)
                    .u64(*lamports)
                    .u32(*space);
                Ok(w.finish())
            }
            Self::Update {
                offset,
                size,
                input_data,
            } => {
                check_declared_size("input_data", *size, input_data.len())?;

                let mut w = Writer::with_capacity(1 + 4 + 4 + input_data.len());
                w.u8(NameInstructionType::Update as u8)
                    .u32(*offset)
                    .u32(*size)
                    .bytes(input_data);
                Ok(w.finish())
            }
            Self::Transfer { new_owner } => {
                let mut w = Writer::with_capacity(1 + 32);
                w.u8(NameInstructionType::Transfer as u8).address(new_owner);
                Ok(w.finish())
            }
            Self::Delete => Ok(vec![NameInstructionType::Delete as u8]),
        }
    }

    /// Decode a payload that must occupy the whole buffer.
    pub fn unpack(data: &[u8]) -> Result<Self, ProgramError> {
        let (instruction, consumed) = Self::unpack_prefix(data)?;
        if consumed != data.len() {
            return Err(ProgramError::Decoding(format!(
                "{} trailing bytes after {} instruction",
                data.len() - consumed,
                instruction.instruction_type()
            )));
        }
        Ok(instruction)
    }

    /// Decode a payload from the front of `data`, returning it with the
    /// number of bytes it occupied. Lengths come from the size sub-fields,
    /// never from what is left in the buffer.
    pub fn unpack_prefix(data: &[u8]) -> Result<(Self, usize), ProgramError> {
        let mut r = Reader::new(data);
        let tag = r.u8()?;

        let instruction = match NameInstructionType::try_from(tag)? {
            NameInstructionType::Create => {
                let hashed_name_size = r.u32()?;
                if hashed_name_size as usize != HASHED_NAME_LEN {
                    return Err(ProgramError::Decoding(format!(
                        "hashed_name_size is {hashed_name_size}, expected {HASHED_NAME_LEN}"
                    )));
                }
                Self::Create {
                    hashed_name_size,
                    hashed_name: r.take(HASHED_NAME_LEN)?.to_vec(),
                    lamports: r.u64()?,
                    space: r.u32()?,
                }
            }
            NameInstructionType::Update => {
                let offset = r.u32()?;
                let size = r.u32()?;
                Self::Update {
                    offset,
                    size,
                    input_data: r.take(size as usize)?.to_vec(),
                }
            }
            NameInstructionType::Transfer => Self::Transfer {
                new_owner: r.address()?,
            },
            NameInstructionType::Delete => Self::Delete,
        };

        Ok((instruction, r.position()))
    }
}

fn check_declared_size(
    field: &'static str,
    declared: u32,
    actual: usize,
) -> Result<(), ProgramError> {
    if declared as usize != actual {
        return Err(ProgramError::LengthMismatch {
            field,
            declared: declared as usize,
            actual,
        });
    }
    Ok(())
}
