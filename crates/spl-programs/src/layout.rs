//! Little-endian byte cursors shared by the instruction and account codecs.
//!
//! All multi-byte integers are unsigned little-endian with no implicit
//! padding. Variable-length fields always carry their own size and the reader
//! never infers a length from what is left in the buffer.

use sol_core::{Address, ADDRESS_LEN};

use crate::error::ProgramError;

/// Appends fields to an instruction or account buffer.
#[derive(Debug, Default)]
pub(crate) struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn u8(&mut self, value: u8) -> &mut Self {
        self.buf.push(value);
        self
    }

    pub(crate) fn u32(&mut self, value: u32) -> &mut Self {
        self.buf.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub(crate) fn u64(&mut self, value: u64) -> &mut Self {
        self.buf.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub(crate) fn bytes(&mut self, value: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(value);
        self
    }

    pub(crate) fn address(&mut self, value: &Address) -> &mut Self {
        self.bytes(value.as_bytes())
    }

    pub(crate) fn finish(self) -> Vec<u8> {
        self.buf
    }
}

/// Reads fields from a borrowed buffer, tracking the offset.
#[derive(Debug)]
pub(crate) struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes consumed so far.
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub(crate) fn take(&mut self, len: usize) -> Result<&'a [u8], ProgramError> {
        let end = self.pos.checked_add(len).ok_or_else(|| {
            ProgramError::Decoding(format!("length {len} overflows the buffer offset"))
        })?;
        if end > self.buf.len() {
            return Err(ProgramError::BufferTooShort {
                needed: end,
                found: self.buf.len(),
            });
        }
        let slice = &self.buf[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    pub(crate) fn array<const N: usize>(&mut self) -> Result<[u8; N], ProgramError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    pub(crate) fn u8(&mut self) -> Result<u8, ProgramError> {
        Ok(self.take(1)?[0])
    }

    pub(crate) fn u32(&mut self) -> Result<u32, ProgramError> {
        self.array().map(u32::from_le_bytes)
    }

    pub(crate) fn u64(&mut self) -> Result<u64, ProgramError> {
        self.array().map(u64::from_le_bytes)
    }

    pub(crate) fn address(&mut self) -> Result<Address, ProgramError> {
        self.array::<ADDRESS_LEN>().map(Address::new)
    }

    /// Fail if any bytes are left unread.
    pub(crate) fn finish(self) -> Result<(), ProgramError> {
        match self.remaining() {
            0 => Ok(()),
            extra => Err(ProgramError::Decoding(format!(
                "{extra} trailing bytes after {} byte payload",
                self.pos
            ))),
        }
    }
}

/// Convert a buffer length to the `u32` size sub-field that precedes it.
pub(crate) fn size_field(field: &'static str, len: usize) -> Result<u32, ProgramError> {
    u32::try_from(len)
        .map_err(|_| ProgramError::Encoding(format!("field `{field}` is too long: {len} bytes")))
}
