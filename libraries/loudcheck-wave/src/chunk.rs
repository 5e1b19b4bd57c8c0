//! Bounds-checked little-endian reader for RIFF byte streams
//!
//! Every read is validated against the remaining input before a byte is
//! touched, so a truncated or lying container surfaces as
//! [`WaveError::MalformedContainer`] instead of a panic or an overread.

use crate::error::{Result, WaveError};

/// Cursor over a RIFF byte stream
///
/// Tracks the current offset and refuses any read that would cross the
/// end of the input.
pub(crate) struct ChunkReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ChunkReader<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Bytes left between the cursor and the end of the input
    pub(crate) fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    /// Advance past `len` bytes and return them, or fail without moving
    fn take(&mut self, len: usize, what: &str) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(WaveError::malformed(format!(
                "{} needs {} bytes at offset {} but only {} remain",
                what,
                len,
                self.pos,
                self.remaining()
            )));
        }
        let slice = &self.bytes[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    /// Read a 4-byte chunk identifier
    pub(crate) fn read_id(&mut self, what: &str) -> Result<[u8; 4]> {
        let bytes = self.take(4, what)?;
        Ok([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    /// Read a little-endian u16
    pub(crate) fn read_u16(&mut self, what: &str) -> Result<u16> {
        let bytes = self.take(2, what)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    /// Read a little-endian u32
    pub(crate) fn read_u32(&mut self, what: &str) -> Result<u32> {
        let bytes = self.take(4, what)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Skip `len` bytes without inspecting them
    pub(crate) fn skip(&mut self, len: usize, what: &str) -> Result<()> {
        self.take(len, what).map(|_| ())
    }

    /// Copy `len` bytes out of the stream
    pub(crate) fn read_bytes(&mut self, len: usize, what: &str) -> Result<Vec<u8>> {
        self.take(len, what).map(<[u8]>::to_vec)
    }
}
