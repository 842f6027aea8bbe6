//! Byte-level reader with bounded operations.

use crate::error::{ByteError, ByteResult};

/// A cursor over a byte slice that decodes big-endian integers.
///
/// All read operations are bounds-checked before consuming anything, so a
/// failed read leaves the cursor where it was. The reader never panics on
/// malformed input.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a new `ByteReader` positioned at the start of `data`.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the number of bytes remaining to read.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns `true` if there are no more bytes to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the current byte position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Reads a big-endian `u32`.
    pub fn read_u32_be(&mut self) -> ByteResult<u32> {
        let bytes = self.read_array::<4>()?;
        Ok(u32::from_be_bytes(bytes))
    }

    /// Reads a big-endian `i16`.
    pub fn read_i16_be(&mut self) -> ByteResult<i16> {
        let bytes = self.read_array::<2>()?;
        Ok(i16::from_be_bytes(bytes))
    }

    /// Borrows the next `len` bytes and advances past them.
    pub fn read_bytes(&mut self, len: usize) -> ByteResult<&'a [u8]> {
        self.ensure_bytes(len)?;
        let start = self.pos;
        self.pos += len;
        Ok(&self.data[start..self.pos])
    }

    /// Advances the cursor by `len` bytes.
    pub fn skip(&mut self, len: usize) -> ByteResult<()> {
        self.ensure_bytes(len)?;
        self.pos += len;
        Ok(())
    }

    /// Returns the unread tail without consuming it.
    #[must_use]
    pub fn rest(&self) -> &'a [u8] {
        &self.data[self.pos.min(self.data.len())..]
    }

    fn ensure_bytes(&self, len: usize) -> ByteResult<()> {
        let available = self.remaining();
        if len > available {
            return Err(ByteError::UnexpectedEof {
                requested: len,
                available,
            });
        }
        Ok(())
    }

    fn read_array<const N: usize>(&mut self) -> ByteResult<[u8; N]> {
        let slice = self.read_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(slice);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_reader() {
        let reader = ByteReader::new(&[]);
        assert!(reader.is_empty());
        assert_eq!(reader.remaining(), 0);
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn read_from_empty_fails() {
        let mut reader = ByteReader::new(&[]);
        let result = reader.read_u32_be();
        assert!(matches!(
            result,
            Err(ByteError::UnexpectedEof {
                requested: 4,
                available: 0
            })
        ));
    }

    #[test]
    fn read_u32_is_big_endian() {
        let mut reader = ByteReader::new(&[0x12, 0x34, 0x56, 0x78]);
        assert_eq!(reader.read_u32_be().unwrap(), 0x1234_5678);
        assert!(reader.is_empty());
    }

    #[test]
    fn read_i16_negative() {
        let mut reader = ByteReader::new(&[0xFF, 0xFE, 0x7F, 0xFF]);
        assert_eq!(reader.read_i16_be().unwrap(), -2);
        assert_eq!(reader.read_i16_be().unwrap(), i16::MAX);
    }

    #[test]
    fn failed_read_does_not_advance() {
        let mut reader = ByteReader::new(&[0x00, 0x01, 0x02]);
        assert!(reader.read_u32_be().is_err());
        assert_eq!(reader.position(), 0);
        assert_eq!(reader.read_i16_be().unwrap(), 1);
        assert_eq!(reader.position(), 2);
    }

    #[test]
    fn read_bytes_borrows_input() {
        let data = [1u8, 2, 3, 4, 5];
        let mut reader = ByteReader::new(&data);
        reader.skip(1).unwrap();
        assert_eq!(reader.read_bytes(3).unwrap(), &[2, 3, 4]);
        assert_eq!(reader.rest(), &[5]);
        let err = reader.read_bytes(2).unwrap_err();
        assert_eq!(
            err,
            ByteError::UnexpectedEof {
                requested: 2,
                available: 1
            }
        );
    }

    #[test]
    fn skip_past_end_fails() {
        let mut reader = ByteReader::new(&[0; 4]);
        assert!(reader.skip(5).is_err());
        reader.skip(4).unwrap();
        assert!(reader.is_empty());
    }
}
