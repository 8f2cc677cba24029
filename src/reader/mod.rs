#![doc = r#"
Byte-level reading of Standard MIDI File data.

The [`Reader`] is a cursor over a borrowed buffer. Every error it produces
carries the absolute byte offset in the file where the problem was detected,
even when the reader only covers the body of a single track chunk.
"#]

mod error;
pub use error::*;

pub mod varlen;

/// A cursor over a borrowed byte buffer.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    buf: &'a [u8],
    position: usize,
    base: usize,
}

impl<'a> Reader<'a> {
    /// Create a reader over a complete file buffer.
    pub const fn from_byte_slice(buf: &'a [u8]) -> Self {
        Self {
            buf,
            position: 0,
            base: 0,
        }
    }

    /// Create a reader over a sub-slice that starts at `base` in the file.
    pub(crate) const fn with_base(buf: &'a [u8], base: usize) -> Self {
        Self {
            buf,
            position: 0,
            base,
        }
    }

    /// Absolute offset of the next byte to be read.
    pub const fn buffer_position(&self) -> usize {
        self.base + self.position
    }

    /// Number of unread bytes.
    pub const fn remaining(&self) -> usize {
        self.buf.len() - self.position
    }

    /// True if every byte has been consumed.
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// The unread bytes.
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.position..]
    }

    /// Look at the next byte without consuming it.
    pub fn peek_u8(&self) -> Option<u8> {
        self.buf.get(self.position).copied()
    }

    /// Consume one byte.
    pub fn read_u8(&mut self) -> ReadResult<u8> {
        let byte = self.peek_u8().ok_or_else(|| self.truncated())?;
        self.position += 1;
        Ok(byte)
    }

    /// Consume exactly `N` bytes.
    pub fn read_exact_size<const N: usize>(&mut self) -> ReadResult<[u8; N]> {
        let slice = self.read_slice(N)?;
        let mut out = [0; N];
        out.copy_from_slice(slice);
        Ok(out)
    }

    /// Consume `len` bytes, borrowing them from the underlying buffer.
    pub fn read_slice(&mut self, len: usize) -> ReadResult<&'a [u8]> {
        if len > self.remaining() {
            return Err(self.truncated());
        }
        let start = self.position;
        self.position += len;
        Ok(&self.buf[start..self.position])
    }

    /// Consume a big-endian `u16`.
    pub fn read_u16(&mut self) -> ReadResult<u16> {
        self.read_exact_size().map(u16::from_be_bytes)
    }

    /// Consume a big-endian `u32`.
    pub fn read_u32(&mut self) -> ReadResult<u32> {
        self.read_exact_size().map(u32::from_be_bytes)
    }

    /// Consume a variable-length quantity.
    ///
    /// See [`varlen::decode`].
    pub fn read_varlen(&mut self) -> ReadResult<u32> {
        let (value, consumed) = varlen::decode(self.buf, self.position)
            .map_err(|kind| ReaderError::new(self.buffer_position(), kind))?;
        self.position += consumed;
        Ok(value)
    }

    /// Skip `len` bytes.
    pub fn skip(&mut self, len: usize) -> ReadResult<()> {
        self.read_slice(len).map(|_| ())
    }

    fn truncated(&self) -> ReaderError {
        ReaderError::new(self.buffer_position(), ReaderErrorKind::TruncatedFile)
    }
}

#[test]
fn positions_are_absolute() {
    let bytes = [0x00, 0x01, 0x02, 0x03];
    let mut reader = Reader::with_base(&bytes[2..], 2);
    assert_eq!(reader.buffer_position(), 2);
    assert_eq!(reader.read_u8().unwrap(), 0x02);
    assert_eq!(reader.buffer_position(), 3);

    reader.read_u8().unwrap();
    let err = reader.read_u8().unwrap_err();
    assert_eq!(err.position(), 4);
    assert!(err.is_truncated());
}

#[test]
fn reads_big_endian_fields() {
    let bytes = [0x00, 0x06, 0x00, 0x00, 0x01, 0xE0];
    let mut reader = Reader::from_byte_slice(&bytes);
    assert_eq!(reader.read_u16().unwrap(), 6);
    assert_eq!(reader.read_u32().unwrap(), 480);
    assert!(reader.is_empty());
}

#[test]
fn short_slice_is_truncated() {
    let bytes = [0x01, 0x02];
    let mut reader = Reader::from_byte_slice(&bytes);
    assert!(reader.read_slice(3).unwrap_err().is_truncated());
    // nothing was consumed by the failed read
    assert_eq!(reader.remaining(), 2);
}
