#![doc = r#"
Variable-length quantities

Delta-times and several length fields in a MIDI file are written as a
variable-length quantity: seven bits of value per byte, most significant
group first. Every byte but the last has its high bit set.

```text
0x00000000 -> 00
0x00000040 -> 40
0x0000007F -> 7F
0x00000080 -> 81 00
0x00003FFF -> FF 7F
0x0FFFFFFF -> FF FF FF 7F
```

A quantity is at most four bytes long, so the largest value is `0x0FFF_FFFF`.
"#]

use super::ReaderErrorKind;

/// Maximum number of bytes a variable-length quantity may occupy.
pub const MAX_LEN: usize = 4;

/// Decode the variable-length quantity starting at `offset`.
///
/// Returns the value and the number of bytes it occupied.
///
/// # Errors
/// [`ReaderErrorKind::MalformedEncoding`] if four bytes pass without a
/// terminating byte, or if the buffer ends first.
pub fn decode(bytes: &[u8], offset: usize) -> Result<(u32, usize), ReaderErrorKind> {
    let mut value: u32 = 0;
    for consumed in 0..MAX_LEN {
        let Some(&byte) = bytes.get(offset + consumed) else {
            return Err(ReaderErrorKind::MalformedEncoding);
        };
        value = (value << 7) | u32::from(byte & 0x7F);
        if byte & 0x80 == 0 {
            return Ok((value, consumed + 1));
        }
    }
    Err(ReaderErrorKind::MalformedEncoding)
}

#[test]
fn decodes_reference_values() {
    use pretty_assertions::assert_eq;
    let cases: [(&[u8], u32); 8] = [
        (&[0x00], 0x00),
        (&[0x40], 0x40),
        (&[0x7F], 0x7F),
        (&[0x81, 0x00], 0x80),
        (&[0xC0, 0x00], 0x2000),
        (&[0xFF, 0x7F], 0x3FFF),
        (&[0x81, 0x80, 0x00], 0x4000),
        (&[0xFF, 0xFF, 0xFF, 0x7F], 0x0FFF_FFFF),
    ];
    for (bytes, expected) in cases {
        assert_eq!(decode(bytes, 0).unwrap(), (expected, bytes.len()));
    }
}

#[test]
fn decodes_from_offset() {
    let bytes = [0xAA, 0xBB, 0x83, 0x60, 0x90];
    assert_eq!(decode(&bytes, 2).unwrap(), (480, 2));
}

#[test]
fn rejects_five_byte_quantity() {
    let bytes = [0x81, 0x80, 0x80, 0x80, 0x00];
    assert!(matches!(
        decode(&bytes, 0),
        Err(ReaderErrorKind::MalformedEncoding)
    ));
}

#[test]
fn rejects_unterminated_quantity() {
    assert!(matches!(
        decode(&[0x81, 0x80], 0),
        Err(ReaderErrorKind::MalformedEncoding)
    ));
    assert!(matches!(
        decode(&[0x00], 1),
        Err(ReaderErrorKind::MalformedEncoding)
    ));
}
