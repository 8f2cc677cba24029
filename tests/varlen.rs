mod common;

use common::vlq;
use midilog::{reader::Reader, reader::varlen};
use pretty_assertions::assert_eq;

fn canonical_len(value: u32) -> usize {
    match value {
        0..0x80 => 1,
        0x80..0x4000 => 2,
        0x4000..0x20_0000 => 3,
        _ => 4,
    }
}

#[test]
fn decode_inverts_encode() {
    let boundaries = [
        0,
        1,
        0x7F,
        0x80,
        0x3FFF,
        0x4000,
        0x1F_FFFF,
        0x20_0000,
        0x0FFF_FFFF,
    ];
    let sampled = (0..(1u32 << 28)).step_by(65_521);
    for value in boundaries.into_iter().chain(sampled) {
        let bytes = vlq(value);
        assert_eq!(bytes.len(), canonical_len(value), "encoding {value:#x}");
        assert_eq!(varlen::decode(&bytes, 0), Ok((value, bytes.len())));
    }
}

#[test]
fn reader_advances_past_quantity() {
    let mut bytes = vlq(0x20_0000);
    bytes.push(0x90);
    let mut reader = Reader::from_byte_slice(&bytes);
    assert_eq!(reader.read_varlen(), Ok(0x20_0000));
    assert_eq!(reader.buffer_position(), 4);
    assert_eq!(reader.read_u8(), Ok(0x90));
}

#[test]
fn malformed_quantity_reports_its_offset() {
    let bytes = [0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F];
    let mut reader = Reader::from_byte_slice(&bytes);
    assert_eq!(reader.read_varlen(), Ok(0));
    let err = reader.read_varlen().unwrap_err();
    assert_eq!(err.position(), 1);
    assert_eq!(
        err.error_kind(),
        &midilog::reader::ReaderErrorKind::MalformedEncoding
    );
}
