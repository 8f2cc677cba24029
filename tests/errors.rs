mod common;

use common::{TrackBytes, chunk, header, smf};
use midilog::prelude::*;
use pretty_assertions::assert_eq;

fn parse_err(bytes: &[u8]) -> ReaderError {
    MidiFile::parse(bytes).unwrap_err()
}

#[test]
fn fewer_tracks_than_declared() {
    let mut bytes = header(1, 2, 480);
    bytes.extend(TrackBytes::new().end(0).chunk());
    let err = parse_err(&bytes);
    assert!(err.is_truncated());
    assert_eq!(err.position(), bytes.len());
}

#[test]
fn chunk_longer_than_file() {
    let mut bytes = header(0, 1, 480);
    bytes.extend_from_slice(b"MTrk");
    bytes.extend_from_slice(&100u32.to_be_bytes());
    bytes.extend_from_slice(&[0x00, 0xFF, 0x2F, 0x00]);
    assert_eq!(parse_err(&bytes).error_kind(), &ReaderErrorKind::TruncatedFile);
}

#[test]
fn unknown_status_names_its_track() {
    let good = TrackBytes::new().end(0).chunk();
    let bad = TrackBytes::new().raw(0, &[0xF4]).end(0).chunk();
    let bytes = smf(1, 480, &[good.clone(), bad]);

    let err = parse_err(&bytes);
    assert_eq!(err.error_kind(), &ReaderErrorKind::UnknownEventType(0xF4));
    assert_eq!(err.track(), Some(1));
    // header, first track, second track's framing and delta-time
    assert_eq!(err.position(), 14 + good.len() + 8 + 1);
}

#[test]
fn running_status_is_not_shared_between_tracks() {
    let first = TrackBytes::new().note_on(0, 0, 60, 90).end(0).chunk();
    let second = TrackBytes::new().raw(0, &[60, 0]).end(0).chunk();
    let err = parse_err(&smf(1, 480, &[first, second]));
    assert_eq!(err.error_kind(), &ReaderErrorKind::UnknownEventType(60));
    assert_eq!(err.track(), Some(1));
}

#[test]
fn missing_end_of_track() {
    let track = TrackBytes::new().note_on(0, 0, 60, 90).chunk();
    let err = parse_err(&smf(0, 480, &[track]));
    assert_eq!(err.error_kind(), &ReaderErrorKind::MissingEndOfTrack);
    assert_eq!(err.track(), Some(0));
}

#[test]
fn smpte_division_is_unsupported() {
    let bytes = smf(0, 0xE728, &[TrackBytes::new().end(0).chunk()]);
    let err = parse_err(&bytes);
    assert_eq!(
        err.error_kind(),
        &ReaderErrorKind::UnsupportedDivision(0xE728)
    );
    assert_eq!(err.position(), 12);
    assert_eq!(err.track(), None);
}

#[test]
fn header_problems() {
    let mut bytes = smf(0, 480, &[TrackBytes::new().end(0).chunk()]);
    bytes[..4].copy_from_slice(b"RIFF");
    assert_eq!(
        parse_err(&bytes).error_kind(),
        &ReaderErrorKind::Header(HeaderError::Magic(*b"RIFF"))
    );

    let mut bytes = chunk(b"MThd", &[0, 0, 0, 1, 1, 0xE0, 0]);
    bytes.extend(TrackBytes::new().end(0).chunk());
    assert_eq!(
        parse_err(&bytes).error_kind(),
        &ReaderErrorKind::Header(HeaderError::Length(7))
    );

    let bytes = smf(3, 480, &[TrackBytes::new().end(0).chunk()]);
    assert_eq!(
        parse_err(&bytes).error_kind(),
        &ReaderErrorKind::Header(HeaderError::Format(3))
    );

    let bytes = smf(0, 0, &[TrackBytes::new().end(0).chunk()]);
    assert_eq!(
        parse_err(&bytes).error_kind(),
        &ReaderErrorKind::Header(HeaderError::ZeroTicksPerBeat)
    );

    assert!(parse_err(b"MThd\0\0").is_truncated());
    assert!(parse_err(&[]).is_truncated());
}

#[test]
fn tolerated_deviations() {
    let mut bytes = header(1, 2, 96);
    bytes.extend(chunk(b"XFIH", &[1, 2, 3, 4]));
    bytes.extend(TrackBytes::new().end(0).raw(0, &[0xF4, 0xF4]).chunk());
    bytes.extend(chunk(b"XFKM", &[]));
    bytes.extend(TrackBytes::new().name("Bass").end(96).chunk());
    bytes.extend_from_slice(&[0xDE, 0xAD]);

    let file = MidiFile::parse(&bytes).unwrap();
    assert_eq!(file.tracks().len(), 2);
    assert_eq!(file.tracks()[0].len(), 1);
    assert_eq!(file.tracks()[1].name().as_deref(), Some("Bass"));
    assert_eq!(file.length_seconds(), 0.5);
}
