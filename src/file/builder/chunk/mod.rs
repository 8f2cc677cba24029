#![doc = r#"
Contains types for MIDI file chunks

# Overview

MIDI files are organized into chunks, each identified by a 4-character ASCII type identifier
followed by a 32-bit big-endian length field and then the chunk data.

## [`RawHeaderChunk`]

The header chunk (identified by "MThd") must be the first chunk in a MIDI file. It holds
the [`FormatType`](crate::file::FormatType), the number of track chunks and the
division, which must be a tick count per quarter note.

## [`RawTrackChunk`]

Track chunks (identified by "MTrk") contain the events of one track. Exactly as many
track chunks as the header declares are read.

## Unknown chunks

Any chunk with a type identifier other than "MThd" or "MTrk" is skipped. Its
declared length must still fit in the file.

# Example Structure

```text
[Header Chunk: "MThd"]
[Track Chunk 1: "MTrk"]
[Optional Unknown Chunk]
[Track Chunk 2: "MTrk"]
...
[Track Chunk N: "MTrk"]
```
"#]

mod header;
pub use header::*;

mod track;
pub use track::*;

use alloc::vec::Vec;

use crate::reader::{ReadResult, Reader};

/// The header and track chunks of a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawChunks<'a> {
    /// The header chunk
    pub header: RawHeaderChunk,
    /// Track chunk bodies in file order
    pub tracks: Vec<RawTrackChunk<'a>>,
}

/// Split a file into its header and track chunks.
///
/// # Errors
/// - header problems, see [`RawHeaderChunk`]
/// - [`TruncatedFile`](crate::reader::ReaderErrorKind::TruncatedFile) if a chunk
///   declares more bytes than remain, or fewer track chunks than declared are present
pub fn parse(bytes: &[u8]) -> ReadResult<RawChunks<'_>> {
    let mut reader = Reader::from_byte_slice(bytes);
    let header = RawHeaderChunk::read(&mut reader)?;

    let num_tracks = usize::from(header.num_tracks());
    let mut tracks = Vec::with_capacity(num_tracks);
    while tracks.len() < num_tracks {
        let id: [u8; 4] = reader.read_exact_size()?;
        let len = reader.read_u32()? as usize;
        let start = reader.buffer_position();
        let data = reader.read_slice(len)?;

        if &id == TRACK_ID {
            tracks.push(RawTrackChunk::new(data, start));
        } else {
            log::debug!(
                "skipping unknown chunk '{}' of {len} bytes at {start}",
                id.escape_ascii()
            );
        }
    }

    if !reader.is_empty() {
        log::debug!("{} bytes after the last track chunk", reader.remaining());
    }

    Ok(RawChunks { header, tracks })
}

#[test]
fn splits_track_chunks() {
    use crate::file::FormatType;
    use pretty_assertions::assert_eq;

    let bytes = [
        b'M', b'T', b'h', b'd', 0, 0, 0, 6, 0, 1, 0, 2, 0x01, 0xE0,
        b'M', b'T', b'r', b'k', 0, 0, 0, 4, 0x00, 0xFF, 0x2F, 0x00,
        b'J', b'U', b'N', b'K', 0, 0, 0, 1, 0xAA,
        b'M', b'T', b'r', b'k', 0, 0, 0, 0,
    ];
    let chunks = parse(&bytes).unwrap();
    assert_eq!(chunks.header.format_type(), FormatType::Simultaneous);
    assert_eq!(chunks.header.num_tracks(), 2);
    assert_eq!(chunks.header.timing().ticks_per_quarter_note(), 480);

    let ranges: Vec<_> = chunks.tracks.iter().map(RawTrackChunk::range).collect();
    assert_eq!(ranges, [22..26, 43..43]);
    assert_eq!(chunks.tracks[0].data(), &[0x00, 0xFF, 0x2F, 0x00]);
}
