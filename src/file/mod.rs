#![doc = r#"
Rusty representation of a [`MidiFile`]
"#]

/// Contains the [`MidiFileBuilder`](builder::MidiFileBuilder) and associated
///
/// MIDI file parsing events.
pub mod builder;

mod format;
pub use format::*;

mod header;
pub use header::*;

mod options;
pub use options::*;

mod rows;
pub use rows::*;

mod timing;
pub use timing::*;

mod track;
pub use track::*;

use crate::{file::builder::MidiFileBuilder, reader::ReadResult};
use alloc::vec::Vec;

#[doc = r#"
A decoded Standard MIDI File

Built once from a byte buffer and read-only afterwards. Event payloads
borrow from that buffer, so it must outlive the file.

# Example
```rust
use midilog::prelude::*;

fn dump(bytes: &[u8]) -> Result<(), ReaderError> {
    let file = MidiFile::parse(bytes)?;
    println!("{} ticks per beat, {:.2} seconds", file.ticks_per_beat(), file.length_seconds());
    for (i, track) in file.tracks().iter().enumerate() {
        println!("Track: {i}");
        for row in track.rows() {
            println!("{row}");
        }
    }
    Ok(())
}
```
"#]
#[derive(Clone, Debug, PartialEq)]
pub struct MidiFile<'a> {
    header: MidiFileHeader,
    tracks: Vec<Track<'a>>,
}

impl<'a> MidiFile<'a> {
    /// Parse a set of bytes into a file struct, with per-track tempo
    pub fn parse(bytes: &'a [u8]) -> ReadResult<Self> {
        Self::parse_with(bytes, &LoadOptions::default())
    }

    /// Parse a set of bytes into a file struct
    ///
    /// Fails on the first problem found; no partial file is produced.
    pub fn parse_with(bytes: &'a [u8], options: &LoadOptions) -> ReadResult<Self> {
        let chunks = builder::chunk::parse(bytes)?;
        let mut builder = MidiFileBuilder::new(chunks.header.into());

        for track in &chunks.tracks {
            builder.handle_track(track)?;
        }

        Ok(builder.build(options))
    }

    /// Returns header info
    pub const fn header(&self) -> &MidiFileHeader {
        &self.header
    }

    /// Ticks per quarter note
    pub const fn ticks_per_beat(&self) -> u16 {
        self.header.timing().ticks_per_quarter_note()
    }

    /// Returns the format type for the file.
    pub const fn format_type(&self) -> FormatType {
        self.header.format_type()
    }

    /// Returns the tracks in file order
    pub fn tracks(&self) -> &[Track<'a>] {
        &self.tracks
    }

    /// The length of the longest track in seconds
    pub fn length_seconds(&self) -> f64 {
        self.tracks
            .iter()
            .map(Track::length_seconds)
            .fold(0., f64::max)
    }
}
