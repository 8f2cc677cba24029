#![doc = r#"
Decode Standard MIDI Files into an absolute-time event log.

A file is parsed once from a byte buffer into an immutable [`MidiFile`](crate::file::MidiFile).
Every event carries its delta-time, the accumulated ticks of its track and the
elapsed wall-clock seconds derived from the tempo in force at that tick.

# Example
```rust
use midilog::prelude::*;

let bytes = [
    // MThd, length 6, format 0, one track, 480 ticks per beat
    b'M', b'T', b'h', b'd', 0, 0, 0, 6, 0, 0, 0, 1, 0x01, 0xE0,
    // MTrk, length 13
    b'M', b'T', b'r', b'k', 0, 0, 0, 13,
    0x00, 0x90, 60, 90,         // note on at tick 0
    0x83, 0x60, 0x80, 60, 0,    // note off 480 ticks later
    0x00, 0xFF, 0x2F, 0x00,     // end of track
];

let file = MidiFile::parse(&bytes).unwrap();
assert_eq!(file.ticks_per_beat(), 480);
assert_eq!(file.length_seconds(), 0.5);

let rows: Vec<_> = file.tracks()[0].rows().map(|row| row.to_string()).collect();
assert_eq!(rows[1], "00480 =  0.50 : note_off channel=0 note=60 velocity=0");
```
"#]
#![no_std]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod file;
pub mod message;
pub mod reader;

#[doc = r#"
Commonly used types
"#]
pub mod prelude {
    pub use crate::file::*;
    pub use crate::message::*;
    pub use crate::reader::{HeaderError, ReadResult, ReaderError, ReaderErrorKind};
}
