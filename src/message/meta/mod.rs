#![doc = r#"
Meta events

Meta events only exist inside MIDI files. They are introduced by `0xFF`,
followed by a type byte, a variable-length payload length and the payload.

The types that matter for timing are End-of-Track (`0x2F`), which closes
every track, and Set-Tempo (`0x51`), which carries a 24-bit
microseconds-per-quarter-note value.
"#]

mod smpte_offset;
pub use smpte_offset::*;

use alloc::{borrow::Cow, string::String};
use core::fmt;

use num_enum::{FromPrimitive, IntoPrimitive};

use super::ByteTuple;

/// The type byte of a meta event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum MetaType {
    /// `FF 00 02`
    SequenceNumber = 0x00,
    /// Any text
    Text = 0x01,
    /// Copyright notice
    Copyright = 0x02,
    /// Sequence or track name
    TrackName = 0x03,
    /// Instrument name
    InstrumentName = 0x04,
    /// Lyric syllable
    Lyric = 0x05,
    /// Rehearsal letter or section name
    Marker = 0x06,
    /// Description of something happening on stage
    CuePoint = 0x07,
    /// Program (patch) name
    ProgramName = 0x08,
    /// Device (port) name
    DeviceName = 0x09,
    /// Channel that subsequent meta and sysex events refer to
    ChannelPrefix = 0x20,
    /// Output port
    MidiPort = 0x21,
    /// `FF 2F 00`, closes a track
    EndOfTrack = 0x2F,
    /// `FF 51 03 tt tt tt`
    SetTempo = 0x51,
    /// `FF 54 05 hr mn se fr ff`
    SmpteOffset = 0x54,
    /// `FF 58 04 nn dd cc bb`
    TimeSignature = 0x58,
    /// `FF 59 02 sf mi`
    KeySignature = 0x59,
    /// Manufacturer specific data
    SequencerSpecific = 0x7F,
    /// Any type byte this crate does not know
    #[num_enum(catch_all)]
    Unknown(u8),
}

/// A meta event borrowing its payload from the file buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetaMessage<'a> {
    kind: MetaType,
    data: &'a [u8],
}

impl<'a> MetaMessage<'a> {
    /// Create a meta message from its type byte and payload
    pub fn new(type_byte: u8, data: &'a [u8]) -> Self {
        Self {
            kind: MetaType::from(type_byte),
            data,
        }
    }

    /// The meta type
    pub const fn kind(&self) -> MetaType {
        self.kind
    }

    /// The raw type byte
    pub fn type_byte(&self) -> u8 {
        self.kind.into()
    }

    /// The payload as it appears in the file
    pub const fn data(&self) -> &'a [u8] {
        self.data
    }

    /// True for the End-of-Track event
    pub const fn is_end_of_track(&self) -> bool {
        matches!(self.kind, MetaType::EndOfTrack)
    }

    /// Microseconds per quarter note, for a well-formed Set-Tempo event
    pub const fn tempo(&self) -> Option<u32> {
        match (self.kind, self.data) {
            (MetaType::SetTempo, &[a, b, c]) => Some(u32::from_be_bytes([0, a, b, c])),
            _ => None,
        }
    }

    /// The payload decoded as text, for the text-like meta types
    pub fn text(&self) -> Option<Cow<'a, str>> {
        use MetaType::*;
        match self.kind {
            Text | Copyright | TrackName | InstrumentName | Lyric | Marker | CuePoint
            | ProgramName | DeviceName => Some(String::from_utf8_lossy(self.data)),
            _ => None,
        }
    }
}

impl fmt::Display for MetaMessage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(text) = self.text() {
            let (name, field) = match self.kind {
                MetaType::Copyright => ("copyright", "text"),
                MetaType::TrackName => ("track_name", "name"),
                MetaType::InstrumentName => ("instrument_name", "name"),
                MetaType::Lyric => ("lyrics", "text"),
                MetaType::Marker => ("marker", "text"),
                MetaType::CuePoint => ("cue_marker", "text"),
                MetaType::ProgramName => ("program_name", "name"),
                MetaType::DeviceName => ("device_name", "name"),
                _ => ("text", "text"),
            };
            return write!(f, "{name} {field}='{text}'");
        }
        if let Some(tempo) = self.tempo() {
            return write!(f, "set_tempo tempo={tempo}");
        }

        match (self.kind, self.data) {
            (MetaType::SequenceNumber, &[msb, lsb]) => {
                write!(f, "sequence_number number={}", u16::from_be_bytes([msb, lsb]))
            }
            (MetaType::ChannelPrefix, &[channel]) => write!(f, "channel_prefix channel={channel}"),
            (MetaType::MidiPort, &[port]) => write!(f, "midi_port port={port}"),
            (MetaType::EndOfTrack, _) => f.write_str("end_of_track"),
            (MetaType::SmpteOffset, data) => match SmpteOffset::parse(data) {
                Ok(offset) => write!(
                    f,
                    "smpte_offset frame_rate={} hours={} minutes={} seconds={} frames={} sub_frames={}",
                    offset.fps.as_f64(),
                    offset.hour,
                    offset.minute,
                    offset.second,
                    offset.frame,
                    offset.subframe
                ),
                Err(_) => write!(f, "smpte_offset data={}", ByteTuple(data)),
            },
            (MetaType::TimeSignature, &[numerator, denominator, clocks, notated]) => write!(
                f,
                "time_signature numerator={numerator} denominator={} clocks_per_click={clocks} notated_32nd_notes_per_beat={notated}",
                1u32.checked_shl(u32::from(denominator)).unwrap_or(0)
            ),
            (MetaType::KeySignature, &[sharps_flats, mode]) => {
                match key_name(sharps_flats as i8, mode) {
                    Some(key) => write!(f, "key_signature key='{key}'"),
                    None => write!(f, "key_signature data={}", ByteTuple(self.data)),
                }
            }
            (MetaType::SequencerSpecific, data) => {
                write!(f, "sequencer_specific data={}", ByteTuple(data))
            }
            (MetaType::Unknown(type_byte), data) => {
                write!(f, "unknown_meta type_byte={type_byte:#04x} data={}", ByteTuple(data))
            }
            (kind, data) => write!(f, "{} data={}", meta_name(kind), ByteTuple(data)),
        }
    }
}

// malformed payloads of known types are rendered raw under their usual name
fn meta_name(kind: MetaType) -> &'static str {
    match kind {
        MetaType::SequenceNumber => "sequence_number",
        MetaType::ChannelPrefix => "channel_prefix",
        MetaType::MidiPort => "midi_port",
        MetaType::SetTempo => "set_tempo",
        MetaType::TimeSignature => "time_signature",
        MetaType::KeySignature => "key_signature",
        _ => "meta",
    }
}

const MAJOR_KEYS: [&str; 15] = [
    "Cb", "Gb", "Db", "Ab", "Eb", "Bb", "F", "C", "G", "D", "A", "E", "B", "F#", "C#",
];
const MINOR_KEYS: [&str; 15] = [
    "Abm", "Ebm", "Bbm", "Fm", "Cm", "Gm", "Dm", "Am", "Em", "Bm", "F#m", "C#m", "G#m", "D#m",
    "A#m",
];

/// Key name for a key signature, `sharps_flats` in `-7..=7`, `mode` 0 for major and 1 for minor.
fn key_name(sharps_flats: i8, mode: u8) -> Option<&'static str> {
    if !(-7..=7).contains(&sharps_flats) {
        return None;
    }
    let index = (sharps_flats + 7) as usize;
    match mode {
        0 => Some(MAJOR_KEYS[index]),
        1 => Some(MINOR_KEYS[index]),
        _ => None,
    }
}

#[test]
fn tempo_requires_three_bytes() {
    let tempo = MetaMessage::new(0x51, &[0x07, 0xA1, 0x20]);
    assert_eq!(tempo.kind(), MetaType::SetTempo);
    assert_eq!(tempo.tempo(), Some(500_000));

    assert_eq!(MetaMessage::new(0x51, &[0x07, 0xA1]).tempo(), None);
    assert_eq!(MetaMessage::new(0x01, &[0x07, 0xA1, 0x20]).tempo(), None);
}

#[test]
fn unknown_types_are_kept() {
    let meta = MetaMessage::new(0x4B, &[1, 2]);
    assert_eq!(meta.kind(), MetaType::Unknown(0x4B));
    assert_eq!(meta.type_byte(), 0x4B);
}

#[test]
fn describes_meta_events() {
    use alloc::string::ToString;
    use pretty_assertions::assert_eq;

    let cases: [(u8, &[u8], &str); 9] = [
        (0x03, b"Piano", "track_name name='Piano'"),
        (0x2F, &[], "end_of_track"),
        (0x51, &[0x0F, 0x42, 0x40], "set_tempo tempo=1000000"),
        (
            0x58,
            &[4, 2, 24, 8],
            "time_signature numerator=4 denominator=4 clocks_per_click=24 notated_32nd_notes_per_beat=8",
        ),
        (0x59, &[0xFE, 0], "key_signature key='Bb'"),
        (0x59, &[3, 1], "key_signature key='F#m'"),
        (0x21, &[1], "midi_port port=1"),
        (0x51, &[0x01], "set_tempo data=(1)"),
        (0x4B, &[1, 2], "unknown_meta type_byte=0x4b data=(1, 2)"),
    ];
    for (type_byte, data, expected) in cases {
        assert_eq!(MetaMessage::new(type_byte, data).to_string(), expected);
    }
}
