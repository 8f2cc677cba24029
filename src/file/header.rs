use super::{FormatType, TicksPerQuarterNote, builder::chunk::RawHeaderChunk};

#[doc = r#"
   Information from the header chunk of the MIDI file
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MidiFileHeader {
    format: FormatType,
    num_tracks: u16,
    timing: TicksPerQuarterNote,
}

impl MidiFileHeader {
    /// Create a new header
    pub const fn new(format: FormatType, num_tracks: u16, timing: TicksPerQuarterNote) -> Self {
        Self {
            format,
            num_tracks,
            timing,
        }
    }
    /// The file format
    pub const fn format_type(&self) -> FormatType {
        self.format
    }
    /// Number of tracks
    pub const fn num_tracks(&self) -> u16 {
        self.num_tracks
    }
    /// Get the timing props
    pub const fn timing(&self) -> TicksPerQuarterNote {
        self.timing
    }
}

impl From<RawHeaderChunk> for MidiFileHeader {
    fn from(value: RawHeaderChunk) -> Self {
        Self::new(value.format_type(), value.num_tracks(), value.timing())
    }
}
