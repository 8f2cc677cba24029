use crate::{
    file::{FormatType, TicksPerQuarterNote},
    reader::{HeaderError, ReadResult, Reader, ReaderError},
};

/// Identifier of the header chunk
pub const HEADER_ID: &[u8; 4] = b"MThd";

/// Length of the header chunk body
pub const HEADER_LEN: u32 = 6;

#[doc = r#"
The header chunk of a MIDI file

```text
"MThd" 00 00 00 06 <format: u16> <ntrks: u16> <division: u16>
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawHeaderChunk {
    format: FormatType,
    num_tracks: u16,
    timing: TicksPerQuarterNote,
}

impl RawHeaderChunk {
    /// Read the header from the start of the file.
    pub(crate) fn read(reader: &mut Reader<'_>) -> ReadResult<Self> {
        let start = reader.buffer_position();
        let id: [u8; 4] = reader.read_exact_size()?;
        if &id != HEADER_ID {
            return Err(ReaderError::new(start, HeaderError::Magic(id).into()));
        }

        let len_position = reader.buffer_position();
        let len = reader.read_u32()?;
        if len != HEADER_LEN {
            return Err(ReaderError::new(len_position, HeaderError::Length(len).into()));
        }

        let format_position = reader.buffer_position();
        let format = reader.read_u16()?;
        let format = FormatType::try_from(format)
            .map_err(|_| ReaderError::new(format_position, HeaderError::Format(format).into()))?;

        let num_tracks = reader.read_u16()?;

        let division_position = reader.buffer_position();
        let timing = TicksPerQuarterNote::from_division(reader.read_u16()?)
            .map_err(|kind| ReaderError::new(division_position, kind))?;

        if format == FormatType::SingleMultiChannel && num_tracks != 1 {
            log::warn!("format 0 file declares {num_tracks} tracks");
        }

        Ok(Self {
            format,
            num_tracks,
            timing,
        })
    }

    /// The file format
    pub const fn format_type(&self) -> FormatType {
        self.format
    }

    /// Number of track chunks the file declares
    pub const fn num_tracks(&self) -> u16 {
        self.num_tracks
    }

    /// The file's ticks per quarter note
    pub const fn timing(&self) -> TicksPerQuarterNote {
        self.timing
    }
}
