#![doc = r#"
Channel messages

A channel message is a status byte whose high nibble selects the message and
whose low nibble selects one of sixteen channels, followed by one or two data
bytes.

```text
|--------|---------------------------|------------|
| Nibble | Message                   | Data bytes |
|--------|---------------------------|------------|
| 0x8    | Note Off                  | 2          |
| 0x9    | Note On                   | 2          |
| 0xA    | Polyphonic Aftertouch     | 2          |
| 0xB    | Control Change            | 2          |
| 0xC    | Program Change            | 1          |
| 0xD    | Channel Pressure          | 1          |
| 0xE    | Pitch Bend                | 2          |
|--------|---------------------------|------------|
```
"#]

use core::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// The high nibble of a channel message status byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ChannelStatus {
    /// Release a note
    NoteOff = 0x8,
    /// Press a note
    NoteOn = 0x9,
    /// Pressure change on a single held note
    PolyphonicAftertouch = 0xA,
    /// Controller value change
    ControlChange = 0xB,
    /// Select an instrument
    ProgramChange = 0xC,
    /// Pressure change for the whole channel
    ChannelPressure = 0xD,
    /// Pitch wheel position
    PitchBend = 0xE,
}

impl ChannelStatus {
    /// Number of data bytes that follow the status byte.
    pub const fn data_len(&self) -> usize {
        match self {
            Self::ProgramChange | Self::ChannelPressure => 1,
            _ => 2,
        }
    }
}

#[doc = r#"
A decoded channel message

The raw data bytes are kept as read. Messages with a single data byte
leave the second slot at zero.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelMessage {
    status: ChannelStatus,
    channel: u8,
    data: [u8; 2],
}

impl ChannelMessage {
    /// Build a message from its parts.
    ///
    /// Only the low nibble of `channel` is kept.
    pub const fn new(status: ChannelStatus, channel: u8, data: [u8; 2]) -> Self {
        let data = if status.data_len() == 1 {
            [data[0], 0]
        } else {
            data
        };
        Self {
            status,
            channel: channel & 0x0F,
            data,
        }
    }

    /// Split a status byte into its message kind and channel.
    ///
    /// Returns `None` for anything outside `0x80..=0xEF`.
    pub fn split_status(byte: u8) -> Option<(ChannelStatus, u8)> {
        let status = ChannelStatus::try_from(byte >> 4).ok()?;
        Some((status, byte & 0x0F))
    }

    /// The message kind
    pub const fn status(&self) -> ChannelStatus {
        self.status
    }

    /// The full status byte, kind and channel combined
    pub const fn status_byte(&self) -> u8 {
        ((self.status as u8) << 4) | self.channel
    }

    /// Zero-based channel, 0-15
    pub const fn channel(&self) -> u8 {
        self.channel
    }

    /// The data bytes that were present in the file
    pub fn data(&self) -> &[u8] {
        &self.data[..self.status.data_len()]
    }

    /// The 14-bit pitch wheel position centred on zero, for pitch bend messages
    pub const fn pitch(&self) -> Option<i16> {
        match self.status {
            ChannelStatus::PitchBend => {
                let raw = ((self.data[1] as i16 & 0x7F) << 7) | (self.data[0] as i16 & 0x7F);
                Some(raw - 8192)
            }
            _ => None,
        }
    }
}

impl fmt::Display for ChannelMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let channel = self.channel;
        let [a, b] = self.data;
        match self.status {
            ChannelStatus::NoteOff => {
                write!(f, "note_off channel={channel} note={a} velocity={b}")
            }
            ChannelStatus::NoteOn => {
                write!(f, "note_on channel={channel} note={a} velocity={b}")
            }
            ChannelStatus::PolyphonicAftertouch => {
                write!(f, "polytouch channel={channel} note={a} value={b}")
            }
            ChannelStatus::ControlChange => {
                write!(f, "control_change channel={channel} control={a} value={b}")
            }
            ChannelStatus::ProgramChange => {
                write!(f, "program_change channel={channel} program={a}")
            }
            ChannelStatus::ChannelPressure => {
                write!(f, "aftertouch channel={channel} value={a}")
            }
            ChannelStatus::PitchBend => {
                let pitch = self.pitch().unwrap_or_default();
                write!(f, "pitchwheel channel={channel} pitch={pitch}")
            }
        }
    }
}

#[test]
fn split_status_byte() {
    assert_eq!(
        ChannelMessage::split_status(0x93),
        Some((ChannelStatus::NoteOn, 3))
    );
    assert_eq!(
        ChannelMessage::split_status(0xEF),
        Some((ChannelStatus::PitchBend, 15))
    );
    assert_eq!(ChannelMessage::split_status(0xF0), None);
    assert_eq!(ChannelMessage::split_status(0x7F), None);
}

#[test]
fn single_data_byte_messages() {
    let msg = ChannelMessage::new(ChannelStatus::ProgramChange, 2, [5, 99]);
    assert_eq!(msg.data(), &[5]);
    assert_eq!(msg.status_byte(), 0xC2);
}

#[test]
fn describes_messages() {
    use alloc::string::ToString;
    use pretty_assertions::assert_eq;

    let on = ChannelMessage::new(ChannelStatus::NoteOn, 0, [60, 90]);
    assert_eq!(on.to_string(), "note_on channel=0 note=60 velocity=90");

    let centre = ChannelMessage::new(ChannelStatus::PitchBend, 1, [0x00, 0x40]);
    assert_eq!(centre.pitch(), Some(0));
    assert_eq!(centre.to_string(), "pitchwheel channel=1 pitch=0");

    let low = ChannelMessage::new(ChannelStatus::PitchBend, 1, [0x00, 0x00]);
    assert_eq!(low.pitch(), Some(-8192));
}
