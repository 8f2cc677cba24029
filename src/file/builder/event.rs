#![doc = r#"
Decoding the event stream of a track chunk

```text
<delta-time: VLQ> <status> <data...>
<delta-time: VLQ> <data...>               running status, reuses the last channel status
<delta-time: VLQ> FF <type> <len: VLQ> <payload>
<delta-time: VLQ> F0|F7 <len: VLQ> <payload>
```

Running status only carries over between channel messages of the same
track. Decoding stops at End-of-Track; anything after it is ignored.
"#]

use alloc::vec::Vec;

use crate::{
    message::{ChannelMessage, MetaMessage, SysexKind, SysexMessage, TrackEvent, TrackMessage},
    reader::{ReadResult, Reader, ReaderError, ReaderErrorKind},
};

/// Decode a track chunk body into its events.
///
/// Byte offsets in errors are relative to `data`.
pub fn decode_track(data: &[u8]) -> ReadResult<Vec<TrackEvent<'_>>> {
    EventDecoder::new(data).decode()
}

/// Reads the events of a single track
#[derive(Debug, Clone)]
pub struct EventDecoder<'a> {
    reader: Reader<'a>,
    running_status: Option<u8>,
}

impl<'a> EventDecoder<'a> {
    /// Create a decoder over a track body.
    pub const fn new(data: &'a [u8]) -> Self {
        Self::with_base(data, 0)
    }

    /// Create a decoder over a track body located at `base` in the file.
    pub const fn with_base(data: &'a [u8], base: usize) -> Self {
        Self {
            reader: Reader::with_base(data, base),
            running_status: None,
        }
    }

    /// Decode events up to and including End-of-Track.
    ///
    /// # Errors
    /// - [`ReaderErrorKind::MissingEndOfTrack`] if the data ends first
    /// - [`ReaderErrorKind::TruncatedFile`] if the data ends mid-event
    /// - [`ReaderErrorKind::MalformedEncoding`] for a bad variable-length quantity
    /// - [`ReaderErrorKind::UnknownEventType`] for an unrecognized status byte, or
    ///   a data byte where no running status is available
    pub fn decode(mut self) -> ReadResult<Vec<TrackEvent<'a>>> {
        let mut events = Vec::new();
        loop {
            if self.reader.is_empty() {
                return Err(ReaderError::new(
                    self.reader.buffer_position(),
                    ReaderErrorKind::MissingEndOfTrack,
                ));
            }
            let event = self.read_event()?;
            let end = event.message().is_end_of_track();
            events.push(event);
            if end {
                break;
            }
        }

        if !self.reader.is_empty() {
            log::debug!(
                "ignoring {} bytes after End-of-Track at {}",
                self.reader.remaining(),
                self.reader.buffer_position()
            );
        }
        Ok(events)
    }

    fn read_event(&mut self) -> ReadResult<TrackEvent<'a>> {
        let delta_ticks = self.reader.read_varlen()?;

        let position = self.reader.buffer_position();
        let Some(next) = self.reader.peek_u8() else {
            return Err(ReaderError::new(position, ReaderErrorKind::TruncatedFile));
        };
        let status = if next & 0x80 == 0 {
            self.running_status
                .ok_or(ReaderError::new(position, ReaderErrorKind::UnknownEventType(next)))?
        } else {
            self.reader.read_u8()?
        };

        let message = match status {
            0xFF => {
                let type_byte = self.reader.read_u8()?;
                let len = self.reader.read_varlen()?;
                let data = self.reader.read_slice(len as usize)?;
                TrackMessage::Meta(MetaMessage::new(type_byte, data))
            }
            0xF0 | 0xF7 => {
                let len = self.reader.read_varlen()?;
                let data = self.reader.read_slice(len as usize)?;
                let kind = SysexKind::from_status(status).unwrap_or(SysexKind::Start);
                TrackMessage::SystemExclusive(SysexMessage::new(kind, data))
            }
            _ => {
                let Some((kind, channel)) = ChannelMessage::split_status(status) else {
                    return Err(ReaderError::new(
                        position,
                        ReaderErrorKind::UnknownEventType(status),
                    ));
                };
                self.running_status = Some(status);

                let mut data = [0; 2];
                for byte in data.iter_mut().take(kind.data_len()) {
                    *byte = self.reader.read_u8()?;
                }
                TrackMessage::ChannelVoice(ChannelMessage::new(kind, channel, data))
            }
        };

        Ok(TrackEvent::new(delta_ticks, message))
    }
}

#[cfg(test)]
fn expect_err(data: &[u8]) -> ReaderErrorKind {
    decode_track(data).unwrap_err().error_kind().clone()
}

#[test]
fn reads_minimal_track() {
    let events = decode_track(&[0x00, 0xFF, 0x2F, 0x00]).unwrap();
    assert_eq!(events.len(), 1);
    assert!(events[0].message().is_end_of_track());
}

#[test]
fn running_status_inherits_data_length() {
    use crate::message::ChannelStatus;
    use pretty_assertions::assert_eq;

    let data = [
        0x00, 0xC1, 0x05, // program change, one data byte
        0x10, 0x07, // running status: program change 7
        0x00, 0x91, 0x3C, 0x40, // note on
        0x60, 0x3C, 0x00, // running status: note on, velocity 0
        0x00, 0xFF, 0x2F, 0x00,
    ];
    let events = decode_track(&data).unwrap();
    let messages: Vec<TrackMessage<'_>> = events.iter().map(|e| *e.message()).collect();
    let expected: [TrackMessage<'_>; 5] = [
        ChannelMessage::new(ChannelStatus::ProgramChange, 1, [5, 0]).into(),
        ChannelMessage::new(ChannelStatus::ProgramChange, 1, [7, 0]).into(),
        ChannelMessage::new(ChannelStatus::NoteOn, 1, [0x3C, 0x40]).into(),
        ChannelMessage::new(ChannelStatus::NoteOn, 1, [0x3C, 0x00]).into(),
        MetaMessage::new(0x2F, &[]).into(),
    ];
    assert_eq!(messages, expected);
    assert_eq!(events[1].delta_ticks(), 0x10);
    assert_eq!(events[3].delta_ticks(), 0x60);
}

#[test]
fn meta_and_sysex_keep_running_status() {
    let data = [
        0x00, 0x90, 0x3C, 0x40,
        0x00, 0xFF, 0x01, 0x02, b'h', b'i',
        0x00, 0xF0, 0x02, 0x43, 0xF7,
        0x00, 0x3C, 0x00,
        0x00, 0xFF, 0x2F, 0x00,
    ];
    let events = decode_track(&data).unwrap();
    assert_eq!(events.len(), 5);
    assert!(matches!(
        events[2].message(),
        TrackMessage::SystemExclusive(sysex) if sysex.data() == [0x43, 0xF7]
    ));
    assert!(matches!(
        events[3].message(),
        TrackMessage::ChannelVoice(msg) if msg.status_byte() == 0x90 && msg.data() == [0x3C, 0x00]
    ));
}

#[test]
fn running_status_needs_prior_status() {
    assert_eq!(
        expect_err(&[0x00, 0x3C, 0x40, 0x00, 0xFF, 0x2F, 0x00]),
        ReaderErrorKind::UnknownEventType(0x3C)
    );
}

#[test]
fn unknown_status_byte() {
    assert_eq!(
        expect_err(&[0x00, 0xF4, 0x00, 0xFF, 0x2F, 0x00]),
        ReaderErrorKind::UnknownEventType(0xF4)
    );
}

#[test]
fn track_without_end() {
    assert_eq!(
        expect_err(&[0x00, 0x90, 0x3C, 0x40]),
        ReaderErrorKind::MissingEndOfTrack
    );
    assert_eq!(expect_err(&[]), ReaderErrorKind::MissingEndOfTrack);
}

#[test]
fn track_ending_mid_event() {
    assert_eq!(expect_err(&[0x00, 0x90, 0x3C]), ReaderErrorKind::TruncatedFile);
    assert_eq!(expect_err(&[0x00]), ReaderErrorKind::TruncatedFile);
    assert_eq!(
        expect_err(&[0x00, 0xFF, 0x01, 0x05, b'a']),
        ReaderErrorKind::TruncatedFile
    );
}

#[test]
fn bad_delta_time() {
    assert_eq!(
        expect_err(&[0x80, 0x80, 0x80, 0x80, 0x00, 0xFF, 0x2F, 0x00]),
        ReaderErrorKind::MalformedEncoding
    );
}

#[test]
fn bytes_after_end_of_track_are_ignored() {
    let events = decode_track(&[0x00, 0xFF, 0x2F, 0x00, 0x00, 0x00, 0xF4]).unwrap();
    assert_eq!(events.len(), 1);
}

#[test]
fn error_positions_are_file_offsets() {
    let err = EventDecoder::with_base(&[0x00, 0xF4], 22).decode().unwrap_err();
    assert_eq!(err.position(), 23);
}
