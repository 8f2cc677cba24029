#![doc = r#"
The events that make up a track

Each event in a track chunk is one of three kinds, selected by its status byte:

```text
|-----------|---------------------------------------------|
| Status    | Event                                       |
|-----------|---------------------------------------------|
| 0x80-0xEF | Channel message (running status applies)    |
| 0xF0/0xF7 | System exclusive, VLQ length then payload   |
| 0xFF      | Meta event, type, VLQ length then payload   |
|-----------|---------------------------------------------|
```

Everything else is rejected.
"#]

mod channel;
pub use channel::*;

mod meta;
pub use meta::*;

mod sysex;
pub use sysex::*;

use core::fmt;

#[doc = r#"
The tagged set of events a track may contain
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackMessage<'a> {
    /// A channel voice or mode message
    ChannelVoice(ChannelMessage),
    /// A meta event
    Meta(MetaMessage<'a>),
    /// A system exclusive packet
    SystemExclusive(SysexMessage<'a>),
}

impl<'a> TrackMessage<'a> {
    /// Returns the meta message, if this is one
    pub const fn meta(&self) -> Option<&MetaMessage<'a>> {
        match self {
            Self::Meta(meta) => Some(meta),
            _ => None,
        }
    }

    /// Microseconds per quarter note if this is a well-formed Set-Tempo event
    pub const fn tempo(&self) -> Option<u32> {
        match self {
            Self::Meta(meta) => meta.tempo(),
            _ => None,
        }
    }

    /// True for the End-of-Track meta event
    pub const fn is_end_of_track(&self) -> bool {
        matches!(self, Self::Meta(meta) if meta.is_end_of_track())
    }
}

impl From<ChannelMessage> for TrackMessage<'_> {
    fn from(value: ChannelMessage) -> Self {
        Self::ChannelVoice(value)
    }
}

impl<'a> From<MetaMessage<'a>> for TrackMessage<'a> {
    fn from(value: MetaMessage<'a>) -> Self {
        Self::Meta(value)
    }
}

impl<'a> From<SysexMessage<'a>> for TrackMessage<'a> {
    fn from(value: SysexMessage<'a>) -> Self {
        Self::SystemExclusive(value)
    }
}

impl fmt::Display for TrackMessage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChannelVoice(msg) => msg.fmt(f),
            Self::Meta(msg) => msg.fmt(f),
            Self::SystemExclusive(msg) => msg.fmt(f),
        }
    }
}

/// A message and the ticks elapsed since the previous event in its track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackEvent<'a> {
    delta_ticks: u32,
    message: TrackMessage<'a>,
}

impl<'a> TrackEvent<'a> {
    /// Create a new track event
    pub const fn new(delta_ticks: u32, message: TrackMessage<'a>) -> Self {
        Self {
            delta_ticks,
            message,
        }
    }
    /// Ticks since the previous event in the same track
    pub const fn delta_ticks(&self) -> u32 {
        self.delta_ticks
    }
    /// The event itself
    pub const fn message(&self) -> &TrackMessage<'a> {
        &self.message
    }
}

/// Renders bytes as `(1, 2, 3)`
pub(crate) struct ByteTuple<'a>(pub(crate) &'a [u8]);

impl fmt::Display for ByteTuple<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{byte}")?;
        }
        f.write_str(")")
    }
}

#[test]
fn describes_sysex() {
    use alloc::string::ToString;
    use pretty_assertions::assert_eq;

    let msg = TrackMessage::from(SysexMessage::new(SysexKind::Start, &[0x43, 0x12, 0xF7]));
    assert_eq!(msg.to_string(), "sysex data=(67, 18, 247)");
    assert!(!msg.is_end_of_track());
    assert_eq!(msg.tempo(), None);
}
