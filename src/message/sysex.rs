use core::fmt;

use super::ByteTuple;

/// Which status byte introduced a system exclusive event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SysexKind {
    /// `F0 <len> <bytes>`, a complete or first packet
    Start,
    /// `F7 <len> <bytes>`, a continuation packet or an escaped arbitrary message
    Escape,
}

impl SysexKind {
    /// Map a status byte to its sysex kind.
    pub const fn from_status(byte: u8) -> Option<Self> {
        match byte {
            0xF0 => Some(Self::Start),
            0xF7 => Some(Self::Escape),
            _ => None,
        }
    }
}

/// A system exclusive event borrowing its payload from the file buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SysexMessage<'a> {
    kind: SysexKind,
    data: &'a [u8],
}

impl<'a> SysexMessage<'a> {
    /// Create a new sysex message
    pub const fn new(kind: SysexKind, data: &'a [u8]) -> Self {
        Self { kind, data }
    }
    /// The introducing status
    pub const fn kind(&self) -> SysexKind {
        self.kind
    }
    /// The payload, excluding the length prefix
    pub const fn data(&self) -> &'a [u8] {
        self.data
    }
}

impl fmt::Display for SysexMessage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.kind {
            SysexKind::Start => "sysex",
            SysexKind::Escape => "sysex_escape",
        };
        write!(f, "{name} data={}", ByteTuple(self.data))
    }
}
