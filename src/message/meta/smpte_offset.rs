#![doc = r#"
SMPTE Offset meta event

Specifies the SMPTE time at which a track is meant to start. The offset is
informational here: timing in this crate is always derived from ticks per
beat and tempo, so the offset only shows up in event descriptions.
"#]

use thiserror::Error;

/// The possible frame rates of an SMPTE offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmpteFps {
    /// 24 frames per second - Standard film rate
    TwentyFour,
    /// 25 frames per second - PAL/SECAM television standard
    TwentyFive,
    /// 29.97 frames per second (30000/1001) - NTSC color television drop-frame rate
    TwentyNine,
    /// 30 frames per second - NTSC black & white, some digital formats
    Thirty,
}

impl SmpteFps {
    /// Get the actual frame rate as a floating-point value.
    pub const fn as_f64(&self) -> f64 {
        match self {
            Self::TwentyFour => 24.,
            Self::TwentyFive => 25.,
            Self::TwentyNine => DROP_FRAME,
            Self::Thirty => 30.,
        }
    }
}

/// 29.97002997... fps
const DROP_FRAME: f64 = 30_000. / 1001.;

/// Reasons an SMPTE offset payload is rejected
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SmpteError {
    /// The payload is not 5 bytes long
    #[error("Invalid length for SMPTE offset: {0}")]
    Length(usize),
    /// Hours must be 0-23
    #[error("Invalid hour offset: {0}")]
    HourOffset(u8),
    /// Minutes must be 0-59
    #[error("Invalid minute offset: {0}")]
    MinuteOffset(u8),
    /// Seconds must be 0-59
    #[error("Invalid second offset: {0}")]
    SecondOffset(u8),
    /// Fractional frames must be 0-99
    #[error("Invalid subframe: {0}")]
    Subframe(u8),
}

/// A track's starting position in SMPTE time code.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SmpteOffset {
    /// The frame rate for this offset.
    pub fps: SmpteFps,
    /// Hour component of the time code (0-23).
    pub hour: u8,
    /// Minute component of the time code (0-59).
    pub minute: u8,
    /// Second component of the time code (0-59).
    pub second: u8,
    /// Frame number within the current second.
    pub frame: u8,
    /// Hundredths of a frame (0-99).
    pub subframe: u8,
}

impl SmpteOffset {
    /// Convert this SMPTE offset to seconds.
    pub const fn as_secs_f64(&self) -> f64 {
        (self.hour as u32 * 3600 + self.minute as u32 * 60 + self.second as u32) as f64
            + (self.frame as f64 + self.subframe as f64 / 100.) / self.fps.as_f64()
    }

    /// Parse an SMPTE offset from the 5-byte meta event payload.
    ///
    /// - Byte 0: `0rrhhhhh` where `rr` is frame rate type, `hhhhh` is hours
    /// - Byte 1: Minutes (0-59)
    /// - Byte 2: Seconds (0-59)
    /// - Byte 3: Frames (depends on frame rate)
    /// - Byte 4: Fractional frames in 100ths (0-99)
    pub const fn parse(data: &[u8]) -> Result<Self, SmpteError> {
        let &[hour_byte, minute, second, frame, subframe] = data else {
            return Err(SmpteError::Length(data.len()));
        };

        // 0 rr hhhhh, the top bit is ignored
        let fps = match (hour_byte >> 5) & 0b11 {
            0 => SmpteFps::TwentyFour,
            1 => SmpteFps::TwentyFive,
            2 => SmpteFps::TwentyNine,
            _ => SmpteFps::Thirty,
        };
        let hour = hour_byte & 0b0001_1111;
        if hour > 23 {
            return Err(SmpteError::HourOffset(hour));
        }
        if minute > 59 {
            return Err(SmpteError::MinuteOffset(minute));
        }
        if second > 59 {
            return Err(SmpteError::SecondOffset(second));
        }
        if subframe > 99 {
            return Err(SmpteError::Subframe(subframe));
        }
        Ok(Self {
            fps,
            hour,
            minute,
            second,
            frame,
            subframe,
        })
    }
}

#[test]
fn parse_smpte_offset() {
    use pretty_assertions::assert_eq;
    // this are the bytes after 00 FF 54 05
    let bytes = [0x41, 0x17, 0x2D, 0x0C, 0x22];
    let offset = SmpteOffset::parse(&bytes).unwrap();

    assert_eq!(offset.fps, SmpteFps::TwentyNine);
    assert_eq!(offset.hour, 1);
    assert_eq!(offset.minute, 23);
    assert_eq!(offset.second, 45);
    assert_eq!(offset.frame, 12);
    assert_eq!(offset.subframe, 34);
}

#[test]
fn parse_invalid_smpte_offset() {
    use pretty_assertions::assert_eq;
    let bytes = [0x7F, 0x17, 0x2D, 0x0C, 0x22];
    assert_eq!(SmpteOffset::parse(&bytes), Err(SmpteError::HourOffset(31)));

    let bytes = [0x41, 0x50, 0x2D, 0x0C, 0x22];
    assert_eq!(SmpteOffset::parse(&bytes), Err(SmpteError::MinuteOffset(80)));

    assert_eq!(SmpteOffset::parse(&[0; 3]), Err(SmpteError::Length(3)));
}

#[test]
fn offset_in_seconds() {
    // 25 fps, 00:01:02, frame 5, no subframes
    let offset = SmpteOffset::parse(&[0x20, 1, 2, 5, 0]).unwrap();
    assert_eq!(offset.fps, SmpteFps::TwentyFive);
    assert_eq!(offset.as_secs_f64(), 62.2);
}
