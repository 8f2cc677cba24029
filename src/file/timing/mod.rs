#![doc = r#"
Converting ticks to seconds

Delta-times are counted in ticks. The header's division field defines how many
ticks make a quarter note, and Set-Tempo meta events define how many
microseconds a quarter note lasts, defaulting to 500 000 (120 beats per minute)
until the first one is seen.

```text
seconds = ticks * micros_per_quarter_note / (ticks_per_quarter_note * 1 000 000)
```
"#]

mod accumulator;
pub use accumulator::*;

mod tempo_map;
pub use tempo_map::*;

use crate::reader::{HeaderError, ReaderErrorKind};

/// A representation of the `tpqn` timing for a MIDI file
///
/// Always positive, at most `0x7FFF`.
#[derive(Debug, Clone, PartialEq, Eq, Copy)]
pub struct TicksPerQuarterNote(u16);

impl TicksPerQuarterNote {
    /// Interpret the division field of a header chunk.
    ///
    /// # Errors
    /// - [`ReaderErrorKind::UnsupportedDivision`] if the top bit is set (SMPTE timing)
    /// - [`HeaderError::ZeroTicksPerBeat`] for a division of zero
    pub const fn from_division(division: u16) -> Result<Self, ReaderErrorKind> {
        if division & 0x8000 != 0 {
            return Err(ReaderErrorKind::UnsupportedDivision(division));
        }
        if division == 0 {
            return Err(ReaderErrorKind::Header(HeaderError::ZeroTicksPerBeat));
        }
        Ok(Self(division))
    }

    /// Returns the ticks per quarter note for the file.
    pub const fn ticks_per_quarter_note(&self) -> u16 {
        self.0
    }
}

/// Microseconds per quarter note
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tempo(u32);

impl Tempo {
    /// The tempo in force until the first Set-Tempo event, 120 bpm
    pub const DEFAULT: Self = Self(500_000);

    /// Create a tempo from microseconds per quarter note
    pub const fn new(micros_per_quarter_note: u32) -> Self {
        Self(micros_per_quarter_note)
    }

    /// Microseconds per quarter note
    pub const fn micros_per_quarter_note(&self) -> u32 {
        self.0
    }

    /// Beats per minute, for display
    pub fn bpm(&self) -> f64 {
        60_000_000. / f64::from(self.0)
    }
}

impl Default for Tempo {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[test]
fn division_field() {
    assert_eq!(
        TicksPerQuarterNote::from_division(480).map(|t| t.ticks_per_quarter_note()),
        Ok(480)
    );
    // -25 fps, 40 ticks per frame
    assert_eq!(
        TicksPerQuarterNote::from_division(0xE728),
        Err(ReaderErrorKind::UnsupportedDivision(0xE728))
    );
    assert_eq!(
        TicksPerQuarterNote::from_division(0),
        Err(ReaderErrorKind::Header(HeaderError::ZeroTicksPerBeat))
    );
}

#[test]
fn default_tempo_is_120_bpm() {
    assert_eq!(Tempo::default().micros_per_quarter_note(), 500_000);
    assert_eq!(Tempo::default().bpm(), 120.);
}
