use thiserror::Error;

#[doc = r#"
A set of errors that can occur while decoding a MIDI file

Decoding is all-or-nothing: the first error aborts the whole file.
"#]
#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("Reading at Position {position}{}, {kind}", TrackSuffix(.track))]
pub struct ReaderError {
    position: usize,
    track: Option<usize>,
    pub(crate) kind: ReaderErrorKind,
}

/// A kind of error that a reader can produce
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ReaderErrorKind {
    /// A variable-length quantity ran past four bytes or past the end of the data
    #[error("Malformed variable-length quantity")]
    MalformedEncoding,
    /// A declared length exceeds the bytes available, or the data ended mid-event
    #[error("File is truncated")]
    TruncatedFile,
    /// The division field uses SMPTE frames instead of ticks per beat
    #[error("Unsupported SMPTE time division {0:#06X}")]
    UnsupportedDivision(u16),
    /// A status byte outside of the recognized ranges
    #[error("Unknown event type {0:#04X}")]
    UnknownEventType(u8),
    /// The track data ended without an End-of-Track meta event
    #[error("Track is missing its End-of-Track event")]
    MissingEndOfTrack,
    /// The header chunk is invalid
    #[error("Header {0}")]
    Header(#[from] HeaderError),
}

/// Problems with the `MThd` chunk
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum HeaderError {
    /// The file does not start with `MThd`
    #[error("has invalid identifier {0:?}")]
    Magic([u8; 4]),
    /// The header body must be exactly 6 bytes
    #[error("declares a length of {0}, expected 6")]
    Length(u32),
    /// Only formats 0, 1 and 2 exist
    #[error("declares unknown format {0}")]
    Format(u16),
    /// A division of zero ticks per beat cannot be converted to time
    #[error("declares zero ticks per beat")]
    ZeroTicksPerBeat,
}

struct TrackSuffix<'a>(&'a Option<usize>);

impl core::fmt::Display for TrackSuffix<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.0 {
            Some(track) => write!(f, " (track {track})"),
            None => Ok(()),
        }
    }
}

impl ReaderError {
    /// Create a reader error from a position and kind
    pub const fn new(position: usize, kind: ReaderErrorKind) -> Self {
        Self {
            position,
            track: None,
            kind,
        }
    }

    /// Attribute this error to the track at `index`.
    pub const fn in_track(mut self, index: usize) -> Self {
        self.track = Some(index);
        self
    }

    /// True if the data ended before a declared length or mid-event
    pub const fn is_truncated(&self) -> bool {
        matches!(self.kind, ReaderErrorKind::TruncatedFile)
    }
    /// Returns the error kind of the reader.
    pub fn error_kind(&self) -> &ReaderErrorKind {
        &self.kind
    }
    /// Returns the absolute byte offset where the error occurred.
    pub fn position(&self) -> usize {
        self.position
    }
    /// Returns the index of the track being decoded, if any.
    pub fn track(&self) -> Option<usize> {
        self.track
    }
}

/// The Read Result type (see [`ReaderError`])
pub type ReadResult<T> = Result<T, ReaderError>;

#[test]
fn display_mentions_track() {
    use alloc::string::ToString;
    use pretty_assertions::assert_eq;

    let err = ReaderError::new(42, ReaderErrorKind::UnknownEventType(0xF4)).in_track(1);
    assert_eq!(
        err.to_string(),
        "Reading at Position 42 (track 1), Unknown event type 0xF4"
    );

    let err = ReaderError::new(0, HeaderError::Length(7).into());
    assert_eq!(
        err.to_string(),
        "Reading at Position 0, Header declares a length of 7, expected 6"
    );
}
