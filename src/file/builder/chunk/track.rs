use alloc::vec::Vec;
use core::ops::Range;

use crate::{file::builder::event::EventDecoder, message::TrackEvent, reader::ReadResult};

/// Identifier of a track chunk
pub const TRACK_ID: &[u8; 4] = b"MTrk";

/// The body of a track chunk, borrowed from the file buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTrackChunk<'a> {
    data: &'a [u8],
    range: Range<usize>,
}

impl<'a> RawTrackChunk<'a> {
    pub(crate) const fn new(data: &'a [u8], start: usize) -> Self {
        Self {
            data,
            range: start..start + data.len(),
        }
    }

    /// The event bytes of the track
    pub const fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Where the event bytes sit in the file
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Decode the events of the track.
    pub fn events(&self) -> ReadResult<Vec<TrackEvent<'a>>> {
        EventDecoder::with_base(self.data, self.range.start).decode()
    }
}
