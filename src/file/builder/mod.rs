pub mod chunk;

pub mod event;

use alloc::vec::Vec;

use self::chunk::RawTrackChunk;
use super::{
    FormatType, LoadOptions, MidiFile, MidiFileHeader, TempoMap, TempoScope, TimelineAccumulator,
    Track,
};
use crate::{message::TrackEvent, reader::ReadResult};

/// A builder used to create a new [`MidiFile`].
///
/// Tracks are decoded as they are handed in; timing is only resolved in
/// [`MidiFileBuilder::build`] once every track is known, since a shared
/// tempo map may draw on any of them.
pub struct MidiFileBuilder<'a> {
    header: MidiFileHeader,
    tracks: Vec<Vec<TrackEvent<'a>>>,
}

impl<'a> MidiFileBuilder<'a> {
    /// Start building a file with the given header.
    pub fn new(header: MidiFileHeader) -> Self {
        Self {
            header,
            tracks: Vec::with_capacity(usize::from(header.num_tracks())),
        }
    }

    /// Decodes a track chunk and appends it.
    ///
    /// Errors are attributed to the track's index.
    pub fn handle_track(&mut self, chunk: &RawTrackChunk<'a>) -> ReadResult<()> {
        let index = self.tracks.len();
        let events = chunk.events().map_err(|err| err.in_track(index))?;
        log::trace!("track {index}: {} events", events.len());
        self.tracks.push(events);
        Ok(())
    }

    /// Resolves the timeline of every track and finishes the file.
    pub fn build(self, options: &LoadOptions) -> MidiFile<'a> {
        let shared = match (options.tempo_scope, self.header.format_type()) {
            (TempoScope::PerTrack, _) => None,
            (TempoScope::Shared, FormatType::SequentiallyIndependent) => {
                log::warn!("format 2 tracks are independent, using per-track tempo");
                None
            }
            (TempoScope::Shared, _) => Some(TempoMap::from_tracks(
                self.tracks.iter().map(Vec::as_slice),
            )),
        };

        let timing = self.header.timing();
        let tracks = self
            .tracks
            .into_iter()
            .map(|events| {
                Track::new(TimelineAccumulator::new(timing).accumulate(events, shared.as_ref()))
            })
            .collect();

        MidiFile {
            header: self.header,
            tracks,
        }
    }
}
