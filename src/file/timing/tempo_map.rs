use alloc::vec::Vec;

use super::{Tempo, TimelineAccumulator};
use crate::message::TrackEvent;

#[doc = r#"
Tempo changes collected from every track of a file.

Used when tempo is shared across tracks, as in a format 1 file whose
first track acts as the conductor. Changes are ordered by tick; changes on
the same tick keep the order of their tracks.
"#]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TempoMap {
    changes: Vec<(u64, Tempo)>,
}

impl TempoMap {
    /// Gather the Set-Tempo events of every track.
    pub fn from_tracks<'t, 'a: 't, I>(tracks: I) -> Self
    where
        I: IntoIterator<Item = &'t [TrackEvent<'a>]>,
    {
        let mut changes = Vec::new();
        for events in tracks {
            let mut ticks = 0u64;
            for event in events {
                ticks += u64::from(event.delta_ticks());
                if let Some(tempo) = event.message().tempo() {
                    changes.push((ticks, Tempo::new(tempo)));
                }
            }
        }
        changes.sort_by_key(|(tick, _)| *tick);
        Self { changes }
    }

    /// The tempo changes as `(tick, tempo)` pairs
    pub fn changes(&self) -> &[(u64, Tempo)] {
        &self.changes
    }

    /// True if no track sets a tempo
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// A cursor that feeds these changes into an accumulator.
    pub(crate) fn cursor(&self) -> TempoCursor<'_> {
        TempoCursor {
            changes: &self.changes,
        }
    }
}

pub(crate) struct TempoCursor<'m> {
    changes: &'m [(u64, Tempo)],
}

impl TempoCursor<'_> {
    /// Apply every pending change at or before `tick`.
    pub(crate) fn apply_until(&mut self, tick: u64, acc: &mut TimelineAccumulator) {
        while let Some(((at, tempo), rest)) = self.changes.split_first() {
            if *at > tick {
                break;
            }
            acc.set_tempo(*at, *tempo);
            self.changes = rest;
        }
    }
}
