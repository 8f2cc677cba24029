use alloc::vec::Vec;

use super::{Tempo, TempoMap, TicksPerQuarterNote};
use crate::{
    file::TimedEvent,
    message::{MetaType, TrackEvent},
};

#[doc = r#"
Folds delta-times into accumulated ticks and elapsed seconds.

The accumulator remembers the tick and time of the last tempo change.
Converting a tick only ever looks at the span since that point, so any
sequence of tempo changes is handled exactly:

```text
seconds(t) = seconds(t0) + (t - t0) * tempo / (ticks_per_quarter_note * 1 000 000)
```

A tempo change only affects ticks after it. An event on the same tick as the
change gets the same time either way.
"#]
#[derive(Debug, Clone)]
pub struct TimelineAccumulator {
    ticks_per_quarter_note: u16,
    tempo: Tempo,
    ticks: u64,
    anchor_ticks: u64,
    anchor_seconds: f64,
}

impl TimelineAccumulator {
    /// Start at tick zero with the default tempo
    pub const fn new(timing: TicksPerQuarterNote) -> Self {
        Self {
            ticks_per_quarter_note: timing.ticks_per_quarter_note(),
            tempo: Tempo::DEFAULT,
            ticks: 0,
            anchor_ticks: 0,
            anchor_seconds: 0.,
        }
    }

    /// Ticks accumulated so far
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The tempo currently in force
    pub const fn tempo(&self) -> Tempo {
        self.tempo
    }

    /// Seconds elapsed at `tick` under the current tempo.
    ///
    /// `tick` must not precede the last tempo change.
    pub fn seconds_at(&self, tick: u64) -> f64 {
        let span = tick.saturating_sub(self.anchor_ticks);
        let micros = u128::from(span) * u128::from(self.tempo.micros_per_quarter_note());
        self.anchor_seconds + micros as f64 / (f64::from(self.ticks_per_quarter_note) * 1_000_000.)
    }

    /// Move forward by `delta_ticks`, returning the new tick and its time.
    pub fn advance(&mut self, delta_ticks: u32) -> (u64, f64) {
        self.ticks += u64::from(delta_ticks);
        (self.ticks, self.seconds_at(self.ticks))
    }

    /// Switch to `tempo` from `tick` onwards.
    pub fn set_tempo(&mut self, tick: u64, tempo: Tempo) {
        let tick = tick.max(self.anchor_ticks);
        self.anchor_seconds = self.seconds_at(tick);
        self.anchor_ticks = tick;
        self.tempo = tempo;
    }

    /// Annotate a track's events with their accumulated ticks and seconds.
    ///
    /// With no `shared` map the track's own Set-Tempo events drive the
    /// conversion. Otherwise only the map is consulted.
    pub fn accumulate<'a>(
        mut self,
        events: Vec<TrackEvent<'a>>,
        shared: Option<&TempoMap>,
    ) -> Vec<TimedEvent<'a>> {
        let mut cursor = shared.map(TempoMap::cursor);
        let mut timed = Vec::with_capacity(events.len());

        for event in events {
            let (ticks, _) = self.advance(event.delta_ticks());
            if let Some(cursor) = cursor.as_mut() {
                cursor.apply_until(ticks, &mut self);
            }
            let seconds = self.seconds_at(ticks);

            let own_tempo = event
                .message()
                .meta()
                .filter(|meta| cursor.is_none() && meta.kind() == MetaType::SetTempo);
            if let Some(meta) = own_tempo {
                match meta.tempo() {
                    Some(tempo) => self.set_tempo(ticks, Tempo::new(tempo)),
                    None => log::warn!(
                        "ignoring Set-Tempo event with a {}-byte payload at tick {ticks}",
                        meta.data().len()
                    ),
                }
            }
            timed.push(TimedEvent::new(event, ticks, seconds));
        }
        timed
    }
}

#[cfg(test)]
fn accumulator(tpqn: u16) -> TimelineAccumulator {
    TimelineAccumulator::new(TicksPerQuarterNote::from_division(tpqn).unwrap())
}

#[test]
fn one_beat_at_default_tempo() {
    let mut acc = accumulator(480);
    assert_eq!(acc.advance(0), (0, 0.));
    assert_eq!(acc.advance(480), (480, 0.5));
}

#[test]
fn tempo_change_applies_after_its_tick() {
    let mut acc = accumulator(480);
    let (tick, seconds) = acc.advance(480);
    acc.set_tempo(tick, Tempo::new(1_000_000));
    // the change itself does not move time
    assert_eq!(acc.seconds_at(tick), seconds);
    assert_eq!(acc.advance(480), (960, 1.5));
}

#[test]
fn several_tempo_changes() {
    let mut acc = accumulator(96);
    acc.set_tempo(0, Tempo::new(250_000));
    assert_eq!(acc.advance(96), (96, 0.25));
    acc.set_tempo(96, Tempo::new(2_000_000));
    assert_eq!(acc.advance(48), (144, 1.25));
    acc.set_tempo(144, Tempo::new(500_000));
    assert_eq!(acc.advance(192), (336, 2.25));
}
