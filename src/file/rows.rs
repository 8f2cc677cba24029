use core::{fmt, iter::FusedIterator, slice};

use super::TimedEvent;
use crate::message::TrackMessage;

#[doc = r#"
One line of a track dump

Displays as the zero-padded tick count, the seconds with two decimals and
the event description:

```text
00000 =  0.00 : set_tempo tempo=500000
00480 =  0.50 : note_on channel=0 note=60 velocity=90
```
"#]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventRow<'t, 'a> {
    ticks: u64,
    seconds: f64,
    message: &'t TrackMessage<'a>,
}

impl<'t, 'a> EventRow<'t, 'a> {
    /// Ticks since the start of the track
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }
    /// Seconds since the start of the track
    pub const fn seconds(&self) -> f64 {
        self.seconds
    }
    /// The event being described
    pub const fn message(&self) -> &'t TrackMessage<'a> {
        self.message
    }
    /// The human readable description of the event
    pub fn description(&self) -> impl fmt::Display + 't {
        self.message
    }
}

impl fmt::Display for EventRow<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:05} =  {:.2} : {}",
            self.ticks, self.seconds, self.message
        )
    }
}

/// An iterator over the rows of a track, returned from [`Track::rows`](super::Track::rows)
#[derive(Debug, Clone)]
pub struct EventRows<'t, 'a> {
    events: slice::Iter<'t, TimedEvent<'a>>,
}

impl<'t, 'a> EventRows<'t, 'a> {
    pub(super) fn new(events: &'t [TimedEvent<'a>]) -> Self {
        Self {
            events: events.iter(),
        }
    }
}

impl<'t, 'a> Iterator for EventRows<'t, 'a> {
    type Item = EventRow<'t, 'a>;
    fn next(&mut self) -> Option<Self::Item> {
        let event = self.events.next()?;
        Some(EventRow {
            ticks: event.accumulated_ticks(),
            seconds: event.seconds(),
            message: event.message(),
        })
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.events.size_hint()
    }
}

impl ExactSizeIterator for EventRows<'_, '_> {}
impl FusedIterator for EventRows<'_, '_> {}
