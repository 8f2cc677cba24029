use alloc::{borrow::Cow, vec::Vec};

use super::EventRows;
use crate::message::{MetaType, TrackEvent, TrackMessage};

/// An event positioned on its track's timeline
#[derive(Debug, Clone, PartialEq)]
pub struct TimedEvent<'a> {
    event: TrackEvent<'a>,
    accumulated_ticks: u64,
    seconds: f64,
}

impl<'a> TimedEvent<'a> {
    pub(crate) const fn new(event: TrackEvent<'a>, accumulated_ticks: u64, seconds: f64) -> Self {
        Self {
            event,
            accumulated_ticks,
            seconds,
        }
    }
    /// Ticks since the previous event in the track
    pub const fn delta_ticks(&self) -> u32 {
        self.event.delta_ticks()
    }
    /// Ticks since the start of the track
    pub const fn accumulated_ticks(&self) -> u64 {
        self.accumulated_ticks
    }
    /// Seconds since the start of the track
    pub const fn seconds(&self) -> f64 {
        self.seconds
    }
    /// The undecorated event
    pub const fn event(&self) -> &TrackEvent<'a> {
        &self.event
    }
    /// The message carried by the event
    pub const fn message(&self) -> &TrackMessage<'a> {
        self.event.message()
    }
}

#[doc = r#"
A decoded track

Events are in file order and always end with End-of-Track.
"#]
#[derive(Debug, Clone, PartialEq)]
pub struct Track<'a> {
    events: Vec<TimedEvent<'a>>,
}

impl<'a> Track<'a> {
    pub(crate) const fn new(events: Vec<TimedEvent<'a>>) -> Self {
        Self { events }
    }

    /// The events of the track
    pub fn events(&self) -> &[TimedEvent<'a>] {
        &self.events
    }

    /// Number of events, End-of-Track included
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True if the track holds no events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Accumulated ticks of the last event
    pub fn length_ticks(&self) -> u64 {
        self.events.last().map_or(0, TimedEvent::accumulated_ticks)
    }

    /// Seconds of the last event
    pub fn length_seconds(&self) -> f64 {
        self.events.last().map_or(0., TimedEvent::seconds)
    }

    /// Text of the first Track-Name meta event
    pub fn name(&self) -> Option<Cow<'a, str>> {
        self.events
            .iter()
            .filter_map(|event| event.message().meta())
            .find(|meta| meta.kind() == MetaType::TrackName)
            .and_then(|meta| meta.text())
    }

    /// Formatted `(ticks, seconds, description)` rows, one per event.
    ///
    /// Every call starts from the first event.
    pub fn rows(&self) -> EventRows<'_, 'a> {
        EventRows::new(&self.events)
    }
}
