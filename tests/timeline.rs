mod common;

use common::{TrackBytes, smf};
use midilog::{file::builder::event::decode_track, prelude::*};
use pretty_assertions::assert_eq;

fn seconds_at(track: &Track<'_>, ticks: u64) -> f64 {
    track
        .events()
        .iter()
        .find(|event| event.accumulated_ticks() == ticks)
        .map(TimedEvent::seconds)
        .unwrap()
}

#[test]
fn default_tempo_one_beat_is_half_a_second() {
    let bytes = smf(
        0,
        480,
        &[TrackBytes::new()
            .note_on(0, 0, 60, 90)
            .note_off(480, 0, 60)
            .end(0)
            .chunk()],
    );
    let file = MidiFile::parse(&bytes).unwrap();
    let track = &file.tracks()[0];
    assert_eq!(seconds_at(track, 480), 0.5);
    assert_eq!(file.length_seconds(), 0.5);
}

#[test]
fn tempo_change_only_affects_later_ticks() {
    let bytes = smf(
        0,
        480,
        &[TrackBytes::new()
            .note_on(0, 0, 60, 90)
            .tempo(480, 1_000_000)
            .note_off(0, 0, 60)
            .note_on(480, 0, 62, 90)
            .end(0)
            .chunk()],
    );
    let file = MidiFile::parse(&bytes).unwrap();
    let track = &file.tracks()[0];

    let times: Vec<_> = track
        .events()
        .iter()
        .map(|e| (e.accumulated_ticks(), e.seconds()))
        .collect();
    assert_eq!(
        times,
        [(0, 0.), (480, 0.5), (480, 0.5), (960, 1.5), (960, 1.5)]
    );
}

#[test]
fn accumulated_ticks_are_prefix_sums() {
    let deltas = [0, 7, 0, 120, 1, 96_000, 3, 0];
    let mut track = TrackBytes::new();
    for (i, delta) in deltas.iter().enumerate() {
        track = if i % 3 == 0 {
            track.tempo(*delta, 300_000 + 100_000 * i as u32)
        } else {
            track.note_on(*delta, 1, 60 + i as u8, 100)
        };
    }
    let bytes = smf(0, 96, &[track.end(5).chunk()]);
    let file = MidiFile::parse(&bytes).unwrap();
    let events = file.tracks()[0].events();

    let mut sum = 0u64;
    for event in events {
        sum += u64::from(event.delta_ticks());
        assert_eq!(event.accumulated_ticks(), sum);
    }
    assert_eq!(events.first().map(TimedEvent::delta_ticks), Some(0));
    assert_eq!(file.tracks()[0].length_ticks(), 96_136);

    for pair in events.windows(2) {
        assert!(pair[0].accumulated_ticks() <= pair[1].accumulated_ticks());
        assert!(pair[0].seconds() <= pair[1].seconds());
    }
}

#[test]
fn tracks_keep_their_own_tempo_by_default() {
    let conductor = TrackBytes::new().tempo(0, 1_000_000).end(960).chunk();
    let melody = TrackBytes::new()
        .note_on(0, 0, 60, 90)
        .note_off(960, 0, 60)
        .end(0)
        .chunk();
    let bytes = smf(1, 480, &[conductor, melody]);

    let file = MidiFile::parse(&bytes).unwrap();
    assert_eq!(file.format_type(), FormatType::Simultaneous);
    assert_eq!(file.tracks()[0].length_seconds(), 2.);
    assert_eq!(file.tracks()[1].length_seconds(), 1.);
    assert_eq!(file.length_seconds(), 2.);
}

#[test]
fn shared_tempo_follows_the_conductor_track() {
    let conductor = TrackBytes::new()
        .tempo(0, 1_000_000)
        .tempo(480, 250_000)
        .end(0)
        .chunk();
    let melody = TrackBytes::new()
        .note_on(0, 0, 60, 90)
        .note_off(960, 0, 60)
        .end(0)
        .chunk();
    let bytes = smf(1, 480, &[conductor, melody]);

    let options = LoadOptions::default().with_tempo_scope(TempoScope::Shared);
    let file = MidiFile::parse_with(&bytes, &options).unwrap();
    // one beat at 1s, one at 0.25s
    assert_eq!(file.tracks()[1].length_seconds(), 1.25);
    assert_eq!(file.tracks()[0].length_seconds(), 1.);
    assert_eq!(file.length_seconds(), 1.25);
}

#[test]
fn shared_tempo_is_ignored_for_independent_tracks() {
    let first = TrackBytes::new().tempo(0, 1_000_000).end(480).chunk();
    let second = TrackBytes::new().end(480).chunk();
    let bytes = smf(2, 480, &[first, second]);

    let options = LoadOptions::default().with_tempo_scope(TempoScope::Shared);
    let file = MidiFile::parse_with(&bytes, &options).unwrap();
    assert_eq!(file.tracks()[0].length_seconds(), 1.);
    assert_eq!(file.tracks()[1].length_seconds(), 0.5);
}

#[test]
fn malformed_tempo_keeps_previous_tempo() {
    let bytes = smf(
        0,
        480,
        &[TrackBytes::new()
            .meta(0, 0x51, &[0x0F, 0x42])
            .end(480)
            .chunk()],
    );
    let file = MidiFile::parse(&bytes).unwrap();
    assert_eq!(file.length_seconds(), 0.5);
}

#[test]
fn tempo_map_orders_changes_by_tick() {
    let first_bytes = TrackBytes::new().tempo(100, 400_000).end(0).body();
    let second_bytes = TrackBytes::new()
        .tempo(50, 600_000)
        .tempo(50, 700_000)
        .end(0)
        .body();
    let first = decode_track(&first_bytes).unwrap();
    let second = decode_track(&second_bytes).unwrap();

    let map = TempoMap::from_tracks([first.as_slice(), second.as_slice()]);
    assert_eq!(
        map.changes(),
        [
            (50, Tempo::new(600_000)),
            (100, Tempo::new(400_000)),
            (100, Tempo::new(700_000)),
        ]
    );
}
