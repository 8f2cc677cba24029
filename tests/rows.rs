mod common;

use common::{TrackBytes, smf};
use midilog::prelude::*;
use pretty_assertions::assert_eq;

fn two_track_file() -> Vec<u8> {
    let conductor = TrackBytes::new()
        .name("Score")
        .meta(0, 0x58, &[3, 2, 24, 8])
        .tempo(0, 500_000)
        .end(0)
        .chunk();
    let voice = TrackBytes::new()
        .name("Voice")
        .raw(0, &[0xC0, 19])
        .note_on(0, 0, 67, 90)
        .raw(384, &[67, 0])
        .raw(0, &[0xB0, 7, 100])
        .raw(0, &[0xF0, 3, 0x7E, 0x09, 0xF7])
        .end(0)
        .chunk();
    smf(1, 384, &[conductor, voice])
}

#[test]
fn formats_rows_like_an_event_dump() {
    let bytes = two_track_file();
    let file = MidiFile::parse(&bytes).unwrap();
    assert_eq!(file.ticks_per_beat(), 384);
    assert_eq!(file.header().num_tracks(), 2);

    let conductor: Vec<String> = file.tracks()[0].rows().map(|row| row.to_string()).collect();
    assert_eq!(
        conductor,
        [
            "00000 =  0.00 : track_name name='Score'",
            "00000 =  0.00 : time_signature numerator=3 denominator=4 clocks_per_click=24 notated_32nd_notes_per_beat=8",
            "00000 =  0.00 : set_tempo tempo=500000",
            "00000 =  0.00 : end_of_track",
        ]
    );

    let voice: Vec<String> = file.tracks()[1].rows().map(|row| row.to_string()).collect();
    assert_eq!(
        voice,
        [
            "00000 =  0.00 : track_name name='Voice'",
            "00000 =  0.00 : program_change channel=0 program=19",
            "00000 =  0.00 : note_on channel=0 note=67 velocity=90",
            "00384 =  0.50 : note_on channel=0 note=67 velocity=0",
            "00384 =  0.50 : control_change channel=0 control=7 value=100",
            "00384 =  0.50 : sysex data=(126, 9, 247)",
            "00384 =  0.50 : end_of_track",
        ]
    );
}

#[test]
fn rows_are_restartable() {
    let bytes = two_track_file();
    let file = MidiFile::parse(&bytes).unwrap();
    let track = &file.tracks()[1];

    let rows = track.rows();
    assert_eq!(rows.len(), track.len());
    let first: Vec<_> = rows.clone().map(|row| row.ticks()).collect();
    let second: Vec<_> = rows.map(|row| row.ticks()).collect();
    assert_eq!(first, second);
    assert_eq!(track.rows().count(), 7);
}

#[test]
fn row_parts() {
    let bytes = two_track_file();
    let file = MidiFile::parse(&bytes).unwrap();
    let row = file.tracks()[1].rows().nth(3).unwrap();

    assert_eq!(row.ticks(), 384);
    assert_eq!(row.seconds(), 0.5);
    assert_eq!(row.description().to_string(), "note_on channel=0 note=67 velocity=0");
    assert!(matches!(
        row.message(),
        TrackMessage::ChannelVoice(msg) if msg.status() == ChannelStatus::NoteOn
    ));
}

#[test]
fn track_names() {
    let bytes = two_track_file();
    let file = MidiFile::parse(&bytes).unwrap();
    let names: Vec<_> = file
        .tracks()
        .iter()
        .map(|track| track.name().unwrap_or_default().into_owned())
        .collect();
    assert_eq!(names, ["Score", "Voice"]);
}
