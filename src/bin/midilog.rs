use std::path::PathBuf;

use clap::Parser;
use midilog::prelude::*;

fn main() {
    let result = main_result();
    std::process::exit(match result {
        Ok(()) => 0,
        Err(err) => {
            // use Display instead of Debug for user friendly error messages
            log::error!("{err}");
            1
        }
    });
}

fn main_result() -> Result<(), AppError> {
    // setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("midilog=info"))
        .init();

    let args = CliArgs::parse();
    if !args.file.exists() {
        return Err(AppError::ConfigError(format!(
            "MIDI file not found {:?}",
            args.file
        )));
    }

    let bytes = std::fs::read(&args.file)?;
    let options = LoadOptions::default().with_tempo_scope(args.tempo_scope);
    let file = MidiFile::parse_with(&bytes, &options)?;
    log::info!("Loaded {:?} ({} bytes)", args.file, bytes.len());

    if let Some(index) = args.track {
        if index >= file.tracks().len() {
            return Err(AppError::ConfigError(format!(
                "track {index} requested, file has {} tracks",
                file.tracks().len()
            )));
        }
    }

    println!("ticks per beat: {}", file.ticks_per_beat());
    println!("format: {:?}", file.format_type());
    println!("length: {:.3} seconds", file.length_seconds());

    let selected = file
        .tracks()
        .iter()
        .enumerate()
        .filter(|(i, _)| args.track.is_none_or(|wanted| wanted == *i));

    for (i, track) in selected {
        let name = track.name().unwrap_or_default();
        if args.summary {
            println!(
                "Track: {i} '{name}' {} events, {} ticks, {:.3} seconds",
                track.len(),
                track.length_ticks(),
                track.length_seconds()
            );
            continue;
        }
        println!("Track: {i} '{name}'");
        for row in track.rows() {
            println!("{row}");
        }
    }
    Ok(())
}

/// Dump the events of a Standard MIDI File with their absolute times
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct CliArgs {
    /// Path to the MIDI file.
    file: PathBuf,
    /// Whether tempo changes apply per track or across the whole file.
    #[arg(long, value_enum, default_value_t = TempoScope::PerTrack)]
    tempo_scope: TempoScope,
    /// Only dump the track with this index.
    #[arg(long)]
    track: Option<usize>,
    /// Print one summary line per track instead of every event.
    #[arg(long, default_value_t = false)]
    summary: bool,
}

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("configuration error: {0}")]
    ConfigError(String),
    #[error("parsing error: {0}")]
    ParsingError(#[from] ReaderError),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
