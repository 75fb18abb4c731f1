mod midi;

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use thousands::Separable;

use crate::midi::dump::{dump_notes, DumpOptions};
use crate::midi::error::Result;
use crate::midi::utils::format_hms;

/// Print every note of a Standard MIDI File as a tab-separated table:
/// onset time, release time, track, pitch, velocity.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// Tempo override in BPM; tempo events in the file are ignored
    #[arg(short = 't', long = "tempo", allow_negative_numbers = true)]
    tempo: Option<f64>,

    /// Only print notes from this zero-based track
    #[arg(short = 'n', long = "track")]
    track: Option<usize>,

    /// Print a parse summary to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Input MIDI file
    file: PathBuf,
}

fn run(cli: &Cli) -> Result<()> {
    let file = File::open(&cli.file)?;
    let reader = BufReader::new(file);

    let opts = DumpOptions {
        bpm_override: cli.tempo,
        track_filter: cli.track,
    };

    let stdout = io::stdout().lock();
    let mut out = BufWriter::new(stdout);
    let mut write_err = None;

    let start = Instant::now();
    let stats = dump_notes(reader, &opts, &mut |note| {
        let line = writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}",
            format_hms(note.onset_seconds),
            format_hms(note.offset_seconds),
            note.track,
            note.pitch,
            note.velocity
        );
        if let Err(err) = line {
            write_err.get_or_insert(err);
        }
    })?;
    if let Some(err) = write_err {
        return Err(err.into());
    }
    out.flush()?;

    if cli.verbose {
        eprintln!(
            "Parsed MIDI Summary:\n\
             - Tracks: {}\n\
             - Events: {}\n\
             - Note Count: {}\n\
             - Total Duration: {}\n\
             - Parse Time: {:.2?}",
            stats.tracks,
            stats.events.separate_with_commas(),
            stats.notes.separate_with_commas(),
            format_hms(stats.duration_seconds),
            start.elapsed()
        );
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
