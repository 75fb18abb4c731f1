use std::io::Read;

use crate::midi::error::Result;
use crate::midi::loader::decode_header;
use crate::midi::notes::NoteEvent;
use crate::midi::reader::ByteReader;
use crate::midi::track::{decode_track, TrackStats};

#[derive(Debug, Default, Clone, Copy)]
pub struct DumpOptions {
    /// Tempo override in BPM; when set, tempo meta events are ignored.
    pub bpm_override: Option<f64>,
    /// Only this zero-based track emits. Parsing is unaffected.
    pub track_filter: Option<usize>,
}

/// Whole-file totals for the verbose summary.
#[derive(Debug, Default, Clone, Copy)]
pub struct DumpStats {
    pub tracks: usize,
    pub events: u64,
    pub notes: u64,
    pub duration_seconds: f64,
}

impl DumpStats {
    fn absorb(&mut self, track: TrackStats) {
        self.tracks += 1;
        self.events += track.events;
        self.notes += track.notes;
        self.duration_seconds = self.duration_seconds.max(track.duration_seconds);
    }
}

/// Decode a whole SMF byte source, sending every completed note to `sink`
/// in release order, tracks strictly in file order.
pub fn dump_notes<R: Read>(
    source: R,
    opts: &DumpOptions,
    sink: &mut impl FnMut(NoteEvent),
) -> Result<DumpStats> {
    let mut reader = ByteReader::new(source);
    let (num_tracks, mut timebase) = decode_header(&mut reader, opts.bpm_override)?;

    let mut stats = DumpStats::default();
    for track in 0..usize::from(num_tracks) {
        let track_stats = decode_track(&mut reader, track, &mut timebase, &mut |note| {
            match opts.track_filter {
                Some(wanted) if wanted != note.track => {}
                _ => sink(note),
            }
        })?;
        stats.absorb(track_stats);
    }

    Ok(stats)
}
