use std::io::Read;

use crate::midi::error::{MidiError, Result};
use crate::midi::notes::{NoteEvent, NoteTracker};
use crate::midi::reader::ByteReader;
use crate::midi::timebase::TimeBase;

/// Per-track counters, reported by the verbose summary.
#[derive(Debug, Default, Clone, Copy)]
pub struct TrackStats {
    pub events: u64,
    pub notes: u64,
    pub duration_seconds: f64,
}

/// Drain one MTrk chunk, pairing Note-Ons with their releases and sending
/// every completed note to `sink`. Tempo meta events mutate the shared
/// time base as they are encountered.
pub fn decode_track<R: Read>(
    reader: &mut ByteReader<R>,
    track: usize,
    timebase: &mut TimeBase,
    sink: &mut impl FnMut(NoteEvent),
) -> Result<TrackStats> {
    reader.expect_magic("MTrk")?;
    // The declared track size is not trusted; End-of-Track terminates.
    reader.skip(4)?;

    let mut notes = NoteTracker::new(track);
    let mut stats = TrackStats::default();
    let mut accumulated_seconds = 0.0f64;
    let mut running_status: Option<u8> = None;

    loop {
        let delta = reader.read_varlen()?;
        accumulated_seconds += timebase.seconds_for(delta);
        stats.events += 1;

        let mut p1 = reader.read_u8()?;

        if (p1 & 0x80) != 0 {
            match p1 {
                0xFF => {
                    // Meta event; never participates in running status.
                    let meta_type = reader.read_u8()?;
                    let len = reader.read_varlen()?;
                    match meta_type {
                        // End of track; any payload is ignored
                        0x2F => break,
                        0x51 => {
                            // Tempo is read as exactly 3 bytes whatever
                            // the declared length says
                            let micros = reader.read_fixed(3)?;
                            timebase.set_tempo(micros);
                        }
                        0x54 => {
                            reader.skip(u64::from(len))?;
                            return Err(MidiError::UnsupportedSmpteOffset);
                        }
                        _ => reader.skip(u64::from(len))?,
                    }
                    continue;
                }
                0xF0 | 0xF7 => {
                    // Sysex event
                    let len = reader.read_varlen()?;
                    reader.skip(u64::from(len))?;
                    continue;
                }
                status => {
                    // New channel-voice status; its first data byte follows.
                    running_status = Some(status);
                    p1 = reader.read_u8()?;
                }
            }
        }

        // Channel-voice event under the current status. A data byte seen
        // before any status byte runs under status 0, which consumes two
        // data bytes and emits nothing.
        let status = running_status.unwrap_or(0);
        let kind = (status >> 4) & 0xF;

        // Program change and channel pressure carry one data byte,
        // everything else two.
        let p2 = if kind == 0xC || kind == 0xD {
            0
        } else {
            reader.read_u8()?
        };

        match kind {
            0x9 if p2 != 0 => notes.arm(p1, accumulated_seconds, p2),
            0x8 | 0x9 => {
                if let Some(note) = notes.release(p1, accumulated_seconds) {
                    stats.notes += 1;
                    sink(note);
                }
            }
            _ => {}
        }
    }

    stats.duration_seconds = accumulated_seconds;
    Ok(stats)
}
