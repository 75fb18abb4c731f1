/// How the MThd division word expresses time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DivisionMode {
    /// Ticks per quarter note; tempo meta events set quarters-per-second.
    Metrical,
    /// Ticks per SMPTE frame; the frame rate is fixed at header time.
    Smpte,
}

/// Conversion state from MIDI ticks to seconds. Shared mutably with every
/// track decoder so tempo changes apply from the moment they occur.
#[derive(Debug, Clone)]
pub struct TimeBase {
    ticks_per_unit: f64,
    units_per_second: f64,
    mode: DivisionMode,
    tempo_override: Option<f64>,
}

const DEFAULT_BPM: f64 = 120.0;

impl TimeBase {
    /// Decode the MThd division word. `bpm_override` is the user-supplied
    /// tempo; when present, tempo meta events are ignored for timing.
    pub fn from_division(division: u16, bpm_override: Option<f64>) -> Self {
        let override_qps = bpm_override.map(|bpm| bpm.abs() / 60.0);

        if (division & 0x8000) != 0 {
            // SMPTE: bits 14..8 hold the frame rate, bits 7..0 ticks per frame.
            let fps_byte = (division & 0x7F00) >> 8;
            let fps = if fps_byte == 29 { 29.97 } else { f64::from(fps_byte) };
            TimeBase {
                ticks_per_unit: f64::from(division & 0xFF),
                units_per_second: fps,
                mode: DivisionMode::Smpte,
                tempo_override: override_qps,
            }
        } else {
            TimeBase {
                ticks_per_unit: f64::from(division & 0x7FFF),
                units_per_second: override_qps.unwrap_or(DEFAULT_BPM / 60.0),
                mode: DivisionMode::Metrical,
                tempo_override: override_qps,
            }
        }
    }

    /// Seconds covered by `delta` ticks at the current tempo.
    pub fn seconds_for(&self, delta: u32) -> f64 {
        f64::from(delta) / (self.units_per_second * self.ticks_per_unit)
    }

    /// Apply a tempo meta event (microseconds per quarter note).
    /// A user override wins: the bytes were consumed but timing stands.
    pub fn set_tempo(&mut self, micros_per_quarter: u32) {
        if self.tempo_override.is_none() {
            self.units_per_second = 1.0e6 / f64::from(micros_per_quarter);
        }
    }

    pub fn mode(&self) -> DivisionMode {
        self.mode
    }
}
