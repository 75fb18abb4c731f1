/// A completed note: armed by a Note-On, closed by its matching release.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteEvent {
    pub onset_seconds: f64,
    pub offset_seconds: f64,
    pub track: usize,
    pub pitch: u8,
    pub velocity: u8,
}

/// Per-track table pairing onsets with releases, one slot per pitch.
/// Channel is not part of the key; pairing is by (track, pitch) only.
pub struct NoteTracker {
    track: usize,
    slots: [Option<(f64, u8)>; 128],
}

impl NoteTracker {
    pub fn new(track: usize) -> Self {
        NoteTracker {
            track,
            slots: [None; 128],
        }
    }

    /// Arm a pitch. An already-armed slot is overwritten; the stranded
    /// onset is discarded without emission.
    pub fn arm(&mut self, pitch: u8, seconds: f64, velocity: u8) {
        self.slots[usize::from(pitch & 0x7F)] = Some((seconds, velocity));
    }

    /// Release a pitch, returning the completed note if it was armed.
    /// A release of an unarmed pitch is silently ignored.
    pub fn release(&mut self, pitch: u8, seconds: f64) -> Option<NoteEvent> {
        self.slots[usize::from(pitch & 0x7F)]
            .take()
            .map(|(onset_seconds, velocity)| NoteEvent {
                onset_seconds,
                offset_seconds: seconds,
                track: self.track,
                pitch: pitch & 0x7F,
                velocity,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arm_then_release_pairs_up() {
        let mut tracker = NoteTracker::new(3);
        tracker.arm(60, 0.25, 100);
        let note = tracker.release(60, 1.75).unwrap();
        assert_eq!(
            note,
            NoteEvent {
                onset_seconds: 0.25,
                offset_seconds: 1.75,
                track: 3,
                pitch: 60,
                velocity: 100,
            }
        );
    }

    #[test]
    fn release_clears_the_slot() {
        let mut tracker = NoteTracker::new(0);
        tracker.arm(60, 0.0, 64);
        assert!(tracker.release(60, 1.0).is_some());
        assert!(tracker.release(60, 2.0).is_none());
    }

    #[test]
    fn unarmed_release_is_ignored() {
        let mut tracker = NoteTracker::new(0);
        assert!(tracker.release(72, 1.0).is_none());
    }

    #[test]
    fn rearming_overwrites_the_onset() {
        let mut tracker = NoteTracker::new(0);
        tracker.arm(60, 0.0, 64);
        tracker.arm(60, 0.5, 80);
        let note = tracker.release(60, 1.0).unwrap();
        assert_eq!(note.onset_seconds, 0.5);
        assert_eq!(note.velocity, 80);
    }
}
