//! Melody input for the render plan.

use serde::{Deserialize, Serialize};

/// One note of a melody track, times in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Note {
    /// MIDI pitch number.
    pub pitch: u8,
    pub start: f64,
    pub end: f64,
}

impl Note {
    pub fn new(pitch: u8, start: f64, end: f64) -> Self {
        Self { pitch, start, end }
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Notes of one instrument, in playing order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Track {
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl Track {
    pub fn new(notes: Vec<Note>) -> Self {
        Self { notes }
    }
}

/// Pitch of the first note of the first track; every shift is relative to it.
pub fn reference_pitch(tracks: &[Track]) -> Option<u8> {
    tracks.first()?.notes.first().map(|n| n.pitch)
}
