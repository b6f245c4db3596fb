//! Render plan construction.
//!
//! # Responsibilities
//! - Keep melody notes above the pitch threshold, in track order
//! - Derive pitch shift, audio stretch and video speed for each kept note
//! - Prepend the unmodified lead clip
//!
//! # Design Decisions
//! - Shifts are `reference - pitch` semitones, reference being the first note
//! - Audio stretch is `block_length / note duration`; video speed is
//!   `clip duration / note duration`, so every segment lasts as long as its note
//! - Only the notes that are kept must have a positive duration

use serde::Serialize;
use thiserror::Error;

use super::melody::{reference_pitch, Track};

/// Notes at or below this pitch are left out of the plan.
pub const DEFAULT_MIN_PITCH: u8 = 65;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("melody has no leading note to tune against")]
    EmptyMelody,

    #[error("{0} must be a positive number of seconds")]
    InvalidClip(&'static str),

    #[error("note #{index} of track #{track} does not have a positive duration")]
    InvalidNote { track: usize, index: usize },
}

/// Length of the source meme, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClipInfo {
    /// Audio block length.
    pub block_length_secs: f64,
    /// Video clip length.
    pub clip_duration_secs: f64,
}

impl ClipInfo {
    fn validate(&self) -> Result<(), PlanError> {
        if !is_positive(self.block_length_secs) {
            return Err(PlanError::InvalidClip("block_length_secs"));
        }
        if !is_positive(self.clip_duration_secs) {
            return Err(PlanError::InvalidClip("clip_duration_secs"));
        }
        Ok(())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Where a segment comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Origin {
    /// The meme as uploaded, untouched audio.
    Lead,
    Note { track: usize, index: usize, pitch: u8 },
}

/// One clip of the output, in playing order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub origin: Origin,
    /// Semitones to shift the meme audio by.
    pub pitch_shift: i16,
    /// Time-stretch rate applied to the audio block.
    pub audio_stretch: f64,
    /// Speed factor applied to the video clip.
    pub video_speed: f64,
    pub duration_secs: f64,
}

/// Ordered segments making up the generated meme.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPlan {
    pub reference_pitch: u8,
    pub segments: Vec<Segment>,
    pub total_duration_secs: f64,
}

impl RenderPlan {
    /// Segments produced from melody notes, without the lead.
    pub fn note_segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments
            .iter()
            .filter(|s| matches!(s.origin, Origin::Note { .. }))
    }
}

pub fn build_plan(tracks: &[Track], clip: &ClipInfo, min_pitch: u8) -> Result<RenderPlan, PlanError> {
    clip.validate()?;
    let reference = reference_pitch(tracks).ok_or(PlanError::EmptyMelody)?;

    let mut segments = vec![Segment {
        origin: Origin::Lead,
        pitch_shift: 0,
        audio_stretch: 1.0,
        video_speed: clip.clip_duration_secs / clip.block_length_secs,
        duration_secs: clip.block_length_secs,
    }];

    for (track_index, track) in tracks.iter().enumerate() {
        for (index, note) in track.notes.iter().enumerate() {
            if note.pitch <= min_pitch {
                continue;
            }
            let duration = note.duration();
            if !is_positive(duration) {
                return Err(PlanError::InvalidNote {
                    track: track_index,
                    index,
                });
            }
            segments.push(Segment {
                origin: Origin::Note {
                    track: track_index,
                    index,
                    pitch: note.pitch,
                },
                pitch_shift: i16::from(reference) - i16::from(note.pitch),
                audio_stretch: clip.block_length_secs / duration,
                video_speed: clip.clip_duration_secs / duration,
                duration_secs: duration,
            });
        }
    }

    let total_duration_secs = segments.iter().map(|s| s.duration_secs).sum();
    tracing::debug!(
        reference_pitch = reference,
        segments = segments.len(),
        total_duration_secs,
        "Render plan built"
    );

    Ok(RenderPlan {
        reference_pitch: reference,
        segments,
        total_duration_secs,
    })
}
