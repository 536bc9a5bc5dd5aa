//! Player state management
//!
//! Contains the `TimelineState` owned by the playback authority, the
//! read-only snapshot handed to renderers, and the command type that is the
//! only way to change either.

use std::fmt;

use crate::cuts::CutId;
use crate::player::playback::PointerOffset;

/// Result of processing an input event.
///
/// Returned by input handlers to signal control flow decisions to the
/// main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue normal playback/rendering
    Continue,
    /// Exit the review
    Quit,
}

/// What currently drives the play-head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackMode {
    /// Not advancing (nothing loaded, paused, or finished)
    #[default]
    Idle,
    /// Advancing from the media clock with the skip policy applied
    Playing,
    /// Position follows pointer input only
    Scrubbing,
    /// Advancing inside a bounded window around one cut, skip policy off
    PreviewingSegment,
}

impl PlaybackMode {
    /// Whether the media clock moves the play-head in this mode.
    pub fn is_advancing(self) -> bool {
        matches!(self, PlaybackMode::Playing | PlaybackMode::PreviewingSegment)
    }

    pub fn label(self) -> &'static str {
        match self {
            PlaybackMode::Idle => "idle",
            PlaybackMode::Playing => "playing",
            PlaybackMode::Scrubbing => "scrubbing",
            PlaybackMode::PreviewingSegment => "preview",
        }
    }
}

impl fmt::Display for PlaybackMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Explicit requests funneled into the authority.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Play,
    Pause,
    ScrubStart(PointerOffset),
    ScrubMove(PointerOffset),
    ScrubEnd,
    Preview(CutId),
}

/// Authoritative timeline state.
///
/// Only the playback authority mutates this; everything else reads a
/// [`TimelineSnapshot`].
#[derive(Debug, Clone, Default)]
pub struct TimelineState {
    pub(crate) duration: Option<f64>,
    pub(crate) position: f64,
    pub(crate) mode: PlaybackMode,
    pub(crate) preview_bound: Option<f64>,
    pub(crate) was_playing_before_scrub: bool,
}

impl TimelineState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Media duration, once metadata is available.
    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    pub fn preview_bound(&self) -> Option<f64> {
        self.preview_bound
    }

    pub fn was_playing_before_scrub(&self) -> bool {
        self.was_playing_before_scrub
    }

    /// Record the media duration. The first positive value sticks.
    ///
    /// Returns true if the duration was accepted.
    pub(crate) fn set_duration(&mut self, duration: f64) -> bool {
        if self.duration.is_some() || !(duration > 0.0) || !duration.is_finite() {
            return false;
        }
        self.duration = Some(duration);
        self.position = self.position.clamp(0.0, duration);
        true
    }

    /// Assign the play-head, clamped to `[0, duration]`.
    pub(crate) fn set_position(&mut self, position: f64) {
        let upper = self.duration.unwrap_or(0.0);
        self.position = if position.is_nan() {
            0.0
        } else {
            position.clamp(0.0, upper)
        };
    }

    /// Enter Idle, clearing any preview bound.
    pub(crate) fn stop(&mut self) {
        self.mode = PlaybackMode::Idle;
        self.preview_bound = None;
    }
}

/// Read-only view of the timeline for renderers and drivers.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineSnapshot {
    pub position: f64,
    pub duration: Option<f64>,
    pub mode: PlaybackMode,
    pub preview_bound: Option<f64>,
    pub active_cut: Option<CutId>,
}

impl TimelineSnapshot {
    /// Play-head position as a fraction of the timeline.
    pub fn progress(&self) -> f64 {
        crate::player::playback::to_fraction(self.position, self.duration.unwrap_or(0.0))
    }
}
