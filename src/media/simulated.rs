//! Virtual media source driven by an explicit clock.
//!
//! Nothing is decoded: the source only tracks a position that advances when
//! the caller feeds it elapsed time. The review TUI feeds it wall-clock time
//! each frame; tests and `simulate` feed it fixed steps.

use std::collections::VecDeque;

use super::{MediaError, MediaEvent, MediaSource};

#[derive(Debug, Clone)]
pub struct SimulatedMedia {
    duration: Option<f64>,
    position: f64,
    paused: bool,
    rate: f64,
    events: VecDeque<MediaEvent>,
    next_failure: Option<MediaError>,
}

impl Default for SimulatedMedia {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedMedia {
    /// A source with no metadata yet.
    pub fn new() -> Self {
        Self {
            duration: None,
            position: 0.0,
            paused: true,
            rate: 1.0,
            events: VecDeque::new(),
            next_failure: None,
        }
    }

    /// A source whose metadata arrives on the first poll.
    pub fn with_duration(duration: f64) -> Self {
        let mut media = Self::new();
        media.load(duration);
        media
    }

    /// Make the duration known and queue `MetadataReady`.
    pub fn load(&mut self, duration: f64) {
        self.duration = Some(duration);
        self.events.push_back(MediaEvent::MetadataReady(duration));
    }

    /// Playback rate multiplier (1.0 = real time).
    pub fn set_rate(&mut self, rate: f64) {
        self.rate = rate.max(0.0);
    }

    /// Make the next seek/play/pause call fail with `error`.
    pub fn fail_next(&mut self, error: MediaError) {
        self.next_failure = Some(error);
    }

    /// Advance the media clock by `elapsed` seconds of wall time.
    ///
    /// Reaching the end pauses the source and reports it.
    pub fn advance(&mut self, elapsed: f64) {
        let Some(duration) = self.duration else {
            return;
        };
        if self.paused || !(elapsed > 0.0) {
            return;
        }
        self.position += elapsed * self.rate;
        if self.position >= duration {
            self.position = duration;
            self.paused = true;
            self.events.push_back(MediaEvent::PlayStateChanged(false));
        }
    }

    fn check_failure(&mut self) -> Result<(), MediaError> {
        match self.next_failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn loaded_duration(&self) -> Result<f64, MediaError> {
        self.duration.ok_or(MediaError::NotLoaded)
    }
}

impl MediaSource for SimulatedMedia {
    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn position(&self) -> f64 {
        self.position
    }

    fn seek(&mut self, seconds: f64) -> Result<(), MediaError> {
        self.check_failure()?;
        let duration = self.loaded_duration()?;
        if seconds.is_nan() {
            return Err(MediaError::SeekRejected(seconds));
        }
        self.position = seconds.clamp(0.0, duration);
        Ok(())
    }

    fn play(&mut self) -> Result<(), MediaError> {
        self.check_failure()?;
        self.loaded_duration()?;
        if self.paused {
            self.paused = false;
            self.events.push_back(MediaEvent::PlayStateChanged(true));
        }
        Ok(())
    }

    fn pause(&mut self) -> Result<(), MediaError> {
        self.check_failure()?;
        if !self.paused {
            self.paused = true;
            self.events.push_back(MediaEvent::PlayStateChanged(false));
        }
        Ok(())
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn poll_event(&mut self) -> Option<MediaEvent> {
        self.events.pop_front()
    }
}
