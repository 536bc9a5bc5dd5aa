//! Media source boundary.
//!
//! The playback authority only talks to media through [`MediaSource`]. The
//! media's own position is a mirror: the authority reads it while playback
//! advances and writes it (seek) when it forces a jump.

mod error;
mod simulated;

pub use error::MediaError;
pub use simulated::SimulatedMedia;

/// Asynchronous notification from a media source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    /// Duration became known
    MetadataReady(f64),
    /// Media started (`true`) or stopped (`false`) playing
    PlayStateChanged(bool),
}

/// A media source the authority can read and command.
///
/// Each implementation wraps one playback backend and reports its own
/// failures; the authority decides how to recover.
pub trait MediaSource {
    /// Total duration, or `None` before metadata is available.
    fn duration(&self) -> Option<f64>;

    /// Current media position in seconds.
    fn position(&self) -> f64;

    /// Move the media position without changing play state.
    fn seek(&mut self, seconds: f64) -> Result<(), MediaError>;

    fn play(&mut self) -> Result<(), MediaError>;

    fn pause(&mut self) -> Result<(), MediaError>;

    fn is_paused(&self) -> bool;

    /// Take the next pending notification, if any.
    fn poll_event(&mut self) -> Option<MediaEvent>;
}

impl<M: MediaSource + ?Sized> MediaSource for Box<M> {
    fn duration(&self) -> Option<f64> {
        (**self).duration()
    }

    fn position(&self) -> f64 {
        (**self).position()
    }

    fn seek(&mut self, seconds: f64) -> Result<(), MediaError> {
        (**self).seek(seconds)
    }

    fn play(&mut self) -> Result<(), MediaError> {
        (**self).play()
    }

    fn pause(&mut self) -> Result<(), MediaError> {
        (**self).pause()
    }

    fn is_paused(&self) -> bool {
        (**self).is_paused()
    }

    fn poll_event(&mut self) -> Option<MediaEvent> {
        (**self).poll_event()
    }
}
