//! Media source errors.

/// Failure reported by a media source when asked to seek, play, or pause.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MediaError {
    #[error("Media is not loaded yet")]
    NotLoaded,

    #[error("Seek to {0:.3}s was rejected")]
    SeekRejected(f64),

    #[error("Playback failed: {0}")]
    PlaybackFailed(String),
}
