//! Cut interval validation and cut-file errors.

use std::path::PathBuf;

/// Errors raised while building or loading a set of cut intervals.
#[derive(Debug, thiserror::Error)]
pub enum CutError {
    #[error("Cut '{id}' has invalid bounds: start {start} must be >= 0 and below end {end}")]
    InvalidBounds { id: String, start: f64, end: f64 },

    #[error("Cut '{id}' has confidence {confidence} outside [0, 1]")]
    InvalidConfidence { id: String, confidence: f64 },

    #[error("Duplicate cut id '{id}'")]
    DuplicateId { id: String },

    #[error("No cut with id '{id}'")]
    UnknownCut { id: String },

    #[error("Cut file duration must be positive, got {0}")]
    InvalidDuration(f64),

    #[error("Failed to read cut file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write cut file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed cut file: {0}")]
    Parse(#[from] serde_json::Error),
}
