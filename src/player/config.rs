//! Tunables for the playback authority.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for playback, preview, and highlighting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// How far ahead (seconds) a cut is highlighted as upcoming
    pub lookahead_secs: f64,
    /// Context played before and after a previewed cut (seconds)
    pub preview_padding_secs: f64,
    /// Distance (seconds) from a cut within which it stays highlighted during preview
    pub preview_highlight_padding_secs: f64,
    /// Frame interval of the review loop in milliseconds
    pub frame_interval_ms: u64,
    /// Tolerance used when comparing against the end of content or a preview bound
    pub end_epsilon_secs: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            lookahead_secs: 2.0,
            preview_padding_secs: 1.0,
            preview_highlight_padding_secs: 1.5,
            frame_interval_ms: 16,
            end_epsilon_secs: 1e-6,
        }
    }
}

impl PlaybackConfig {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}
