//! cutreview - review detected cut intervals on a media timeline
//!
//! The core is the [`player`] module: a single playback authority that
//! arbitrates between the media clock, pointer scrubbing, and bounded cut
//! previews, skipping accepted cuts while it plays. Everything else feeds it
//! (cut files, the mock analyzer, configuration) or presents it (the TUI,
//! metrics, and reports).

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod cuts;
pub mod media;
pub mod metrics;
pub mod player;
pub mod report;
pub mod tui;

pub use config::Config;
pub use cuts::{CutFile, CutId, CutInterval, CutKind, CutSet, CutStatus};
pub use metrics::{compute_metrics, Metrics};
pub use tui::theme;
