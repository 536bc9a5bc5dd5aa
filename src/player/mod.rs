//! Review player
//!
//! Owns the play-head for a cut review and keeps it consistent across the
//! three things that want to move it: the media clock, pointer scrubbing, and
//! bounded cut previews.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `state`: TimelineState, PlaybackMode, Command and shared types (InputResult)
//! - `playback/`: Time/position mapping and the skip policy (pure functions)
//! - `scheduler`: Tick scheduling port and its manual and frame-paced drivers
//! - `authority`: The state machine that is the only writer of the play-head
//! - `session`: Authority plus cut list and selection for interactive review
//! - `input/`: Keyboard and mouse input handling
//!
//! # Usage
//!
//! ```
//! use cutreview::cuts::{CutInterval, CutKind, CutSet};
//! use cutreview::media::SimulatedMedia;
//! use cutreview::player::{ManualScheduler, PlaybackAuthority, PlaybackConfig, PlaybackMode};
//!
//! let cuts = CutSet::from_intervals(vec![
//!     CutInterval::new("c1", CutKind::Filler, 2.0, 4.0, 0.9).unwrap(),
//! ])
//! .unwrap();
//! let mut authority = PlaybackAuthority::new(
//!     SimulatedMedia::with_duration(60.0),
//!     ManualScheduler::new(),
//!     PlaybackConfig::default(),
//! );
//!
//! authority.request_play();
//! authority.tick(&cuts);
//! assert_eq!(authority.current_mode(), PlaybackMode::Playing);
//!
//! authority.media_mut().advance(2.5);
//! let report = authority.tick(&cuts);
//! assert_eq!(report.position, 4.0);
//! ```

pub mod authority;
pub mod config;
pub mod input;
pub mod playback;
pub mod scheduler;
pub mod session;
pub mod state;

pub use authority::{PlaybackAuthority, SkipJump, TickReport};
pub use config::PlaybackConfig;
pub use scheduler::{FrameScheduler, ManualScheduler, TickScheduler};
pub use session::{HitAreas, ReviewSession};
pub use state::{Command, InputResult, PlaybackMode, TimelineSnapshot, TimelineState};
