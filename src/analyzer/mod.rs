//! Cut detection.
//!
//! The review flow only needs a source of candidate cuts. This module holds
//! the detection settings and a seeded mock detector that stands in for a
//! real speech analysis backend.
//!
//! # Module Structure
//!
//! - [`config`] - Which cut kinds to detect and the confidence threshold
//! - [`mock`] - Deterministic detector producing cuts from a duration

mod config;
mod mock;

pub use config::DetectionConfig;
pub use mock::MockAnalyzer;
