//! Playback logic shared by the authority and the renderers.
//!
//! This module handles time/position mapping and the skip policy.

pub mod mapping;
pub mod skip;

pub use mapping::{pointer_to_time, to_fraction, to_time, PointerOffset};
pub use skip::{evaluate, settle, upcoming, SkipDecision};
