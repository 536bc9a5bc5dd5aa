//! TUI widgets for cutreview
//!
//! Reusable UI components for the terminal interface.

pub mod timeline;

pub use timeline::{build_timeline_cells, format_duration, CellKind, TimelineBar};
