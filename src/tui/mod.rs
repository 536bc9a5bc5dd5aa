//! TUI (Text User Interface) module for cutreview
//!
//! This module provides terminal-based UI components using ratatui/crossterm.
//! The review application redraws on every frame so resizes are picked up
//! without extra handling.

pub mod app;
pub mod review_app;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use app::App;
pub use review_app::{ReviewApp, ReviewOutcome};
pub use theme::current_theme;
