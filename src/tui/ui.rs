//! UI layout helpers for TUI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions of the review application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewLayout {
    pub header: Rect,
    /// Bordered block around the timeline
    pub timeline_block: Rect,
    /// The one-row bar inside the timeline block
    pub timeline_bar: Rect,
    pub metrics: Rect,
    /// Bordered block around the cut list
    pub list_block: Rect,
    /// Rows available for cuts inside the list block
    pub list_rows: Rect,
    pub status: Rect,
    pub footer: Rect,
}

/// Split the frame into the review application's regions.
pub fn build_review_layout(area: Rect) -> ReviewLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(3), // timeline
            Constraint::Length(1), // metrics
            Constraint::Min(3),    // cut list
            Constraint::Length(1), // status
            Constraint::Length(1), // footer
        ])
        .split(area);

    ReviewLayout {
        header: chunks[0],
        timeline_block: chunks[1],
        timeline_bar: inner(chunks[1]),
        metrics: chunks[2],
        list_block: chunks[3],
        list_rows: inner(chunks[3]),
        status: chunks[4],
        footer: chunks[5],
    }
}

/// Area inside a one-cell border.
fn inner(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(1),
        area.y.saturating_add(1),
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}

/// First list index to show so that `selected` stays visible.
pub fn list_scroll_offset(selected: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 {
        return selected;
    }
    selected.saturating_sub(visible_rows - 1)
}

/// Area of `percent_x` by `percent_y` centered in `area`, used for modals.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical_layout[1])[1]
}
