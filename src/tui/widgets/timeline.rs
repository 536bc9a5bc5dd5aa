//! Timeline bar with cut markers, preview window, and play-head.
//!
//! Columns are placed with the same time/column mapping the mouse handler
//! uses for scrubbing, so a click lands on the time drawn under it.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::cuts::{CutInterval, CutSet};
use crate::player::playback::mapping::{column_span, time_to_column};
use crate::player::state::TimelineSnapshot;
use crate::tui::theme::Theme;

/// Format a duration in seconds to MM:SS format.
pub fn format_duration(seconds: f64) -> String {
    let total_secs = seconds.max(0.0) as u64;
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// What a single timeline column shows, highest priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Playhead,
    ActiveCut,
    AcceptedCut,
    RejectedCut,
    PreviewWindow,
    Played,
    Track,
}

impl CellKind {
    pub fn symbol(self) -> char {
        match self {
            CellKind::Playhead => '┃',
            CellKind::ActiveCut | CellKind::AcceptedCut => '█',
            CellKind::RejectedCut => '░',
            CellKind::PreviewWindow => '═',
            CellKind::Played => '━',
            CellKind::Track => '─',
        }
    }
}

/// Classify each of `width` columns.
pub fn build_timeline_cells(
    width: u16,
    snapshot: &TimelineSnapshot,
    cuts: &CutSet,
) -> Vec<CellKind> {
    let Some(duration) = snapshot.duration.filter(|d| *d > 0.0) else {
        return vec![CellKind::Track; width as usize];
    };
    let playhead = time_to_column(snapshot.position, duration, width);
    // Remaining part of a running preview
    let preview = snapshot
        .preview_bound
        .map(|bound| (snapshot.position, bound));

    (0..width)
        .map(|column| {
            if column == playhead {
                return CellKind::Playhead;
            }
            let (from, to) = column_span(column, duration, width);
            let overlaps = |c: &&CutInterval| c.start < to && c.end > from;

            let mut kind = None;
            for cut in cuts.iter().filter(overlaps) {
                if snapshot.active_cut.as_ref() == Some(&cut.id) {
                    kind = Some(CellKind::ActiveCut);
                    break;
                }
                if cut.is_accepted() {
                    kind = Some(CellKind::AcceptedCut);
                } else if kind.is_none() {
                    kind = Some(CellKind::RejectedCut);
                }
            }
            if let Some(kind) = kind {
                return kind;
            }

            match preview {
                Some((start, bound)) if to > start && from < bound => CellKind::PreviewWindow,
                _ if column < playhead => CellKind::Played,
                _ => CellKind::Track,
            }
        })
        .collect()
}

/// One-row timeline widget.
pub struct TimelineBar<'a> {
    snapshot: &'a TimelineSnapshot,
    cuts: &'a CutSet,
    theme: &'a Theme,
}

impl<'a> TimelineBar<'a> {
    pub fn new(snapshot: &'a TimelineSnapshot, cuts: &'a CutSet, theme: &'a Theme) -> Self {
        Self {
            snapshot,
            cuts,
            theme,
        }
    }
}

impl Widget for TimelineBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let cells = build_timeline_cells(area.width, self.snapshot, self.cuts);
        for (offset, kind) in cells.into_iter().enumerate() {
            let style = match kind {
                CellKind::Playhead => self.theme.playhead_style(),
                CellKind::ActiveCut => self.theme.cut_style(true, true),
                CellKind::AcceptedCut => self.theme.cut_style(true, false),
                CellKind::RejectedCut => self.theme.cut_style(false, false),
                CellKind::PreviewWindow => self.theme.preview_style(),
                CellKind::Played => self.theme.accent_style(),
                CellKind::Track => self.theme.text_secondary_style(),
            };
            if let Some(cell) = buf.cell_mut((area.x + offset as u16, area.y)) {
                cell.set_char(kind.symbol()).set_style(style);
            }
        }
    }
}
