//! Interactive review session.
//!
//! Bundles the playback authority with the cut list it plays against and the
//! UI-side state (selection, help overlay, hit areas for the mouse). Input
//! handlers mutate the session; renderers read it.

use ratatui::layout::Rect;
use tracing::{debug, warn};

use crate::cuts::{CutInterval, CutSet, CutStatus};
use crate::media::MediaSource;
use crate::metrics::{compute_metrics, Metrics};
use crate::player::authority::{PlaybackAuthority, TickReport};
use crate::player::scheduler::TickScheduler;
use crate::player::state::TimelineSnapshot;

/// Screen regions recorded at draw time so mouse events can be mapped back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitAreas {
    /// Timeline bar, one column per time step
    pub timeline: Option<Rect>,
    /// Visible rows of the cut list
    pub list: Option<Rect>,
    /// Index (in display order) of the first visible list row
    pub list_offset: usize,
}

impl HitAreas {
    /// Display-order index of the list row under `(column, row)`.
    pub fn list_row_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.list?;
        if !hit(area, column, row) {
            return None;
        }
        Some(self.list_offset + (row - area.y) as usize)
    }

    pub fn in_timeline(&self, column: u16, row: u16) -> bool {
        self.timeline.is_some_and(|area| hit(area, column, row))
    }
}

fn hit(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

pub struct ReviewSession<M, S> {
    authority: PlaybackAuthority<M, S>,
    cuts: CutSet,
    /// Indices into `cuts`, sorted by start time
    order: Vec<usize>,
    selected: usize,
    show_help: bool,
    dirty: bool,
    dragging: bool,
    hit_areas: HitAreas,
}

impl<M: MediaSource, S: TickScheduler> ReviewSession<M, S> {
    pub fn new(authority: PlaybackAuthority<M, S>, cuts: CutSet) -> Self {
        let slice = cuts.as_slice();
        let mut order: Vec<usize> = (0..slice.len()).collect();
        order.sort_by(|&a, &b| slice[a].start.total_cmp(&slice[b].start));

        Self {
            authority,
            cuts,
            order,
            selected: 0,
            show_help: false,
            dirty: false,
            dragging: false,
            hit_areas: HitAreas::default(),
        }
    }

    pub fn authority(&self) -> &PlaybackAuthority<M, S> {
        &self.authority
    }

    pub fn authority_mut(&mut self) -> &mut PlaybackAuthority<M, S> {
        &mut self.authority
    }

    pub fn cuts(&self) -> &CutSet {
        &self.cuts
    }

    /// Consume the session, returning the (possibly edited) cuts.
    pub fn into_cuts(mut self) -> CutSet {
        self.authority.shutdown();
        self.cuts
    }

    /// Cuts in display order (by start time).
    pub fn rows(&self) -> impl Iterator<Item = &CutInterval> + '_ {
        let slice = self.cuts.as_slice();
        self.order.iter().map(move |&i| &slice[i])
    }

    pub fn row_count(&self) -> usize {
        self.order.len()
    }

    pub fn selected_row(&self) -> usize {
        self.selected
    }

    pub fn selected_cut(&self) -> Option<&CutInterval> {
        let index = *self.order.get(self.selected)?;
        self.cuts.as_slice().get(index)
    }

    pub fn select(&mut self, row: usize) {
        if row < self.order.len() {
            self.selected = row;
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.order.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Flip accept/reject on the selected cut.
    ///
    /// The authority sees the change on its next tick.
    pub fn toggle_selected(&mut self) -> Option<CutStatus> {
        let id = self.selected_cut()?.id.clone();
        match self.cuts.toggle(&id) {
            Ok(status) => {
                debug!(cut = %id, status = status.label(), "cut status changed");
                self.dirty = true;
                Some(status)
            }
            Err(err) => {
                warn!("toggle failed: {}", err);
                None
            }
        }
    }

    pub fn preview_selected(&mut self) {
        if let Some(id) = self.selected_cut().map(|c| c.id.clone()) {
            self.authority.request_preview(id);
        }
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn hide_help(&mut self) {
        self.show_help = false;
    }

    /// Whether any cut status changed since the session started.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub(crate) fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    pub fn hit_areas(&self) -> &HitAreas {
        &self.hit_areas
    }

    pub fn set_hit_areas(&mut self, hit_areas: HitAreas) {
        self.hit_areas = hit_areas;
    }

    pub fn snapshot(&self) -> TimelineSnapshot {
        self.authority.snapshot()
    }

    /// Metrics for the current statuses, once the duration is known.
    pub fn metrics(&self) -> Option<Metrics> {
        self.authority
            .duration()
            .map(|duration| compute_metrics(&self.cuts, duration))
    }

    pub fn tick(&mut self) -> TickReport {
        self.authority.tick(&self.cuts)
    }
}
