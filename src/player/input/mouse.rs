//! Mouse input handling for the review player.
//!
//! A left press on the timeline starts a scrub, dragging moves it, and
//! releasing ends it. A click on a cut-list row selects that row.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::media::MediaSource;
use crate::player::playback::PointerOffset;
use crate::player::scheduler::TickScheduler;
use crate::player::session::ReviewSession;
use crate::player::state::InputResult;

/// Handle a mouse event.
pub fn handle_mouse_event<M: MediaSource, S: TickScheduler>(
    mouse: MouseEvent,
    session: &mut ReviewSession<M, S>,
) -> InputResult {
    let areas = *session.hit_areas();

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if areas.in_timeline(mouse.column, mouse.row) {
                if let Some(pointer) = timeline_pointer(session, mouse.column) {
                    session.authority_mut().request_scrub_start(pointer);
                    session.set_dragging(true);
                }
            } else if let Some(row) = areas.list_row_at(mouse.column, mouse.row) {
                session.select(row);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) if session.is_dragging() => {
            // Dragging off the bar keeps scrubbing, clamped to its ends
            if let Some(pointer) = timeline_pointer(session, mouse.column) {
                session.authority_mut().request_scrub_move(pointer);
            }
        }
        MouseEventKind::Up(MouseButton::Left) if session.is_dragging() => {
            end_drag(session);
        }
        MouseEventKind::ScrollDown => session.select_next(),
        MouseEventKind::ScrollUp => session.select_prev(),
        _ => {}
    }

    InputResult::Continue
}

/// Release an in-progress scrub, e.g. when focus is lost mid-drag.
pub fn end_drag<M: MediaSource, S: TickScheduler>(session: &mut ReviewSession<M, S>) {
    if session.is_dragging() {
        session.set_dragging(false);
        session.authority_mut().request_scrub_end();
    }
}

fn timeline_pointer<M: MediaSource, S: TickScheduler>(
    session: &ReviewSession<M, S>,
    column: u16,
) -> Option<PointerOffset> {
    let area = session.hit_areas().timeline?;
    Some(PointerOffset::from_column(column, area.x, area.width))
}
