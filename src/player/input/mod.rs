//! Input handling for the review player.
//!
//! This module handles keyboard and mouse input events, dispatching
//! them to the appropriate handlers and returning control flow signals.

mod keyboard;
mod mouse;

pub use keyboard::handle_key_event;
pub use mouse::{end_drag, handle_mouse_event};

use crossterm::event::Event;

use crate::media::MediaSource;
use crate::player::scheduler::TickScheduler;
use crate::player::session::ReviewSession;
use crate::player::state::InputResult;

/// Handle any input event, dispatching to the appropriate handler.
///
/// # Returns
/// `InputResult` indicating whether to continue or quit
pub fn handle_event<M: MediaSource, S: TickScheduler>(
    event: Event,
    session: &mut ReviewSession<M, S>,
) -> InputResult {
    match event {
        Event::Key(key) => handle_key_event(key, session),
        Event::Mouse(mouse) => handle_mouse_event(mouse, session),
        Event::FocusLost => {
            end_drag(session);
            InputResult::Continue
        }
        // Resize is picked up by the next draw
        _ => InputResult::Continue,
    }
}
