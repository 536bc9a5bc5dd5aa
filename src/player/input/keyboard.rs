//! Keyboard input handling for the review player.
//!
//! Handles playback controls, cut preview, accept/reject toggles, and
//! list navigation.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::media::MediaSource;
use crate::player::scheduler::TickScheduler;
use crate::player::session::ReviewSession;
use crate::player::state::InputResult;

/// Handle a keyboard event.
pub fn handle_key_event<M: MediaSource, S: TickScheduler>(
    key: KeyEvent,
    session: &mut ReviewSession<M, S>,
) -> InputResult {
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }

    // If help is showing, any key closes it
    if session.show_help() {
        session.hide_help();
        return InputResult::Continue;
    }

    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => return InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return InputResult::Quit
        }

        KeyCode::Char('?') => session.toggle_help(),

        // === Playback ===
        KeyCode::Char(' ') => session.authority_mut().request_toggle(),
        KeyCode::Char('p') => session.preview_selected(),

        // === Review ===
        KeyCode::Char('a') | KeyCode::Enter => {
            session.toggle_selected();
        }

        // === Navigation ===
        KeyCode::Up | KeyCode::Char('k') => session.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => session.select_next(),
        KeyCode::Home => session.select(0),
        KeyCode::End => session.select(session.row_count().saturating_sub(1)),

        _ => {}
    }
    InputResult::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cuts::{CutInterval, CutKind, CutSet, CutStatus};
    use crate::media::SimulatedMedia;
    use crate::player::authority::PlaybackAuthority;
    use crate::player::config::PlaybackConfig;
    use crate::player::scheduler::ManualScheduler;
    use crate::player::state::PlaybackMode;

    fn session() -> ReviewSession<SimulatedMedia, ManualScheduler> {
        let cuts = CutSet::from_intervals(vec![
            CutInterval::new("a", CutKind::Filler, 5.0, 6.0, 0.9).unwrap(),
            CutInterval::new("b", CutKind::Stutter, 10.0, 12.0, 0.7).unwrap(),
        ])
        .unwrap();
        let authority = PlaybackAuthority::new(
            SimulatedMedia::with_duration(30.0),
            ManualScheduler::new(),
            PlaybackConfig::default(),
        );
        ReviewSession::new(authority, cuts)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_keys() {
        let mut s = session();
        assert_eq!(handle_key_event(press(KeyCode::Char('q')), &mut s), InputResult::Quit);
        assert_eq!(handle_key_event(press(KeyCode::Esc), &mut s), InputResult::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(ctrl_c, &mut s), InputResult::Quit);
    }

    #[test]
    fn space_toggles_playback() {
        let mut s = session();
        handle_key_event(press(KeyCode::Char(' ')), &mut s);
        s.tick();
        assert_eq!(s.authority().current_mode(), PlaybackMode::Playing);

        handle_key_event(press(KeyCode::Char(' ')), &mut s);
        s.tick();
        assert_eq!(s.authority().current_mode(), PlaybackMode::Idle);
    }

    #[test]
    fn p_previews_selected_cut() {
        let mut s = session();
        handle_key_event(press(KeyCode::Char('j')), &mut s);
        handle_key_event(press(KeyCode::Char('p')), &mut s);
        s.tick();
        assert_eq!(s.authority().current_mode(), PlaybackMode::PreviewingSegment);
        assert_eq!(s.authority().current_position(), 9.0);
    }

    #[test]
    fn enter_and_a_toggle_status() {
        let mut s = session();
        handle_key_event(press(KeyCode::Enter), &mut s);
        assert_eq!(s.selected_cut().unwrap().status, CutStatus::Rejected);
        handle_key_event(press(KeyCode::Char('a')), &mut s);
        assert_eq!(s.selected_cut().unwrap().status, CutStatus::Accepted);
    }

    #[test]
    fn arrows_move_selection() {
        let mut s = session();
        handle_key_event(press(KeyCode::Down), &mut s);
        assert_eq!(s.selected_row(), 1);
        handle_key_event(press(KeyCode::Up), &mut s);
        assert_eq!(s.selected_row(), 0);
        handle_key_event(press(KeyCode::End), &mut s);
        assert_eq!(s.selected_row(), 1);
    }

    #[test]
    fn any_key_closes_help() {
        let mut s = session();
        handle_key_event(press(KeyCode::Char('?')), &mut s);
        assert!(s.show_help());
        let result = handle_key_event(press(KeyCode::Char('q')), &mut s);
        assert_eq!(result, InputResult::Continue);
        assert!(!s.show_help());
    }
}
