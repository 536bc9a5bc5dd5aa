//! End-to-end playback scenarios driven through terminal input events

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use cutreview::media::{MediaSource, SimulatedMedia};
use cutreview::player::input::handle_event;
use cutreview::player::{
    HitAreas, InputResult, ManualScheduler, PlaybackAuthority, PlaybackConfig, PlaybackMode,
    ReviewSession, TickReport, TickScheduler,
};
use cutreview::{CutId, CutInterval, CutKind, CutSet, CutStatus};

type Session = ReviewSession<SimulatedMedia, ManualScheduler>;

/// Timeline bar spans columns 10..=109; with 99s of media one column is one second.
const TIMELINE_X: u16 = 10;

fn session_with(duration: Option<f64>, cuts: Vec<CutInterval>) -> Session {
    let media = match duration {
        Some(d) => SimulatedMedia::with_duration(d),
        None => SimulatedMedia::new(),
    };
    let authority = PlaybackAuthority::new(media, ManualScheduler::new(), PlaybackConfig::default());
    let mut session = ReviewSession::new(authority, CutSet::from_intervals(cuts).unwrap());
    session.set_hit_areas(HitAreas {
        timeline: Some(Rect::new(TIMELINE_X, 2, 100, 1)),
        list: Some(Rect::new(0, 5, 60, 10)),
        list_offset: 0,
    });
    session
}

fn standard_session() -> Session {
    session_with(
        Some(99.0),
        vec![
            CutInterval::new("a", CutKind::Filler, 5.0, 6.0, 0.9).unwrap(),
            CutInterval::new("b", CutKind::Cliche, 40.0, 45.0, 0.6).unwrap(),
            CutInterval::new("c", CutKind::Silence, 70.0, 80.0, 0.95).unwrap(),
        ],
    )
}

fn key(session: &mut Session, code: KeyCode) -> InputResult {
    handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)), session)
}

fn mouse(session: &mut Session, kind: MouseEventKind, column: u16) {
    let event = Event::Mouse(MouseEvent {
        kind,
        column,
        row: 2,
        modifiers: KeyModifiers::NONE,
    });
    assert_eq!(handle_event(event, session), InputResult::Continue);
}

/// Advance the media clock by `dt` and run the tick if one was requested.
fn frame(session: &mut Session, dt: f64) -> TickReport {
    session.authority_mut().media_mut().advance(dt);
    if session.authority_mut().scheduler_mut().take() {
        session.tick()
    } else {
        TickReport {
            mode: session.authority().current_mode(),
            position: session.authority().current_position(),
            ..TickReport::default()
        }
    }
}

fn assert_near(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn playback_skips_every_accepted_cut() {
    let mut s = standard_session();
    key(&mut s, KeyCode::Char(' '));
    frame(&mut s, 0.0);
    assert_eq!(s.authority().current_mode(), PlaybackMode::Playing);

    let mut skipped = Vec::new();
    for _ in 0..200 {
        let report = frame(&mut s, 0.5);
        if let Some(jump) = report.jump {
            skipped.push(jump.cut.to_string());
        }
        if report.mode == PlaybackMode::Idle {
            break;
        }
    }

    assert_eq!(skipped, ["a", "b", "c"]);
    assert_eq!(s.authority().current_mode(), PlaybackMode::Idle);
    assert_near(s.authority().current_position(), 99.0);
    assert!(!s.authority().scheduler().is_scheduled());
}

#[test]
fn scrub_while_playing_resumes_and_skips_on_release() {
    let mut s = standard_session();
    key(&mut s, KeyCode::Char(' '));
    frame(&mut s, 0.0);
    frame(&mut s, 1.0);

    mouse(&mut s, MouseEventKind::Down(MouseButton::Left), TIMELINE_X + 50);
    frame(&mut s, 0.0);
    assert_eq!(s.authority().current_mode(), PlaybackMode::Scrubbing);
    assert_near(s.authority().current_position(), 50.0);

    // Scrubbing lands inside an accepted cut without skipping it
    mouse(&mut s, MouseEventKind::Drag(MouseButton::Left), TIMELINE_X + 40);
    let report = frame(&mut s, 0.0);
    assert!(report.jump.is_none());
    assert_near(s.authority().current_position(), 40.0);
    assert_eq!(s.authority().active_cut_id(), Some(&CutId::new("b")));

    mouse(&mut s, MouseEventKind::Up(MouseButton::Left), TIMELINE_X + 40);
    frame(&mut s, 0.0);
    assert_eq!(s.authority().current_mode(), PlaybackMode::Playing);

    let report = frame(&mut s, 0.1);
    let jump = report.jump.expect("playback resumes inside the cut and skips it");
    assert_eq!(jump.cut.as_str(), "b");
    assert_eq!(jump.to, 45.0);
}

#[test]
fn scrub_while_idle_stays_idle_on_release() {
    let mut s = standard_session();
    frame(&mut s, 0.0);

    mouse(&mut s, MouseEventKind::Down(MouseButton::Left), TIMELINE_X + 20);
    frame(&mut s, 0.0);
    mouse(&mut s, MouseEventKind::Up(MouseButton::Left), TIMELINE_X + 20);
    frame(&mut s, 0.0);

    assert_eq!(s.authority().current_mode(), PlaybackMode::Idle);
    assert_near(s.authority().current_position(), 20.0);
    assert!(s.authority().media().is_paused());
}

#[test]
fn rejecting_a_cut_mid_playback_stops_skipping_it() {
    let mut s = standard_session();
    key(&mut s, KeyCode::Char(' '));
    frame(&mut s, 0.0);
    frame(&mut s, 2.0);

    // First row is cut "a"
    key(&mut s, KeyCode::Char('a'));
    assert_eq!(
        s.cuts().get(&CutId::new("a")).unwrap().status,
        CutStatus::Rejected
    );
    assert!(s.is_dirty());

    for _ in 0..8 {
        let report = frame(&mut s, 0.5);
        assert!(report.jump.is_none(), "rejected cut must not be skipped");
    }
    assert_near(s.authority().current_position(), 6.0);
}

#[test]
fn preview_plays_padded_window_then_stops() {
    let mut s = standard_session();
    frame(&mut s, 0.0);

    key(&mut s, KeyCode::Down);
    key(&mut s, KeyCode::Char('p'));
    let report = frame(&mut s, 0.0);
    assert_eq!(report.mode, PlaybackMode::PreviewingSegment);
    assert_near(report.position, 39.0);
    assert_eq!(s.snapshot().preview_bound, Some(46.0));

    let mut last = report;
    for _ in 0..20 {
        last = frame(&mut s, 0.5);
        assert!(last.jump.is_none(), "preview never skips");
        if last.mode == PlaybackMode::Idle {
            break;
        }
    }

    assert_eq!(last.mode, PlaybackMode::Idle);
    assert_near(s.authority().current_position(), 46.0);
    assert!(s.authority().media().is_paused());
}

#[test]
fn play_during_preview_switches_to_normal_playback() {
    let mut s = standard_session();
    frame(&mut s, 0.0);

    key(&mut s, KeyCode::Down);
    key(&mut s, KeyCode::Char('p'));
    frame(&mut s, 0.0);
    frame(&mut s, 1.5);
    assert_eq!(s.authority().current_mode(), PlaybackMode::PreviewingSegment);

    s.authority_mut().request_play();
    frame(&mut s, 0.0);
    assert_eq!(s.authority().current_mode(), PlaybackMode::Playing);
    assert_eq!(s.snapshot().preview_bound, None);

    // Normal playback applies the skip policy again
    let report = frame(&mut s, 0.1);
    assert_eq!(report.jump.map(|j| j.to), Some(45.0));
}

#[test]
fn space_during_preview_pauses() {
    let mut s = standard_session();
    frame(&mut s, 0.0);

    key(&mut s, KeyCode::Down);
    key(&mut s, KeyCode::Char('p'));
    frame(&mut s, 0.0);
    frame(&mut s, 1.5);

    key(&mut s, KeyCode::Char(' '));
    frame(&mut s, 0.0);
    assert_eq!(s.authority().current_mode(), PlaybackMode::Idle);
    assert_near(s.authority().current_position(), 40.5);
    assert!(s.authority().media().is_paused());
}

#[test]
fn commands_wait_for_metadata() {
    let mut s = session_with(
        None,
        vec![CutInterval::new("a", CutKind::Stutter, 1.0, 2.0, 0.7).unwrap()],
    );

    key(&mut s, KeyCode::Char(' '));
    frame(&mut s, 0.0);
    assert_eq!(s.authority().current_mode(), PlaybackMode::Idle);
    assert!(s.metrics().is_none());

    s.authority_mut().media_mut().load(30.0);
    key(&mut s, KeyCode::Char(' '));
    frame(&mut s, 0.0);
    assert_eq!(s.authority().current_mode(), PlaybackMode::Playing);
    assert_eq!(s.metrics().map(|m| m.final_duration), Some(29.0));
}

#[test]
fn cut_running_to_the_end_finishes_playback() {
    let mut s = session_with(
        Some(20.0),
        vec![CutInterval::new("tail", CutKind::Silence, 18.0, 20.0, 0.9).unwrap()],
    );
    key(&mut s, KeyCode::Char(' '));
    frame(&mut s, 0.0);

    let mut jumped = false;
    for _ in 0..40 {
        let report = frame(&mut s, 1.0);
        jumped |= report.jump.is_some();
        if report.mode == PlaybackMode::Idle {
            break;
        }
    }
    assert!(jumped);
    assert_eq!(s.authority().current_mode(), PlaybackMode::Idle);
    assert_near(s.authority().current_position(), 20.0);

    // Play at the end starts over
    key(&mut s, KeyCode::Char(' '));
    frame(&mut s, 0.0);
    assert_eq!(s.authority().current_mode(), PlaybackMode::Playing);
    assert_near(s.authority().current_position(), 0.0);
}

#[test]
fn quit_keys_end_the_session() {
    let mut s = standard_session();
    assert_eq!(key(&mut s, KeyCode::Char('q')), InputResult::Quit);
    assert_eq!(key(&mut s, KeyCode::Esc), InputResult::Quit);

    let cuts = s.into_cuts();
    assert_eq!(cuts.len(), 3);
}
