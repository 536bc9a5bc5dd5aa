//! Interactive cut review.
//!
//! Draws the timeline, metrics, and cut list around a [`ReviewSession`] and
//! drives it from the terminal: input events become authority commands, the
//! wall clock feeds the simulated media, and the frame scheduler decides
//! when the authority ticks.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use tracing::info;

use super::app::status_footer::{footer_keys, render_footer, render_status_line};
use super::app::App;
use super::theme::{current_theme, Theme};
use super::ui::{build_review_layout, centered_rect, list_scroll_offset};
use super::widgets::{format_duration, TimelineBar};
use crate::cuts::{CutInterval, CutSet};
use crate::media::{MediaSource, SimulatedMedia};
use crate::player::input::handle_event;
use crate::player::scheduler::{FrameScheduler, TickScheduler};
use crate::player::session::{HitAreas, ReviewSession};
use crate::player::state::InputResult;
use crate::player::{PlaybackAuthority, PlaybackConfig};
use crate::report::format_timestamp;

/// Upper bound on how long the loop blocks for input while nothing plays.
const IDLE_WAIT: Duration = Duration::from_millis(250);

/// Result of a finished review.
#[derive(Debug)]
pub struct ReviewOutcome {
    pub cuts: CutSet,
    /// Whether any status was changed during the review
    pub dirty: bool,
}

pub struct ReviewApp {
    app: App,
    session: ReviewSession<SimulatedMedia, FrameScheduler>,
    title: String,
    message: String,
    last_frame: Instant,
}

impl ReviewApp {
    pub fn new(
        title: impl Into<String>,
        cuts: CutSet,
        media: SimulatedMedia,
        config: PlaybackConfig,
    ) -> Result<Self> {
        let scheduler = FrameScheduler::new(config.frame_interval());
        let authority = PlaybackAuthority::new(media, scheduler, config);
        let session = ReviewSession::new(authority, cuts);
        let app = App::new()?;

        Ok(Self {
            app,
            session,
            title: title.into(),
            message: String::from("Press space to play, ? for help"),
            last_frame: Instant::now(),
        })
    }

    /// Run the review until the user quits.
    pub fn run(mut self) -> Result<ReviewOutcome> {
        loop {
            self.draw()?;

            let timeout = self
                .session
                .authority()
                .scheduler()
                .poll_timeout(Instant::now(), IDLE_WAIT);
            if event::poll(timeout)? {
                let event = event::read()?;
                if handle_event(event, &mut self.session) == InputResult::Quit {
                    break;
                }
            }

            self.advance_clock();
            let due = self
                .session
                .authority_mut()
                .scheduler_mut()
                .take_due(Instant::now());
            if due {
                self.run_tick();
            }
        }

        let Self { app, session, .. } = self;
        drop(app);
        let dirty = session.is_dirty();
        Ok(ReviewOutcome {
            cuts: session.into_cuts(),
            dirty,
        })
    }

    /// Feed elapsed wall time to the simulated media.
    fn advance_clock(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame).as_secs_f64();
        self.last_frame = now;
        self.session.authority_mut().media_mut().advance(elapsed);
    }

    fn run_tick(&mut self) {
        let report = self.session.tick();
        if let Some(jump) = report.jump {
            info!(cut = %jump.cut, from = jump.from, to = jump.to, "skipped accepted cut");
            self.message = format!(
                "Skipped {} ({} -> {})",
                jump.cut,
                format_timestamp(jump.from),
                format_timestamp(jump.to)
            );
        }
    }

    fn draw(&mut self) -> Result<()> {
        let (width, height) = self.app.size()?;
        let layout = build_review_layout(Rect::new(0, 0, width, height));
        let offset = list_scroll_offset(
            self.session.selected_row(),
            layout.list_rows.height as usize,
        );
        self.session.set_hit_areas(HitAreas {
            timeline: Some(layout.timeline_bar),
            list: Some(layout.list_rows),
            list_offset: offset,
        });

        let session = &self.session;
        let title = self.title.as_str();
        let message = self.message.as_str();
        self.app
            .draw(|frame| render_review(frame, session, title, message))
    }
}

/// Render the whole review screen for `session`.
pub fn render_review<M: MediaSource, S: TickScheduler>(
    frame: &mut Frame,
    session: &ReviewSession<M, S>,
    title: &str,
    message: &str,
) {
    let theme = current_theme();
    let area = frame.area();
    let layout = build_review_layout(area);
    let snapshot = session.snapshot();

    let position = match snapshot.duration {
        Some(duration) => format!(
            "{} / {}",
            format_duration(snapshot.position),
            format_duration(duration)
        ),
        None => String::from("--:-- / --:--"),
    };
    let header = Line::from(vec![
        Span::styled(format!(" {}  ", title), theme.accent_bold_style()),
        Span::styled(position, theme.text_style()),
    ]);
    frame.render_widget(Paragraph::new(header), layout.header);

    let timeline_block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accent_style())
        .title(" Timeline ");
    frame.render_widget(timeline_block, layout.timeline_block);
    frame.render_widget(
        TimelineBar::new(&snapshot, session.cuts(), &theme),
        layout.timeline_bar,
    );

    let metrics_text = match session.metrics() {
        Some(m) => format!(
            " Original {} | Final {} | {} cuts | Saved {:.1}s ({:.1}%)",
            format_duration(m.original_duration),
            format_duration(m.final_duration),
            m.cuts_count,
            m.time_saved,
            m.percent_saved()
        ),
        None => String::from(" Waiting for media metadata"),
    };
    frame.render_widget(
        Paragraph::new(metrics_text).style(theme.text_style()),
        layout.metrics,
    );

    let list_block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accent_style())
        .title(format!(" Cuts ({}) ", session.row_count()));
    frame.render_widget(list_block, layout.list_block);

    let visible = layout.list_rows.height as usize;
    let offset = list_scroll_offset(session.selected_row(), visible);
    let lines: Vec<Line> = if session.row_count() == 0 {
        vec![Line::styled("No cuts detected", theme.text_secondary_style())]
    } else {
        session
            .rows()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(row, cut)| {
                let active = snapshot.active_cut.as_ref() == Some(&cut.id);
                let mut style = theme.cut_style(cut.is_accepted(), active);
                if row == session.selected_row() {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                Line::styled(format_cut_row(cut), style)
            })
            .collect()
    };
    frame.render_widget(Paragraph::new(lines), layout.list_rows);

    render_status_line(frame, layout.status, snapshot.mode, message);
    render_footer(
        frame,
        layout.footer,
        footer_keys(snapshot.mode, session.show_help()),
    );

    if session.show_help() {
        render_help_modal(frame, area);
    }
}

/// One line of the cut list.
pub fn format_cut_row(cut: &CutInterval) -> String {
    let mark = if cut.is_accepted() { "[x]" } else { "[ ]" };
    let label = cut.label.as_deref().unwrap_or("");
    format!(
        "{} {} - {}  {:<10} {:>3.0}%  {}",
        mark,
        format_timestamp(cut.start),
        format_timestamp(cut.end),
        cut.kind.label(),
        cut.confidence * 100.0,
        label
    )
}

/// Render the help modal overlay.
pub fn render_help_modal(frame: &mut Frame, area: Rect) {
    let theme = current_theme();
    let modal_area = centered_rect(60, 80, area);

    // Clear the area behind the modal
    frame.render_widget(Clear, modal_area);

    let help = Paragraph::new(build_help_text(&theme))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .title(" Help "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(help, modal_area);
}

fn build_help_text(theme: &Theme) -> Vec<Line<'static>> {
    let section = |title: &'static str| Line::styled(title, theme.accent_bold_style());
    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<12}", key), theme.accent_style()),
            Span::styled(desc, theme.text_style()),
        ])
    };

    vec![
        section("Playback"),
        entry("Space", "Play / pause (accepted cuts are skipped)"),
        entry("p", "Preview the selected cut with padding"),
        entry("Click/drag", "Scrub the timeline"),
        Line::raw(""),
        section("Cuts"),
        entry("Up/Down j/k", "Move selection"),
        entry("Home/End", "First / last cut"),
        entry("a / Enter", "Toggle accepted / rejected"),
        Line::raw(""),
        section("General"),
        entry("?", "Show this help"),
        entry("q / Esc", "Quit (changes are saved)"),
        Line::raw(""),
        Line::styled("Press any key to close", theme.text_secondary_style()),
    ]
}
