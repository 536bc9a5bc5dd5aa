//! Status line and key-hint footer for the review screen.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::player::PlaybackMode;
use crate::theme::{current_theme, Theme};

/// Mode badge followed by the latest message.
pub fn render_status_line(frame: &mut Frame, area: Rect, mode: PlaybackMode, message: &str) {
    let theme = current_theme();
    frame.render_widget(Paragraph::new(status_line(mode, message, &theme)), area);
}

fn status_line(mode: PlaybackMode, message: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {} ", mode.label().to_uppercase()),
            theme.mode_style(mode),
        ),
        Span::styled(format!(" {}", message), theme.text_secondary_style()),
    ])
}

/// Key hints that apply in the current state.
pub fn footer_keys(mode: PlaybackMode, help_shown: bool) -> &'static [(&'static str, &'static str)] {
    if help_shown {
        return &[("any key", "close help")];
    }
    match mode {
        PlaybackMode::Scrubbing => &[("release", "stop scrubbing"), ("q", "quit")],
        PlaybackMode::Playing | PlaybackMode::PreviewingSegment => &[
            ("space", "pause"),
            ("a", "accept/reject"),
            ("?", "help"),
            ("q", "quit"),
        ],
        PlaybackMode::Idle => &[
            ("space", "play"),
            ("p", "preview"),
            ("a", "accept/reject"),
            ("?", "help"),
            ("q", "quit"),
        ],
    }
}

/// Centered `key: description` hints separated by " | ".
pub fn render_footer(frame: &mut Frame, area: Rect, keys: &[(&str, &str)]) {
    let theme = current_theme();
    let footer = Line::from(build_footer_spans(keys, &theme)).centered();
    frame.render_widget(Paragraph::new(footer), area);
}

fn build_footer_spans(keys: &[(&str, &str)], theme: &Theme) -> Vec<Span<'static>> {
    let separator = Span::styled(" | ", theme.text_secondary_style());
    keys.iter()
        .enumerate()
        .flat_map(|(i, (key, desc))| {
            let lead = (i > 0).then(|| separator.clone());
            lead.into_iter().chain([
                Span::styled(key.to_string(), theme.accent_style()),
                Span::styled(format!(": {}", desc), theme.text_secondary_style()),
            ])
        })
        .collect()
}
