//! Colors and styles for the review TUI and CLI output
//!
//! One palette serves both ratatui styles and ANSI-colored CLI text.
//! Setting `NO_COLOR` turns the ANSI side off.

use ratatui::style::{Color, Modifier, Style};

use crate::player::PlaybackMode;

#[derive(Debug, Clone)]
pub struct Theme {
    /// Most text
    pub text_primary: Color,
    /// Dimmed text and footer hints
    pub text_secondary: Color,
    /// Borders, key hints, and the played part of the timeline
    pub accent: Color,
    pub success: Color,
    /// Accepted cuts (removed from the edited result)
    pub cut_accepted: Color,
    /// Rejected cuts (kept in the edited result)
    pub cut_rejected: Color,
    /// Cut under or just ahead of the play-head
    pub cut_active: Color,
    pub playhead: Color,
    /// Remaining preview window on the timeline
    pub preview: Color,
    /// Emit ANSI escapes in CLI text
    pub ansi: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Green,
            success: Color::Green,
            cut_accepted: Color::Red,
            cut_rejected: Color::DarkGray,
            cut_active: Color::Yellow,
            playhead: Color::White,
            preview: Color::Cyan,
            ansi: true,
        }
    }
}

impl Theme {
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Titles and section headings.
    pub fn accent_bold_style(&self) -> Style {
        self.accent_style().add_modifier(Modifier::BOLD)
    }

    /// Style for a cut marker or list row. The active highlight wins over status.
    pub fn cut_style(&self, accepted: bool, active: bool) -> Style {
        match (active, accepted) {
            (true, _) => Style::default()
                .fg(self.cut_active)
                .add_modifier(Modifier::BOLD),
            (false, true) => Style::default().fg(self.cut_accepted),
            (false, false) => Style::default().fg(self.cut_rejected),
        }
    }

    pub fn playhead_style(&self) -> Style {
        Style::default()
            .fg(self.playhead)
            .add_modifier(Modifier::BOLD)
    }

    pub fn preview_style(&self) -> Style {
        Style::default().fg(self.preview)
    }

    /// Badge style for the current playback mode.
    pub fn mode_style(&self, mode: PlaybackMode) -> Style {
        let color = match mode {
            PlaybackMode::Idle => self.text_secondary,
            PlaybackMode::Playing => self.accent,
            PlaybackMode::Scrubbing => self.cut_active,
            PlaybackMode::PreviewingSegment => self.preview,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    // CLI text

    pub fn accent_text(&self, text: &str) -> String {
        self.paint(self.accent, text)
    }

    pub fn primary_text(&self, text: &str) -> String {
        self.paint(self.text_primary, text)
    }

    pub fn secondary_text(&self, text: &str) -> String {
        self.paint(self.text_secondary, text)
    }

    pub fn success_text(&self, text: &str) -> String {
        self.paint(self.success, text)
    }

    /// Wrap `text` in the ANSI code for `color`, unless ANSI is off or the
    /// color has no basic ANSI equivalent.
    fn paint(&self, color: Color, text: &str) -> String {
        match ansi_code(color) {
            Some(code) if self.ansi => format!("\x1b[{}m{}\x1b[0m", code, text),
            _ => text.to_string(),
        }
    }
}

/// SGR foreground code for the basic terminal colors.
fn ansi_code(color: Color) -> Option<u8> {
    let code = match color {
        Color::Black => 30,
        Color::Red => 31,
        Color::Green => 32,
        Color::Yellow => 33,
        Color::Blue => 34,
        Color::Magenta => 35,
        Color::Cyan => 36,
        Color::Gray => 37,
        Color::DarkGray => 90,
        Color::White => 97,
        _ => return None,
    };
    Some(code)
}

/// Theme for the current process, honoring `NO_COLOR`.
pub fn current_theme() -> Theme {
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    Theme {
        ansi: !no_color,
        ..Theme::default()
    }
}
