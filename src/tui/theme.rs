//! Overlay colors and styles.
//!
//! One configurable accent drives the panel: border, title and the
//! highlighted row. Everything else is fixed.

use std::str::FromStr;

use log::warn;
use ratatui::style::{Color, Modifier, Style};

pub const FALLBACK_ACCENT: Color = Color::Magenta;

/// Unselected option text.
pub const STYLE_OPTION: Style = Style::new().fg(Color::Gray);

/// Key binding hint line.
pub const STYLE_HINT: Style = Style::new().fg(Color::DarkGray);

/// Status line under the panel.
pub const STYLE_STATUS: Style = Style::new().fg(Color::Yellow);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: FALLBACK_ACCENT,
        }
    }
}

impl Theme {
    /// Parse an accent like `"cyan"`, `"light-blue"` or `"#ff8800"`.
    /// Unknown names fall back to the default accent.
    pub fn from_accent(accent: &str) -> Self {
        match Color::from_str(accent) {
            Ok(color) => Self { accent: color },
            Err(_) => {
                warn!("Unknown accent color '{}', using default", accent);
                Self::default()
            }
        }
    }

    pub fn border(&self) -> Style {
        Style::new().fg(self.accent)
    }

    pub fn title(&self) -> Style {
        Style::new().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// The highlighted row: dark text on the accent.
    pub fn selected(&self) -> Style {
        Style::new()
            .fg(Color::Black)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }
}
