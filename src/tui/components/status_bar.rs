//! # StatusBar Component
//!
//! Bottom line showing where the user is in the overlay stack and any
//! transient status message.
//!
//! ## Stateless Component
//!
//! StatusBar is purely presentational: it receives all data as props and
//! has no internal state.
//!
//! ```rust,ignore
//! let mut status_bar = StatusBar::new(
//!     vec!["Main".to_string(), "Tools".to_string()],
//!     app.status_message.clone(),
//! );
//! status_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"picker: Main › Tools | Unknown menu: x"`
//! 2. **Default**: `"picker: Main › Tools"`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use crate::tui::component::Component;
use crate::tui::theme::{STYLE_HINT, STYLE_STATUS};

const BREADCRUMB_SEPARATOR: &str = " › ";

/// Bottom status line.
pub struct StatusBar {
    /// Titles of the stacked overlays, bottom first.
    pub breadcrumbs: Vec<String>,
    /// Status message (e.g., "Unknown menu: x")
    pub status_message: String,
}

impl StatusBar {
    pub fn new(breadcrumbs: Vec<String>, status_message: String) -> Self {
        Self {
            breadcrumbs,
            status_message,
        }
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let path = format!("picker: {}", self.breadcrumbs.join(BREADCRUMB_SEPARATOR));
        let mut spans = vec![Span::styled(path, STYLE_HINT)];
        if !self.status_message.is_empty() {
            spans.push(Span::styled(" | ", STYLE_HINT));
            spans.push(Span::styled(self.status_message.clone(), STYLE_STATUS));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
