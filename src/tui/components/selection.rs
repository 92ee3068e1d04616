//! # Selection Panel Component
//!
//! Draws a [`SelectionOverlay`] as a bordered, padded panel centered in the
//! available area:
//!
//! ```text
//! ╭──────────────────────────────────────────────────╮
//! │                                                  │
//! │  Pick one                                        │
//! │                                                  │
//! │    A                                             │
//! │  > B                                             │
//! │    C                                             │
//! │                                                  │
//! │  ↑↓/jk: navigate • enter: select • esc: cancel   │
//! │                                                  │
//! ╰──────────────────────────────────────────────────╯
//! ```
//!
//! Follows the transient wrapper pattern: `SelectionView` is created each
//! frame with a borrowed overlay. Rendering reads the overlay and never
//! mutates it, so a closed overlay can still be drawn.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph, Widget};

use crate::core::overlay::SelectionOverlay;
use crate::tui::component::Component;
use crate::tui::theme::{STYLE_HINT, STYLE_OPTION, Theme};

const PADDING_X: u16 = 2;
const PADDING_Y: u16 = 1;

const SELECTED_MARKER: &str = "> ";
const UNSELECTED_MARKER: &str = "  ";

const HINT_VIM: &str = "↑↓/jk: navigate • enter: select • esc: cancel";
const HINT_ARROWS: &str = "↑↓: navigate • enter: select • esc: cancel";

/// Transient render wrapper for a selection overlay.
pub struct SelectionView<'a> {
    overlay: &'a SelectionOverlay,
    theme: Theme,
    vim_keys: bool,
}

impl<'a> SelectionView<'a> {
    pub fn new(overlay: &'a SelectionOverlay, theme: Theme, vim_keys: bool) -> Self {
        Self {
            overlay,
            theme,
            vim_keys,
        }
    }

    /// Panel content: title, options with markers, key hint.
    pub fn text(&self) -> Text<'static> {
        let mut lines = Vec::with_capacity(self.overlay.options().len() + 4);

        lines.push(Line::styled(
            self.overlay.title().to_string(),
            self.theme.title(),
        ));
        lines.push(Line::default());

        // An empty list has no valid index, so no row is highlighted.
        let selected = self
            .overlay
            .selected_option()
            .map(|_| self.overlay.selected_index());

        for (i, option) in self.overlay.options().iter().enumerate() {
            let line = if selected == Some(i) {
                Line::from(vec![
                    Span::styled(SELECTED_MARKER, self.theme.border()),
                    Span::styled(option.clone(), self.theme.selected()),
                ])
            } else {
                Line::from(vec![
                    Span::raw(UNSELECTED_MARKER),
                    Span::styled(option.clone(), STYLE_OPTION),
                ])
            };
            lines.push(line);
        }

        lines.push(Line::default());
        let hint = if self.vim_keys { HINT_VIM } else { HINT_ARROWS };
        lines.push(Line::styled(hint, STYLE_HINT));

        Text::from(lines)
    }

    /// Natural (width, height) of the panel, borders and padding included.
    /// Saturates at `u16::MAX`; `panel_area` clamps it to the screen anyway.
    pub fn panel_size(&self) -> (u16, u16) {
        let text = self.text();
        let width = u16::try_from(text.width())
            .unwrap_or(u16::MAX)
            .saturating_add(2 * PADDING_X + 2);
        let height = u16::try_from(text.height())
            .unwrap_or(u16::MAX)
            .saturating_add(2 * PADDING_Y + 2);
        (width, height)
    }

    /// Where the panel lands inside `area`: centered, clamped to fit.
    pub fn panel_area(&self, area: Rect) -> Rect {
        let (width, height) = self.panel_size();
        let [row] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        let [panel] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(row);
        panel
    }

    fn block(&self) -> Block<'static> {
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border())
            .padding(Padding::symmetric(PADDING_X, PADDING_Y))
    }
}

impl Widget for &SelectionView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let panel = self.panel_area(area);
        Clear.render(panel, buf);
        Paragraph::new(self.text())
            .block(self.block())
            .render(panel, buf);
    }
}

impl Component for SelectionView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(&*self, area);
    }
}
