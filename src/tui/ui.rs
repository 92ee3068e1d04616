use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{SelectionView, StatusBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

/// Draw one frame: the active overlay centered above a one-line status bar.
///
/// Only the top of the stack is drawn; overlays below it are modal-blocked.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Min(0), Length(1)]);
    let [main_area, status_area] = layout.areas(frame.area());

    if let Some(overlay) = app.top() {
        SelectionView::new(overlay, tui.theme, tui.vim_keys).render(frame, main_area);
    }

    let breadcrumbs = app
        .overlays
        .iter()
        .map(|o| o.title().to_string())
        .collect();
    StatusBar::new(breadcrumbs, app.status_message.clone()).render(frame, status_area);
}
