//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the active
//! overlay, and translates keyboard events into core `Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! ```text
//! draw → poll key → update(app, Action::Key) → drain outbox → draw ...
//! ```
//!
//! Confirm callbacks run inside `update` and only enqueue
//! `Action::Chosen` on the outbox. The loop drains it after every batch of
//! key events, on the same thread, and stops once `update` says `Quit`.
//! There is no animation, so the loop sleeps in `poll` until input arrives.
//!
//! The panel is drawn on stderr. Stdout carries only the printed choice, so
//! `picker a b | jq` and `choice=$(picker a b)` still show the panel.

mod component;
pub mod components;
pub mod event;
pub mod theme;
mod ui;

use log::{debug, info};
use std::io::{self, Stderr, Write, stderr};
use std::sync::mpsc;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Choice};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout, to_overlay_key};
use crate::tui::theme::Theme;

pub use component::Component;

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core logic)
pub struct TuiState {
    pub theme: Theme,
    pub vim_keys: bool,
}

impl TuiState {
    pub fn new(theme: Theme, vim_keys: bool) -> Self {
        Self { theme, vim_keys }
    }
}

type PickerTerminal = Terminal<CrosstermBackend<Stderr>>;

/// Raw mode, alternate screen and hidden cursor, undone on drop.
struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        // From here on, an early return still restores the terminal.
        let guard = Self;
        enter_screen(&mut stderr())?;
        Ok(guard)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn enter_screen(out: &mut impl Write) -> io::Result<()> {
    execute!(out, EnterAlternateScreen, Hide)
}

fn leave_screen(out: &mut impl Write) -> io::Result<()> {
    execute!(out, Show, LeaveAlternateScreen)
}

/// Best effort; safe to call more than once.
fn restore_terminal() {
    let _ = leave_screen(&mut stderr());
    let _ = disable_raw_mode();
}

/// Restore the terminal before the panic message is printed.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));
}

/// Push the first overlay: direct options win, then the start menu.
/// Returns `false` if there is nothing to show.
pub fn open_initial(app: &mut App, config: &ResolvedConfig) -> bool {
    if !config.options.is_empty() {
        app.open(config.title.clone(), config.options.clone());
        return true;
    }
    match &config.start_menu {
        Some(name) => {
            let opened = app.open_menu(name);
            if !opened {
                log::warn!("Menu '{}' is not defined in the config", name);
            }
            opened
        }
        None => false,
    }
}

/// Run the picker until the user chooses or backs out of the last overlay.
///
/// `actions` is the receiving end of the app's outbox.
pub fn run(
    app: App,
    config: &ResolvedConfig,
    actions: mpsc::Receiver<Action>,
) -> std::io::Result<Option<Choice>> {
    let tui = TuiState::new(Theme::from_accent(&config.accent), config.vim_keys);

    install_panic_hook();
    let guard = TerminalModeGuard::new()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stderr()))?;

    let result = event_loop(&mut terminal, app, &tui, &actions);

    drop(guard);
    result
}

fn event_loop(
    terminal: &mut PickerTerminal,
    mut app: App,
    tui: &TuiState,
    actions: &mpsc::Receiver<Action>,
) -> std::io::Result<Option<Choice>> {
    let size = terminal.size()?;
    let (next, _) = update(app, Action::Resize(size.width, size.height));
    app = next;

    info!("Event loop started with {} overlay(s)", app.overlays.len());

    loop {
        terminal.draw(|f| ui::draw_ui(f, &app, tui))?;

        let mut should_quit = false;
        let first_event = poll_event_timeout(IDLE_POLL)?;

        // Process first event + drain all pending events before next draw
        let mut pending = first_event;
        while let Some(event) = pending {
            let action = match &event {
                TuiEvent::ForceQuit => Some(Action::Quit),
                TuiEvent::Resize(width, height) => Some(Action::Resize(*width, *height)),
                other => to_overlay_key(other, tui.vim_keys).map(Action::Key),
            };

            if let Some(action) = action {
                let (next, effect) = update(app, action);
                app = next;
                if effect == Effect::Quit {
                    should_quit = true;
                }
            }

            // Confirm callbacks report through the outbox
            while let Ok(action) = actions.try_recv() {
                debug!("Event loop received: {:?}", action);
                let (next, effect) = update(app, action);
                app = next;
                if effect == Effect::Quit {
                    should_quit = true;
                }
            }

            if should_quit {
                break;
            }
            pending = poll_event_immediate()?;
        }

        if should_quit {
            break;
        }
    }

    info!("Event loop finished, selection: {:?}", app.selection);
    Ok(app.selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{menu, test_app};

    fn config(options: &[&str], start_menu: Option<&str>) -> ResolvedConfig {
        ResolvedConfig {
            title: "Title".to_string(),
            vim_keys: true,
            accent: "magenta".to_string(),
            options: options.iter().map(|s| s.to_string()).collect(),
            start_menu: start_menu.map(str::to_string),
            menus: vec![],
        }
    }

    #[test]
    fn test_open_initial_prefers_direct_options() {
        let (mut app, _rx) = test_app(vec![menu("main", None, &["x"])]);
        assert!(open_initial(&mut app, &config(&["a", "b"], Some("main"))));
        assert_eq!(app.top().unwrap().title(), "Title");
        assert_eq!(app.overlays.len(), 1);
    }

    #[test]
    fn test_open_initial_falls_back_to_menu() {
        let (mut app, _rx) = test_app(vec![menu("main", Some("Main"), &["x"])]);
        assert!(open_initial(&mut app, &config(&[], Some("main"))));
        assert_eq!(app.top().unwrap().title(), "Main");
    }

    #[test]
    fn test_screen_setup_goes_to_the_given_writer() {
        let mut out = Vec::new();
        enter_screen(&mut out).unwrap();
        let entered = String::from_utf8(out).unwrap();
        assert!(entered.contains("\x1b[?1049h"));
        assert!(entered.contains("\x1b[?25l"));

        let mut out = Vec::new();
        leave_screen(&mut out).unwrap();
        let left = String::from_utf8(out).unwrap();
        assert!(left.contains("\x1b[?25h"));
        assert!(left.contains("\x1b[?1049l"));
    }

    #[test]
    fn test_open_initial_nothing_to_show() {
        let (mut app, _rx) = test_app(vec![]);
        assert!(!open_initial(&mut app, &config(&[], None)));
        assert!(!open_initial(&mut app, &config(&[], Some("missing"))));
        assert!(app.overlays.is_empty());
    }
}
