use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::core::overlay::OverlayKey;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    CursorUp,
    CursorDown,
    Submit,
    Escape,
    InputChar(char),
    Resize(u16, u16),
    ForceQuit, // Ctrl+C
}

/// Poll for an event with timeout
pub fn poll_event_timeout(timeout: std::time::Duration) -> std::io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(classify(event::read()?))
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> std::io::Result<Option<TuiEvent>> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Translate a raw crossterm event. Key releases and anything unmapped yield `None`.
pub fn classify(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            if key_event.kind == KeyEventKind::Release {
                return None;
            }
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                _ => None,
            }
        }
        Event::Resize(width, height) => Some(TuiEvent::Resize(width, height)),
        _ => None,
    }
}

/// Normalize a TUI event into the overlay's key vocabulary.
///
/// `j`/`k` only navigate when `vim_keys` is on; otherwise they are `Other`
/// like any character. Events that are not keys at all yield `None`.
pub fn to_overlay_key(event: &TuiEvent, vim_keys: bool) -> Option<OverlayKey> {
    match event {
        TuiEvent::CursorUp => Some(OverlayKey::Up),
        TuiEvent::CursorDown => Some(OverlayKey::Down),
        TuiEvent::Submit => Some(OverlayKey::Confirm),
        TuiEvent::Escape => Some(OverlayKey::Cancel),
        TuiEvent::InputChar('k') if vim_keys => Some(OverlayKey::VimUp),
        TuiEvent::InputChar('j') if vim_keys => Some(OverlayKey::VimDown),
        TuiEvent::InputChar(_) => Some(OverlayKey::Other),
        TuiEvent::Resize(..) | TuiEvent::ForceQuit => None,
    }
}
