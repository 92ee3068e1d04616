//! # Actions
//!
//! Everything that can happen to the overlay stack becomes an `Action`.
//! User presses Enter? That's `Action::Key(OverlayKey::Confirm)`.
//! A confirm callback fires? That's `Action::Chosen(value)`.
//!
//! `update()` takes ownership of the state, applies one action, and hands
//! the state back together with an `Effect` for the event loop.
//!
//! ```text
//! App + Action  →  update()  →  (App, Effect)
//! ```
//!
//! The stack is never global: whoever calls `update` holds it.

use log::{debug, info};

use crate::core::overlay::OverlayKey;
use crate::core::state::{App, Choice};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A classified key for the active overlay.
    Key(OverlayKey),
    /// Terminal resized.
    Resize(u16, u16),
    /// Sent by an overlay's confirm callback.
    Chosen(String),
    OpenMenu(String),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(mut app: App, action: Action) -> (App, Effect) {
    debug!("update: {:?}", action);
    let effect = match action {
        Action::Key(key) => handle_key(&mut app, key),
        Action::Resize(width, height) => {
            app.viewport = (width, height);
            for overlay in &mut app.overlays {
                overlay.set_size(width, height);
            }
            Effect::None
        }
        Action::Chosen(value) => {
            if app.last_closed_from_menu && app.find_menu(&value).is_some() {
                info!("Opening submenu '{}'", value);
                app.open_menu(&value);
                Effect::None
            } else {
                // The submitting overlay was already popped; its title is the
                // most recently closed one.
                let menu = app.last_closed_title.take().unwrap_or_default();
                info!("Selected '{}' from '{}'", value, menu);
                app.selection = Some(Choice { menu, value });
                app.clear_overlays();
                Effect::Quit
            }
        }
        Action::OpenMenu(name) => {
            if !app.open_menu(&name) {
                app.status_message = format!("Unknown menu: {}", name);
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    };
    (app, effect)
}

fn handle_key(app: &mut App, key: OverlayKey) -> Effect {
    let Some(top) = app.top_mut() else {
        return Effect::Quit;
    };
    if !top.handle_key(key) {
        return Effect::None;
    }

    let Some(closed) = app.pop() else {
        return Effect::None;
    };

    if closed.is_submitted()
        && let Some(value) = closed.selected_option()
    {
        // Choosing a submenu keeps a fresh copy of this overlay underneath,
        // so cancelling the submenu comes back here.
        if app.last_closed_from_menu && app.find_menu(value).is_some() {
            app.push_overlay(
                closed.title().to_string(),
                closed.options().to_vec(),
                closed.selected_index(),
                true,
            );
        }
        // `Chosen` from the callback follows.
        return Effect::None;
    }
    if app.overlays.is_empty() {
        info!("Last overlay closed without a choice");
        Effect::Quit
    } else {
        Effect::None
    }
}
