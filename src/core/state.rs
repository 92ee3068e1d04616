//! # Application State
//!
//! Everything the host needs to drive a stack of selection overlays.
//! No terminal types here; presentation lives in the `tui` module.
//!
//! ```text
//! App
//! ├── overlays: Vec<SelectionOverlay>  // modal stack, last = active
//! ├── from_menu: Vec<bool>             // parallel to overlays: opened from a menu?
//! ├── menus: Vec<MenuEntry>            // named option lists from config
//! ├── outbox: Sender<Action>           // where confirm callbacks report
//! ├── selection: Option<Choice>        // final answer, once made
//! ├── last_closed_title: Option<String> // title of the overlay that just closed
//! ├── last_closed_from_menu: bool      // ...and whether it came from a menu
//! ├── status_message: String           // shown under the overlay
//! └── viewport: (u16, u16)             // last known terminal size
//! ```
//!
//! State changes only happen through `update(app, action)` in action.rs.
//! The overlays never see the stack or the outbox; the confirm callback
//! is a closure that captures a sender and nothing else.
//!
//! Only overlays opened from a configured menu can lead to other menus.
//! Ad-hoc options (CLI args, stdin) are always leaves, even when one of them
//! happens to share a menu's name.

use std::sync::mpsc::Sender;

use log::{debug, warn};
use serde::Serialize;

use crate::core::action::Action;
use crate::core::config::MenuEntry;
use crate::core::overlay::SelectionOverlay;

/// The confirmed answer: which overlay it came from and the chosen value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub menu: String,
    pub value: String,
}

pub struct App {
    pub overlays: Vec<SelectionOverlay>,
    from_menu: Vec<bool>,
    pub menus: Vec<MenuEntry>,
    pub outbox: Sender<Action>,
    pub selection: Option<Choice>,
    pub last_closed_title: Option<String>,
    pub last_closed_from_menu: bool,
    pub status_message: String,
    pub viewport: (u16, u16),
}

impl App {
    pub fn new(menus: Vec<MenuEntry>, outbox: Sender<Action>) -> Self {
        Self {
            overlays: Vec::new(),
            from_menu: Vec::new(),
            menus,
            outbox,
            selection: None,
            last_closed_title: None,
            last_closed_from_menu: false,
            status_message: String::new(),
            viewport: (0, 0),
        }
    }

    /// Push a new overlay whose confirm callback reports back through the outbox.
    pub fn open(&mut self, title: impl Into<String>, options: Vec<String>) {
        self.open_at(title, options, 0);
    }

    /// Like [`App::open`], with the cursor starting on `index`.
    pub fn open_at(&mut self, title: impl Into<String>, options: Vec<String>, index: usize) {
        self.push_overlay(title, options, index, false);
    }

    pub(crate) fn push_overlay(
        &mut self,
        title: impl Into<String>,
        options: Vec<String>,
        index: usize,
        from_menu: bool,
    ) {
        let mut overlay = SelectionOverlay::new(title, options).with_selected(index);
        overlay.set_size(self.viewport.0, self.viewport.1);

        let outbox = self.outbox.clone();
        overlay.set_on_submit(move |value| {
            if outbox.send(Action::Chosen(value.to_string())).is_err() {
                warn!("Failed to report choice '{}': receiver dropped", value);
            }
        });

        debug!(
            "Opening overlay '{}' ({} options, depth {})",
            overlay.title(),
            overlay.options().len(),
            self.overlays.len() + 1
        );
        self.from_menu.resize(self.overlays.len(), false);
        self.overlays.push(overlay);
        self.from_menu.push(from_menu);
    }

    /// Pop the active overlay, remembering its title and origin for the
    /// `Chosen` that may follow.
    pub fn pop(&mut self) -> Option<SelectionOverlay> {
        let overlay = self.overlays.pop()?;
        let depth = self.overlays.len();
        self.last_closed_from_menu = self.from_menu.get(depth).copied().unwrap_or(false);
        self.from_menu.truncate(depth);
        self.last_closed_title = Some(overlay.title().to_string());
        Some(overlay)
    }

    pub fn clear_overlays(&mut self) {
        self.overlays.clear();
        self.from_menu.clear();
    }

    /// Whether the overlay at `depth` was opened from a configured menu.
    pub fn is_menu_overlay(&self, depth: usize) -> bool {
        self.from_menu.get(depth).copied().unwrap_or(false)
    }

    /// Open a configured menu by name. Returns `false` if no such menu exists.
    pub fn open_menu(&mut self, name: &str) -> bool {
        match self.find_menu(name) {
            Some(menu) => {
                let title = menu.title.clone().unwrap_or_else(|| menu.name.clone());
                let options = menu.options.clone();
                self.push_overlay(title, options, 0, true);
                true
            }
            None => false,
        }
    }

    pub fn find_menu(&self, name: &str) -> Option<&MenuEntry> {
        self.menus.iter().find(|m| m.name == name)
    }

    /// The active (topmost) overlay.
    pub fn top(&self) -> Option<&SelectionOverlay> {
        self.overlays.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut SelectionOverlay> {
        self.overlays.last_mut()
    }
}
