//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver};

use crate::core::action::{Action, Effect, update};
use crate::core::config::MenuEntry;
use crate::core::overlay::SelectionOverlay;
use crate::core::state::App;

/// An overlay titled "Pick one" with the given options.
pub fn overlay(options: &[&str]) -> SelectionOverlay {
    SelectionOverlay::new("Pick one", options.iter().map(|s| s.to_string()).collect())
}

/// A callback that records every value it receives.
pub fn recording_callback() -> (Rc<RefCell<Vec<String>>>, impl FnOnce(&str) + 'static) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = calls.clone();
    (calls, move |value: &str| sink.borrow_mut().push(value.to_string()))
}

pub fn menu(name: &str, title: Option<&str>, options: &[&str]) -> MenuEntry {
    MenuEntry {
        name: name.to_string(),
        title: title.map(str::to_string),
        options: options.iter().map(|s| s.to_string()).collect(),
    }
}

/// Creates a test App along with the receiving end of its outbox.
pub fn test_app(menus: Vec<MenuEntry>) -> (App, Receiver<Action>) {
    let (tx, rx) = mpsc::channel();
    (App::new(menus, tx), rx)
}

/// Feed every queued callback action back through `update`, like the event loop does.
pub fn drain(mut app: App, rx: &Receiver<Action>) -> (App, Effect) {
    let mut effect = Effect::None;
    while let Ok(action) = rx.try_recv() {
        let (next, e) = update(app, action);
        app = next;
        if e == Effect::Quit {
            effect = Effect::Quit;
        }
    }
    (app, effect)
}
