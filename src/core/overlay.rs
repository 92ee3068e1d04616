//! # Selection Overlay
//!
//! A modal, single-choice list. The user moves a cursor with up/down (or
//! `k`/`j`) and either confirms the highlighted option or cancels.
//!
//! ```text
//!            ┌──────── Up / Down / Other ────────┐
//!            ▼                                   │
//!        ┌────────┐  Confirm (callback runs)  ┌────────┐
//!        │  Open  │ ────────────────────────▶ │ Closed │
//!        └────────┘  Cancel                   └────────┘
//! ```
//!
//! The overlay knows nothing about terminals or the view stack that holds
//! it. Keys arrive already classified as [`OverlayKey`]; the host decides
//! what to do once `handle_key` reports the overlay closed.

use std::fmt;

use log::debug;

/// Classified key input. Raw terminal encodings are mapped to these at the
/// TUI boundary, so the state machine never sees them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKey {
    Up,
    Down,
    Confirm,
    Cancel,
    VimUp,
    VimDown,
    Other,
}

/// Called with the chosen option when the user confirms.
pub type SubmitCallback = Box<dyn FnOnce(&str)>;

pub struct SelectionOverlay {
    title: String,
    options: Vec<String>,
    selected_index: usize,
    submitted: bool,
    canceled: bool,
    on_submit: Option<SubmitCallback>,
    viewport: (u16, u16),
}

impl SelectionOverlay {
    /// An empty `options` list is allowed; it just has nothing to select.
    pub fn new(title: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            title: title.into(),
            options,
            selected_index: 0,
            submitted: false,
            canceled: false,
            on_submit: None,
            viewport: (0, 0),
        }
    }

    /// Start with the cursor on `index`, clamped to the last option.
    pub fn with_selected(mut self, index: usize) -> Self {
        self.selected_index = index.min(self.options.len().saturating_sub(1));
        self
    }

    /// Attach the confirm callback. Replaces any previous one.
    pub fn set_on_submit(&mut self, callback: impl FnOnce(&str) + 'static) {
        self.on_submit = Some(Box::new(callback));
    }

    /// Record the advisory viewport size. Layout does not depend on it.
    pub fn set_size(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);
    }

    /// Process one key. Returns `true` when the host should close the overlay.
    ///
    /// Keys delivered after the overlay closed are ignored and keep
    /// reporting `true`.
    pub fn handle_key(&mut self, key: OverlayKey) -> bool {
        if self.is_closed() {
            debug!("Ignoring {:?} on closed overlay '{}'", key, self.title);
            return true;
        }

        match key {
            OverlayKey::Up | OverlayKey::VimUp => {
                self.selected_index = self.selected_index.saturating_sub(1);
                false
            }
            OverlayKey::Down | OverlayKey::VimDown => {
                if self.selected_index + 1 < self.options.len() {
                    self.selected_index += 1;
                }
                false
            }
            OverlayKey::Confirm => {
                self.submitted = true;
                let callback = self.on_submit.take();
                match (callback, self.options.get(self.selected_index)) {
                    (Some(callback), Some(option)) => {
                        debug!("Overlay '{}' submitted '{}'", self.title, option);
                        callback(option.as_str());
                    }
                    (None, Some(option)) => {
                        debug!("Overlay '{}' submitted '{}' (no callback)", self.title, option);
                    }
                    (_, None) => {
                        debug!("Overlay '{}' submitted with nothing selected", self.title);
                    }
                }
                true
            }
            OverlayKey::Cancel => {
                debug!("Overlay '{}' canceled", self.title);
                self.canceled = true;
                true
            }
            OverlayKey::Other => false,
        }
    }

    /// The option under the cursor, or `None` if there is none.
    pub fn selected_option(&self) -> Option<&str> {
        self.options.get(self.selected_index).map(String::as_str)
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn is_canceled(&self) -> bool {
        self.canceled
    }

    pub fn is_closed(&self) -> bool {
        self.submitted || self.canceled
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn viewport(&self) -> (u16, u16) {
        self.viewport
    }
}

impl fmt::Debug for SelectionOverlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionOverlay")
            .field("title", &self.title)
            .field("options", &self.options)
            .field("selected_index", &self.selected_index)
            .field("submitted", &self.submitted)
            .field("canceled", &self.canceled)
            .field("has_callback", &self.on_submit.is_some())
            .field("viewport", &self.viewport)
            .finish()
    }
}
