//! # Core Application Logic
//!
//! The selection overlay and the host state that stacks overlays.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Overlay (component)  │
//!                    │  • State (the stack)    │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`overlay`]: `SelectionOverlay`, the single-choice state machine
//! - [`state`]: the `App` struct, owner of the overlay stack
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: TOML config loading and resolution

pub mod action;
pub mod config;
pub mod overlay;
pub mod state;

pub use overlay::{OverlayKey, SelectionOverlay};
