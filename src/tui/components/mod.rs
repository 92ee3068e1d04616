//! # TUI Components
//!
//! UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `StatusBar`: bottom line with the overlay breadcrumbs and status
//!
//! ### Transient Wrappers
//!
//! - `SelectionView`: borrows a `SelectionOverlay` for one frame and draws
//!   it as a bordered panel. The overlay's state lives in core.
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props" (constructor arguments or
//! fields), not by reaching into global state.
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! SelectionView::new(overlay, theme, vim_keys).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs         (this file)
//! ├── selection.rs   (Selection overlay panel)
//! └── status_bar.rs  (Bottom status line)
//! ```

pub mod selection;
mod status_bar;

pub use selection::SelectionView;
pub use status_bar::StatusBar;
