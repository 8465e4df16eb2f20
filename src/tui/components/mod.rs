//! # TUI Components
//!
//! Everything drawn inside (or over) the widget panel.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `Clock`: date/time line
//! - `QuoteLine`: wrapped quote text
//! - `DialogView`: modal message box
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `Checklist`: scrollable rows with row bindings and layout cache
//! - `InlineEditor`: single-line field swapped in while editing a row
//! - `ContextMenu`: five-action popup
//!
//! Stateful components follow the persistent state + transient wrapper
//! pattern: the `*State` struct lives in `TuiState`, and a wrapper borrowing
//! it is built each frame to render.
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── clock.rs
//! ├── quote_line.rs
//! ├── checklist.rs
//! ├── inline_editor.rs
//! ├── context_menu.rs
//! └── dialog.rs
//! ```

pub mod checklist;
pub mod clock;
pub mod context_menu;
pub mod dialog;
pub mod inline_editor;
pub mod quote_line;

pub use checklist::{Checklist, ChecklistState};
pub use clock::Clock;
pub use context_menu::{ContextMenu, ContextMenuState, MenuAction, MenuEvent};
pub use dialog::DialogView;
pub use inline_editor::{EditorEvent, InlineEditor};
pub use quote_line::QuoteLine;
