//! # Application State
//!
//! Core state for the widget. Domain data only, no TUI types. Presentation
//! state (rows, scroll, menus, geometry) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── items: TodoList              // the checklist
//! ├── quote: String                // quote line text
//! ├── quote_pending: bool          // a fetch is in flight
//! ├── fallback_quote: String       // shown when a fetch fails
//! ├── now: DateTime<Local>         // last clock tick
//! └── dialog: Option<Dialog>       // modal message, if any
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use chrono::{DateTime, Local};

use crate::core::config::{CLOCK_FORMAT, WidgetConfig};
use crate::core::todo::{Item, TodoList};

/// Text shown on the quote line before the first fetch lands.
pub const QUOTE_LOADING: &str = "…";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Info,
    Error,
}

/// A modal message. While one is open, the shell ignores everything except
/// dismissal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub kind: DialogKind,
    pub title: String,
    pub message: String,
}

impl Dialog {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

pub struct App {
    pub items: TodoList,
    pub quote: String,
    pub quote_pending: bool,
    pub fallback_quote: String,
    pub now: DateTime<Local>,
    pub dialog: Option<Dialog>,
}

impl App {
    pub fn new(items: Vec<Item>, fallback_quote: String) -> Self {
        Self {
            items: TodoList::from_items(items),
            quote: QUOTE_LOADING.to_string(),
            quote_pending: false,
            fallback_quote,
            now: Local::now(),
            dialog: None,
        }
    }

    pub fn from_config(items: Vec<Item>, config: &WidgetConfig) -> Self {
        Self::new(items, config.fallback_quote.clone())
    }

    pub fn clock_text(&self) -> String {
        self.now.format(CLOCK_FORMAT).to_string()
    }
}
