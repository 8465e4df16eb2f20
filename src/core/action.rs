//! # Actions
//!
//! Everything that can happen in the widget becomes an `Action`.
//! User picks "New item"? That's `Action::NewItem`.
//! The quote task finishes? That's `Action::QuoteReceived(text)`.
//!
//! `update()` applies an action to the state and returns an `Effect` telling
//! the shell what I/O to run next. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use chrono::{DateTime, Local};
use log::{debug, info, warn};

use crate::core::config::NEW_ITEM_PLACEHOLDER;
use crate::core::state::{App, Dialog};
use crate::core::todo::ItemId;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Clock tick.
    Tick(DateTime<Local>),
    NewItem,
    ToggleItem(ItemId),
    EditItem { id: ItemId, text: String },
    /// Delete every checked item, then persist.
    DeleteCompleted,
    Save,
    /// The shell finished writing `count` items.
    Saved { count: usize },
    SaveFailed(String),
    LoadFailed(String),
    RefreshQuote,
    QuoteReceived(String),
    DismissDialog,
    Quit,
}

/// Side effects the shell performs after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Write the full list to storage.
    Save,
    /// Start a quote fetch.
    FetchQuote,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Tick(now) => {
            app.now = now;
            Effect::None
        }
        Action::NewItem => {
            let id = app.items.add(NEW_ITEM_PLACEHOLDER);
            debug!("Added item {id}");
            Effect::None
        }
        Action::ToggleItem(id) => {
            if !app.items.toggle(id) {
                warn!("Toggle ignored, item {id} no longer exists");
            }
            Effect::None
        }
        Action::EditItem { id, text } => {
            if !app.items.edit(id, &text) {
                debug!("Edit of item {id} discarded");
            }
            Effect::None
        }
        Action::DeleteCompleted => {
            let removed = app.items.delete_where(|item| item.completed);
            info!("Deleted {} completed items", removed.len());
            Effect::Save
        }
        Action::Save => Effect::Save,
        Action::Saved { count } => {
            app.dialog = Some(Dialog::info("Saved", format!("Saved {count} items.")));
            Effect::None
        }
        Action::SaveFailed(message) => {
            app.dialog = Some(Dialog::error("Save failed", message));
            Effect::None
        }
        Action::LoadFailed(message) => {
            app.dialog = Some(Dialog::error("Load failed", message));
            Effect::None
        }
        Action::RefreshQuote => {
            if app.quote_pending {
                debug!("Quote fetch already in flight");
                return Effect::None;
            }
            app.quote_pending = true;
            Effect::FetchQuote
        }
        Action::QuoteReceived(text) => {
            app.quote = text;
            app.quote_pending = false;
            Effect::None
        }
        Action::DismissDialog => {
            app.dialog = None;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
