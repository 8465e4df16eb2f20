//! # Item List Model
//!
//! The ordered checklist the widget displays.
//!
//! ```text
//! TodoList
//! └── items: Vec<Item>
//!     ├── id: ItemId        // session-only, never persisted
//!     ├── completed: bool
//!     └── content: String
//! ```
//!
//! List order is display order and new items always go last. Every item gets
//! an `ItemId` when it enters the list, so views and delete sets can refer to
//! an item without depending on its position.

use std::fmt;

use uuid::Uuid;

/// Stable opaque handle for an item within one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub completed: bool,
    pub content: String,
}

impl Item {
    pub fn new(completed: bool, content: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            completed,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct TodoList {
    items: Vec<Item>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Append an open item and return its id.
    pub fn add(&mut self, content: impl Into<String>) -> ItemId {
        let item = Item::new(false, content);
        let id = item.id;
        self.items.push(item);
        id
    }

    /// Flip the completion flag. Returns false if `id` no longer exists.
    pub fn toggle(&mut self, id: ItemId) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.completed = !item.completed;
                true
            }
            None => false,
        }
    }

    /// Replace the content with the trimmed `new_content`.
    ///
    /// Empty or whitespace-only text leaves the item untouched. Returns true
    /// only when the content was replaced.
    pub fn edit(&mut self, id: ItemId, new_content: &str) -> bool {
        let trimmed = new_content.trim();
        if trimmed.is_empty() {
            return false;
        }
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.content = trimmed.to_string();
                true
            }
            None => false,
        }
    }

    /// Remove every item matching `predicate` in one pass, keeping the order
    /// of the survivors. Returns the ids that were removed.
    pub fn delete_where<F>(&mut self, mut predicate: F) -> Vec<ItemId>
    where
        F: FnMut(&Item) -> bool,
    {
        let mut removed = Vec::new();
        self.items.retain(|item| {
            if predicate(item) {
                removed.push(item.id);
                false
            } else {
                true
            }
        });
        removed
    }
}
