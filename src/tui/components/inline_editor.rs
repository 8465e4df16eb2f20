//! # InlineEditor Component
//!
//! Single-line text field that temporarily replaces a row's label while the
//! item is being edited.
//!
//! ## Lifecycle
//!
//! - Opened seeded with the item's current content, cursor at the end.
//! - Emits `EditorEvent::Commit` on Enter or Esc. The parent also commits when
//!   the field loses focus (a click elsewhere, opening the menu).
//! - The parent hands the committed text to the model, which decides whether
//!   to keep it. The editor never validates.
//!
//! Long text scrolls horizontally so the cursor stays visible.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::todo::ItemId;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// High-level events emitted by the InlineEditor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// Editing finished with this text
    Commit(String),
    /// Buffer or cursor changed
    Changed,
}

pub struct InlineEditor {
    /// Item being edited
    pub id: ItemId,
    pub buffer: String,
    /// Buffer as first opened, to tell a real edit from a no-op
    opened_with: String,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    cursor: usize,
    /// First visible display column
    scroll: u16,
}

impl InlineEditor {
    pub fn new(id: ItemId, seed: &str) -> Self {
        // The field is single-line; embedded newlines are flattened.
        let buffer = seed.replace(['\r', '\n'], " ");
        let cursor = buffer.len();
        Self {
            id,
            opened_with: buffer.clone(),
            buffer,
            cursor,
            scroll: 0,
        }
    }

    /// True once the text differs from what the field opened with.
    pub fn is_modified(&self) -> bool {
        self.buffer != self.opened_with
    }

    /// Display column of the cursor within the whole buffer.
    pub fn cursor_column(&self) -> u16 {
        self.buffer[..self.cursor].width() as u16
    }

    /// Slice of the buffer visible in a field `width` columns wide, along with
    /// the cursor's column inside that slice. Adjusts the horizontal scroll.
    pub fn visible(&mut self, width: u16) -> (String, u16) {
        if width == 0 {
            return (String::new(), 0);
        }

        let cursor_col = self.cursor_column();
        if cursor_col < self.scroll {
            self.scroll = cursor_col;
        } else if cursor_col >= self.scroll + width {
            self.scroll = cursor_col - width + 1;
        }

        let mut col: u16 = 0;
        let mut visible = String::new();
        for c in self.buffer.chars() {
            let w = c.width().unwrap_or(0) as u16;
            if col >= self.scroll && col + w <= self.scroll + width {
                visible.push(c);
            }
            col += w;
            if col >= self.scroll + width {
                break;
            }
        }

        (visible, cursor_col - self.scroll)
    }

    fn insert_str(&mut self, text: &str) {
        let flat = text.replace(['\r', '\n'], " ");
        self.buffer.insert_str(self.cursor, &flat);
        self.cursor += flat.len();
    }
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

impl EventHandler for InlineEditor {
    type Event = EditorEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Submit | TuiEvent::Escape => Some(EditorEvent::Commit(self.buffer.clone())),
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(EditorEvent::Changed)
            }
            TuiEvent::Paste(text) => {
                self.insert_str(text);
                Some(EditorEvent::Changed)
            }
            TuiEvent::Backspace => (self.cursor > 0).then(|| {
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                EditorEvent::Changed
            }),
            TuiEvent::Delete => (self.cursor < self.buffer.len()).then(|| {
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                EditorEvent::Changed
            }),
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                EditorEvent::Changed
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                EditorEvent::Changed
            }),
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                EditorEvent::Changed
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                EditorEvent::Changed
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor(seed: &str) -> InlineEditor {
        InlineEditor::new(ItemId::new(), seed)
    }

    #[test]
    fn test_seeded_with_cursor_at_end() {
        let ed = editor("milk");
        assert_eq!(ed.buffer, "milk");
        assert_eq!(ed.cursor_column(), 4);
    }

    #[test]
    fn test_newlines_are_flattened() {
        let ed = editor("two\nlines");
        assert_eq!(ed.buffer, "two lines");
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut ed = editor("ab");
        assert_eq!(ed.handle_event(&TuiEvent::InputChar('c')), Some(EditorEvent::Changed));
        assert_eq!(ed.buffer, "abc");
        ed.handle_event(&TuiEvent::CursorLeft);
        ed.handle_event(&TuiEvent::Backspace);
        assert_eq!(ed.buffer, "ac");
        ed.handle_event(&TuiEvent::CursorHome);
        assert_eq!(ed.handle_event(&TuiEvent::Backspace), None);
        ed.handle_event(&TuiEvent::Delete);
        assert_eq!(ed.buffer, "c");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut ed = editor("日本");
        ed.handle_event(&TuiEvent::Backspace);
        assert_eq!(ed.buffer, "日");
        assert_eq!(ed.cursor_column(), 2);
    }

    #[test]
    fn test_modified_tracks_changes_against_opening_text() {
        let mut ed = editor("two\nlines");
        assert_eq!(ed.buffer, "two lines");
        assert!(!ed.is_modified());

        ed.handle_event(&TuiEvent::InputChar('!'));
        assert!(ed.is_modified());
        ed.handle_event(&TuiEvent::Backspace);
        assert!(!ed.is_modified());
    }

    #[test]
    fn test_enter_and_escape_commit_buffer() {
        let mut ed = editor("done");
        assert_eq!(
            ed.handle_event(&TuiEvent::Submit),
            Some(EditorEvent::Commit("done".to_string()))
        );
        assert_eq!(
            ed.handle_event(&TuiEvent::Escape),
            Some(EditorEvent::Commit("done".to_string()))
        );
    }

    #[test]
    fn test_paste_inserts_at_cursor() {
        let mut ed = editor("ad");
        ed.handle_event(&TuiEvent::CursorLeft);
        ed.handle_event(&TuiEvent::Paste("b\nc".to_string()));
        assert_eq!(ed.buffer, "ab cd");
    }

    #[test]
    fn test_visible_scrolls_to_keep_cursor_in_view() {
        let mut ed = editor("abcdefghij");
        let (text, col) = ed.visible(5);
        assert_eq!(text, "ghij");
        assert_eq!(col, 4);

        ed.handle_event(&TuiEvent::CursorHome);
        let (text, col) = ed.visible(5);
        assert_eq!(text, "abcde");
        assert_eq!(col, 0);
    }
}
