//! # Checklist Component
//!
//! Scrollable list of checkbox rows, one per item.
//!
//! ## Architecture
//!
//! `Checklist` is a transient component (created each frame) that wraps
//! `&'a mut ChecklistState` (persistent state) and `&'a TodoList` (props).
//! Row bindings live in the state and are reconciled against the model by
//! `ChecklistState::sync`; labels are always drawn from the model's content.
//!
//! ```text
//! ┌────────────────────────────────────┐
//! │[ ] Buy milk                        ▲
//! │[x] Call the plumber about the      █
//! │    kitchen sink                    │
//! │[ ] █New item                       ▼   ← inline editor
//! └────────────────────────────────────┘
//! ```

use std::borrow::Cow;

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::todo::{ItemId, TodoList};
use crate::tui::component::Component;
use crate::tui::components::inline_editor::InlineEditor;
use crate::tui::sync::{Decoration, RowBinding, SyncOutcome, reconcile};

/// Columns taken by the `[x] ` checkbox prefix.
pub const CHECKBOX_WIDTH: u16 = 4;
/// Column reserved for the vertical scrollbar.
const SCROLLBAR_WIDTH: u16 = 1;

const EMPTY_HINT: &str = "Nothing to do. Right-click or press n to add an item.";

/// Cached row heights from the last measure pass.
#[derive(Debug, Default)]
pub struct LayoutCache {
    pub heights: Vec<u16>,
    /// Running sum of heights; `prefix_heights[i]` is the bottom of row `i`.
    pub prefix_heights: Vec<u16>,
}

impl LayoutCache {
    fn total(&self) -> u16 {
        self.prefix_heights.last().copied().unwrap_or(0)
    }

    fn top_of(&self, index: usize) -> u16 {
        if index == 0 {
            0
        } else {
            self.prefix_heights[index - 1]
        }
    }
}

/// Result of hit-testing a screen cell against the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowHit {
    pub id: ItemId,
    pub on_checkbox: bool,
}

/// Persistent state for the checklist.
/// Must be kept in the parent TuiState.
pub struct ChecklistState {
    pub rows: Vec<RowBinding>,
    pub scroll_state: ScrollViewState,
    pub layout: LayoutCache,
    /// Highlighted row (keyboard navigation or last click)
    pub selected: Option<ItemId>,
    /// Present while a row's label is swapped for a text field
    pub editor: Option<InlineEditor>,
    /// Screen area the list occupied in the last frame
    pub viewport: Rect,
    scroll_to_end: bool,
}

impl Default for ChecklistState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChecklistState {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            scroll_state: ScrollViewState::default(),
            layout: LayoutCache::default(),
            selected: None,
            editor: None,
            viewport: Rect::default(),
            scroll_to_end: false,
        }
    }

    /// Reconcile row bindings with the model. Drops the selection and any
    /// open editor whose item no longer exists.
    pub fn sync(&mut self, items: &TodoList) -> SyncOutcome {
        let outcome = reconcile(&mut self.rows, items);
        if self.selected.is_some_and(|id| items.get(id).is_none()) {
            self.selected = None;
        }
        if self.editor.as_ref().is_some_and(|ed| items.get(ed.id).is_none()) {
            self.editor = None;
        }
        outcome
    }

    /// Recompute row heights for a list `width` columns wide (scrollbar
    /// included) and return the total content height.
    pub fn measure(&mut self, items: &TodoList, width: u16) -> u16 {
        let label_width = label_width(width);
        let editing = self.editor.as_ref().map(|ed| ed.id);

        self.layout.heights = self
            .rows
            .iter()
            .zip(items.iter())
            .map(|(row, item)| {
                if editing == Some(row.id) {
                    1
                } else {
                    wrap_label(&item.content, label_width).len().max(1) as u16
                }
            })
            .collect();

        let mut acc: u16 = 0;
        self.layout.prefix_heights = self
            .layout
            .heights
            .iter()
            .map(|h| {
                acc = acc.saturating_add(*h);
                acc
            })
            .collect();

        self.layout.total()
    }

    /// Scroll to the last row on the next render.
    pub fn scroll_to_end(&mut self) {
        self.scroll_to_end = true;
    }

    pub fn scroll_up(&mut self) {
        self.scroll_state.scroll_up();
    }

    pub fn scroll_down(&mut self) {
        self.scroll_state.scroll_down();
        self.clamp_scroll();
    }

    fn max_scroll(&self) -> u16 {
        self.layout.total().saturating_sub(self.viewport.height)
    }

    /// Keep the offset inside the content. Also resolves a pending
    /// `scroll_to_end`.
    fn clamp_scroll(&mut self) {
        let max_y = self.max_scroll();
        let y = if std::mem::take(&mut self.scroll_to_end) {
            max_y
        } else {
            self.scroll_state.offset().y.min(max_y)
        };
        self.scroll_state.set_offset(Position { x: 0, y });
    }

    fn index_of(&self, id: ItemId) -> Option<usize> {
        self.rows.iter().position(|row| row.id == id)
    }

    pub fn select_next(&mut self) {
        let next = match self.selected.and_then(|id| self.index_of(id)) {
            Some(i) => (i + 1).min(self.rows.len().saturating_sub(1)),
            None => 0,
        };
        self.selected = self.rows.get(next).map(|row| row.id);
        self.scroll_to_selected();
    }

    pub fn select_prev(&mut self) {
        let prev = match self.selected.and_then(|id| self.index_of(id)) {
            Some(i) => i.saturating_sub(1),
            None => self.rows.len().saturating_sub(1),
        };
        self.selected = self.rows.get(prev).map(|row| row.id);
        self.scroll_to_selected();
    }

    /// Scroll the viewport so the selected row is fully visible.
    /// If the row is taller than the viewport, align its top edge.
    pub fn scroll_to_selected(&mut self) {
        let Some(idx) = self.selected.and_then(|id| self.index_of(id)) else {
            return;
        };
        if idx >= self.layout.prefix_heights.len() {
            return;
        }

        let top = self.layout.top_of(idx);
        let bottom = self.layout.prefix_heights[idx];
        let offset_y = self.scroll_state.offset().y;

        if top < offset_y {
            self.scroll_state.set_offset(Position { x: 0, y: top });
        } else if bottom > offset_y + self.viewport.height {
            let y = bottom.saturating_sub(self.viewport.height).min(top);
            self.scroll_state.set_offset(Position { x: 0, y });
        }
    }

    /// Find the row under screen cell (`col`, `row`), if any.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<RowHit> {
        if !self.viewport.contains(Position::new(col, row)) {
            return None;
        }

        let content_y = (row - self.viewport.y) + self.scroll_state.offset().y;
        let index = self
            .layout
            .prefix_heights
            .iter()
            .position(|bottom| content_y < *bottom)?;

        self.rows.get(index).map(|binding| RowHit {
            id: binding.id,
            on_checkbox: col - self.viewport.x < CHECKBOX_WIDTH,
        })
    }
}

/// Width left for label text in a list `width` columns wide.
pub fn label_width(width: u16) -> u16 {
    width.saturating_sub(SCROLLBAR_WIDTH + CHECKBOX_WIDTH)
}

fn wrap_label(content: &str, width: u16) -> Vec<Cow<'_, str>> {
    let options = textwrap::Options::new(width.max(1) as usize).break_words(true);
    textwrap::wrap(content, options)
}

fn label_style(decoration: Decoration) -> Style {
    match decoration {
        Decoration::Open => Style::default(),
        Decoration::Done => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT),
    }
}

fn checkbox(decoration: Decoration) -> &'static str {
    match decoration {
        Decoration::Open => "[ ] ",
        Decoration::Done => "[x] ",
    }
}

/// Transient render wrapper for the checklist.
pub struct Checklist<'a> {
    state: &'a mut ChecklistState,
    items: &'a TodoList,
}

impl<'a> Checklist<'a> {
    pub fn new(state: &'a mut ChecklistState, items: &'a TodoList) -> Self {
        Self { state, items }
    }
}

impl Component for Checklist<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.viewport = area;

        if self.items.is_empty() {
            let hint = Paragraph::new(EMPTY_HINT)
                .style(Style::default().fg(Color::DarkGray))
                .wrap(ratatui::widgets::Wrap { trim: true });
            frame.render_widget(hint, area);
            return;
        }

        let content_width = area.width.saturating_sub(SCROLLBAR_WIDTH);
        let label_w = label_width(area.width);
        let total_height = self.state.measure(self.items, area.width);
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut cursor: Option<(u16, u16)> = None;
        for (index, (binding, item)) in self.state.rows.iter().zip(self.items.iter()).enumerate() {
            let top = self.state.layout.top_of(index);
            let height = self.state.layout.heights[index];
            let rect = Rect::new(0, top, content_width, height);

            let selected = self.state.selected == Some(binding.id);
            let box_style = if selected {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            let prefix = Span::styled(checkbox(binding.decoration), box_style);

            let lines: Vec<Line> = match self.state.editor.as_mut() {
                Some(editor) if editor.id == binding.id => {
                    let (visible, col) = editor.visible(label_w);
                    cursor = Some((top, CHECKBOX_WIDTH + col));
                    vec![Line::from(vec![
                        prefix,
                        Span::styled(visible, Style::default().add_modifier(Modifier::UNDERLINED)),
                    ])]
                }
                _ => {
                    let style = label_style(binding.decoration);
                    wrap_label(&item.content, label_w)
                        .into_iter()
                        .enumerate()
                        .map(|(i, text)| {
                            let lead = if i == 0 {
                                prefix.clone()
                            } else {
                                Span::raw(" ".repeat(CHECKBOX_WIDTH as usize))
                            };
                            Line::from(vec![lead, Span::styled(text.into_owned(), style)])
                        })
                        .collect()
                }
            };

            scroll_view.render_widget(Paragraph::new(lines), rect);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);

        // The scroll view draws into its own buffer, so the editor's cursor is
        // placed in screen space here.
        if let Some((content_y, col)) = cursor {
            let offset_y = self.state.scroll_state.offset().y;
            if content_y >= offset_y && content_y - offset_y < area.height {
                frame.set_cursor_position(Position::new(
                    area.x + col.min(content_width.saturating_sub(1)),
                    area.y + content_y - offset_y,
                ));
            }
        }
    }
}
