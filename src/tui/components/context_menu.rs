//! # Context Menu Component
//!
//! Popup with the widget's five actions, opened at the pointer on right-click
//! (or at the panel anchor with `m`).
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ContextMenuState` lives in `TuiState` while the menu is open
//! - `ContextMenu` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState};

use crate::core::action::Action;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    NewItem,
    DeleteSelected,
    RefreshQuote,
    Save,
    Quit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 5] = [
        MenuAction::NewItem,
        MenuAction::DeleteSelected,
        MenuAction::RefreshQuote,
        MenuAction::Save,
        MenuAction::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::NewItem => "New item",
            MenuAction::DeleteSelected => "Delete selected",
            MenuAction::RefreshQuote => "Refresh quote",
            MenuAction::Save => "Save",
            MenuAction::Quit => "Quit",
        }
    }

    pub fn shortcut(self) -> char {
        match self {
            MenuAction::NewItem => 'n',
            MenuAction::DeleteSelected => 'd',
            MenuAction::RefreshQuote => 'r',
            MenuAction::Save => 's',
            MenuAction::Quit => 'q',
        }
    }

    pub fn from_shortcut(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.shortcut() == c)
    }

    /// The core action this menu entry triggers.
    pub fn action(self) -> Action {
        match self {
            MenuAction::NewItem => Action::NewItem,
            MenuAction::DeleteSelected => Action::DeleteCompleted,
            MenuAction::RefreshQuote => Action::RefreshQuote,
            MenuAction::Save => Action::Save,
            MenuAction::Quit => Action::Quit,
        }
    }
}

/// Events emitted by the context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Select(MenuAction),
    Dismiss,
}

/// Persistent state for an open context menu.
pub struct ContextMenuState {
    /// Screen area the popup covers
    pub area: Rect,
    pub list_state: ListState,
}

impl ContextMenuState {
    /// Open a menu with its top-left at `origin`, shifted as needed to stay on
    /// `screen`.
    pub fn open(origin: Position, screen: Rect) -> Self {
        let width = (menu_width() + 2).min(screen.width);
        let height = (MenuAction::ALL.len() as u16 + 2).min(screen.height);
        let x = origin.x.min(screen.right().saturating_sub(width)).max(screen.x);
        let y = origin.y.min(screen.bottom().saturating_sub(height)).max(screen.y);

        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            area: Rect::new(x, y, width, height),
            list_state,
        }
    }

    pub fn selected(&self) -> MenuAction {
        MenuAction::ALL[self.list_state.selected().unwrap_or(0).min(MenuAction::ALL.len() - 1)]
    }

    /// Entry under screen cell (`col`, `row`), if any. Borders don't count.
    fn entry_at(&self, col: u16, row: u16) -> Option<MenuAction> {
        let inner = Block::default().borders(Borders::ALL).inner(self.area);
        if !inner.contains(Position::new(col, row)) {
            return None;
        }
        MenuAction::ALL.get((row - inner.y) as usize).copied()
    }
}

impl EventHandler for ContextMenuState {
    type Event = MenuEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<MenuEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::MouseRightClick(..) => Some(MenuEvent::Dismiss),
            TuiEvent::CursorUp => {
                let i = self.list_state.selected().unwrap_or(0);
                self.list_state.select(Some(i.saturating_sub(1)));
                None
            }
            TuiEvent::CursorDown => {
                let i = self.list_state.selected().unwrap_or(0);
                self.list_state
                    .select(Some((i + 1).min(MenuAction::ALL.len() - 1)));
                None
            }
            TuiEvent::Submit => Some(MenuEvent::Select(self.selected())),
            TuiEvent::InputChar(c) => MenuAction::from_shortcut(*c).map(MenuEvent::Select),
            TuiEvent::MouseClick(col, row) => Some(
                self.entry_at(*col, *row)
                    .map(MenuEvent::Select)
                    .unwrap_or(MenuEvent::Dismiss),
            ),
            _ => None,
        }
    }
}

fn menu_width() -> u16 {
    // label + two spaces + shortcut + one space of padding each side
    MenuAction::ALL
        .iter()
        .map(|a| a.label().len() as u16 + 5)
        .max()
        .unwrap_or(0)
}

/// Transient render wrapper for the context menu.
pub struct ContextMenu<'a> {
    state: &'a mut ContextMenuState,
}

impl<'a> ContextMenu<'a> {
    pub fn new(state: &'a mut ContextMenuState) -> Self {
        Self { state }
    }
}

impl Component for ContextMenu<'_> {
    fn render(&mut self, frame: &mut Frame, _area: Rect) {
        let overlay = self.state.area;
        frame.render_widget(Clear, overlay);

        let label_width = menu_width().saturating_sub(5) as usize;
        let items: Vec<ListItem> = MenuAction::ALL
            .iter()
            .map(|action| {
                ListItem::new(Line::from(vec![
                    Span::raw(format!(" {:<label_width$}  ", action.label())),
                    Span::styled(
                        format!("{} ", action.shortcut()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}
