//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, draws the widget panel,
//! and translates mouse/keyboard events into core `Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! ```text
//! poll (until next tick) → handle events → tick clock → drain quote channel
//!        ▲                                                      │
//!        └──────────────────── draw (if dirty) ◀────────────────┘
//! ```
//!
//! Every action goes through `Shell::dispatch`, which runs the reducer,
//! reconciles the checklist rows with the model, re-fits the panel and then
//! performs the returned effect. The view is therefore back in step with the
//! model before any effect (such as a save) runs and before the next frame.
//!
//! ## Quote Fetches
//!
//! Quotes are fetched on a tokio task and come back over an mpsc channel as
//! `Action::QuoteReceived`. The reducer allows one fetch in flight at a time;
//! quitting aborts it.

mod component;
mod components;
mod event;
pub mod geometry;
pub mod sync;
mod ui;

use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use chrono::Local;
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use log::{debug, info, warn};
use ratatui::layout::{Position, Rect};

use crate::core::action::{Action, Effect, update};
use crate::core::config::{PanelConfig, TICK_INTERVAL, WidgetConfig};
use crate::core::state::App;
use crate::core::storage::Storage;
use crate::core::todo::ItemId;
use crate::quote::{self, HttpQuoteProvider, QuoteProvider};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    ChecklistState, ContextMenuState, EditorEvent, InlineEditor, MenuAction, MenuEvent,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::geometry::WindowGeometry;
use crate::tui::sync::SyncOutcome;

/// Two clicks on the same row within this window open the editor.
const DOUBLE_CLICK: Duration = Duration::from_millis(400);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub checklist: ChecklistState,
    /// Open context menu (None = hidden)
    pub menu: Option<ContextMenuState>,
    pub geometry: WindowGeometry,
    clicks: ClickTracker,
}

impl TuiState {
    pub fn new(panel: &PanelConfig) -> Self {
        Self {
            checklist: ChecklistState::new(),
            menu: None,
            geometry: WindowGeometry::new(panel),
            clicks: ClickTracker::default(),
        }
    }

    /// Reconcile rows with the model, then re-fit the panel.
    pub fn sync(&mut self, app: &App, screen: Rect) -> SyncOutcome {
        let outcome = self.checklist.sync(&app.items);
        self.refit(app, screen);
        outcome
    }

    /// Size the panel to its content, holding the anchor fixed.
    pub fn refit(&mut self, app: &App, screen: Rect) {
        let panel_width = self.geometry.width_on(screen);
        let content = self
            .checklist
            .measure(&app.items, ui::inner_width(panel_width));
        let chrome = ui::chrome_height(&app.quote, panel_width);
        let area = self.geometry.fit(content, chrome, screen);
        debug!("Panel fitted to {}x{} at ({}, {})", area.width, area.height, area.x, area.y);
    }
}

/// Detects double-clicks on a row.
#[derive(Default)]
struct ClickTracker {
    last: Option<(ItemId, Instant)>,
}

impl ClickTracker {
    /// Record a click on `id`; true if it completes a double-click.
    fn register(&mut self, id: ItemId, at: Instant) -> bool {
        let double = self
            .last
            .is_some_and(|(prev, when)| prev == id && at.duration_since(when) <= DOUBLE_CLICK);
        self.last = if double { None } else { Some((id, at)) };
        double
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

/// Everything outside the reducer that actions can touch: storage, the
/// quote task and the terminal size.
struct Shell {
    storage: Storage,
    provider: Arc<dyn QuoteProvider>,
    fallback_quote: String,
    tx: mpsc::Sender<Action>,
    quote_task: Option<tokio::task::AbortHandle>,
    screen: Rect,
}

impl Shell {
    fn new(
        storage: Storage,
        provider: Arc<dyn QuoteProvider>,
        fallback_quote: String,
        tx: mpsc::Sender<Action>,
        screen: Rect,
    ) -> Self {
        Self {
            storage,
            provider,
            fallback_quote,
            tx,
            quote_task: None,
            screen,
        }
    }

    /// Apply an action and run its effect. Returns true when the app should quit.
    fn dispatch(&mut self, app: &mut App, tui: &mut TuiState, action: Action) -> bool {
        let reveal_new_row = matches!(action, Action::NewItem);
        let effect = update(app, action);

        let outcome = tui.sync(app, self.screen);
        if outcome.is_structural() {
            debug!("Rows changed: {:?}", outcome);
        }
        if reveal_new_row && outcome.appended > 0 {
            tui.checklist.scroll_to_end();
        }

        match effect {
            Effect::None => false,
            Effect::Save => {
                let follow_up = self.persist(app);
                self.dispatch(app, tui, follow_up)
            }
            Effect::FetchQuote => {
                self.spawn_quote_fetch();
                false
            }
            Effect::Quit => true,
        }
    }

    fn persist(&self, app: &App) -> Action {
        match self.storage.save(app.items.items()) {
            Ok(()) => Action::Saved {
                count: app.items.len(),
            },
            Err(e) => {
                warn!("Save to {} failed: {}", self.storage.path().display(), e);
                Action::SaveFailed(e.to_string())
            }
        }
    }

    fn spawn_quote_fetch(&mut self) {
        info!("Spawning quote fetch via {}", self.provider.name());
        let provider = self.provider.clone();
        let fallback = self.fallback_quote.clone();
        let tx = self.tx.clone();

        let handle = tokio::spawn(async move {
            let quote = quote::fetch_or_fallback(provider.as_ref(), &fallback).await;
            if tx.send(Action::QuoteReceived(quote)).is_err() {
                warn!("Failed to deliver quote: receiver dropped");
            }
        });
        self.quote_task = Some(handle.abort_handle());
    }

    /// Abort any in-flight quote fetch.
    fn shutdown(&mut self) {
        if let Some(task) = self.quote_task.take() {
            task.abort();
        }
    }

    /// The terminal changed size; re-fit the panel.
    fn resize(&mut self, app: &App, tui: &mut TuiState, screen: Rect) {
        self.screen = screen;
        tui.menu = None;
        tui.refit(app, screen);
    }

    /// Route one terminal event. Returns true when the app should quit.
    fn handle_event(&mut self, app: &mut App, tui: &mut TuiState, event: TuiEvent) -> bool {
        self.handle_event_at(app, tui, event, Instant::now())
    }

    fn handle_event_at(
        &mut self,
        app: &mut App,
        tui: &mut TuiState,
        event: TuiEvent,
        now: Instant,
    ) -> bool {
        if matches!(event, TuiEvent::Resize) {
            // The loop re-reads the frame size before drawing.
            return false;
        }

        // Ctrl+C always quits, even over a dialog
        if matches!(event, TuiEvent::ForceQuit) {
            return self.dispatch(app, tui, Action::Quit);
        }

        // A dialog is modal: only dismissal gets through
        if app.dialog.is_some() {
            if matches!(
                event,
                TuiEvent::Submit | TuiEvent::Escape | TuiEvent::MouseClick(..)
            ) {
                return self.dispatch(app, tui, Action::DismissDialog);
            }
            return false;
        }

        if let Some(menu) = tui.menu.as_mut() {
            if let Some(menu_event) = menu.handle_event(&event) {
                tui.menu = None;
                if let MenuEvent::Select(choice) = menu_event {
                    info!("Menu action: {}", choice.label());
                    return self.dispatch(app, tui, choice.action());
                }
            }
            return false;
        }

        if let TuiEvent::MouseRightClick(col, row) = event {
            self.commit_edit(app, tui);
            tui.menu = Some(ContextMenuState::open(Position::new(col, row), self.screen));
            return false;
        }

        // Scrolling works in every mode; the wheel only over the panel
        let panel = tui.geometry.area();
        let over_panel = |col, row| panel.contains(Position::new(col, row));
        match event {
            TuiEvent::ScrollUp => {
                tui.checklist.scroll_up();
                return false;
            }
            TuiEvent::ScrollDown => {
                tui.checklist.scroll_down();
                return false;
            }
            TuiEvent::WheelUp(col, row) => {
                if over_panel(col, row) {
                    tui.checklist.scroll_up();
                }
                return false;
            }
            TuiEvent::WheelDown(col, row) => {
                if over_panel(col, row) {
                    tui.checklist.scroll_down();
                }
                return false;
            }
            _ => {}
        }

        if let Some(editing) = tui.checklist.editor.as_ref().map(|ed| ed.id) {
            if let TuiEvent::MouseClick(col, row) = event {
                if tui.checklist.hit_test(col, row).is_some_and(|hit| hit.id == editing) {
                    return false;
                }
                // Focus moves away: commit, then treat the click normally
                self.commit_edit(app, tui);
            } else {
                if let Some(editor) = tui.checklist.editor.as_mut()
                    && let Some(EditorEvent::Commit(_)) = editor.handle_event(&event)
                {
                    self.commit_edit(app, tui);
                }
                return false;
            }
        }

        match event {
            TuiEvent::MouseClick(col, row) => {
                let Some(hit) = tui.checklist.hit_test(col, row) else {
                    return false;
                };
                tui.checklist.selected = Some(hit.id);
                if hit.on_checkbox {
                    return self.dispatch(app, tui, Action::ToggleItem(hit.id));
                }
                if tui.clicks.register(hit.id, now) {
                    self.begin_edit(app, tui, hit.id);
                }
                false
            }
            TuiEvent::CursorUp => {
                tui.checklist.select_prev();
                false
            }
            TuiEvent::CursorDown => {
                tui.checklist.select_next();
                false
            }
            TuiEvent::InputChar(' ') => match tui.checklist.selected {
                Some(id) => self.dispatch(app, tui, Action::ToggleItem(id)),
                None => false,
            },
            TuiEvent::Submit | TuiEvent::InputChar('e') => {
                if let Some(id) = tui.checklist.selected {
                    self.begin_edit(app, tui, id);
                }
                false
            }
            TuiEvent::InputChar('m') => {
                let anchor = tui.geometry.anchor();
                tui.menu = Some(ContextMenuState::open(anchor, self.screen));
                false
            }
            TuiEvent::InputChar(c) => match MenuAction::from_shortcut(c) {
                Some(choice) => self.dispatch(app, tui, choice.action()),
                None => false,
            },
            _ => false,
        }
    }

    /// Swap the row's label for an editor seeded with the item's content.
    fn begin_edit(&mut self, app: &App, tui: &mut TuiState, id: ItemId) {
        let Some(item) = app.items.get(id) else {
            return;
        };
        debug!("Editing item {id}");
        tui.checklist.editor = Some(InlineEditor::new(id, &item.content));
        tui.checklist.selected = Some(id);
        tui.refit(app, self.screen);
    }

    /// Apply the open editor's text (if any) and restore the label. An
    /// untouched editor leaves the item as it was.
    fn commit_edit(&mut self, app: &mut App, tui: &mut TuiState) {
        let Some(editor) = tui.checklist.editor.take() else {
            return;
        };
        if !editor.is_modified() {
            debug!("Edit of item {} closed unchanged", editor.id);
            tui.refit(app, self.screen);
            return;
        }
        self.dispatch(
            app,
            tui,
            Action::EditItem {
                id: editor.id,
                text: editor.buffer,
            },
        );
    }
}

pub fn run(config: WidgetConfig) -> std::io::Result<()> {
    let storage = Storage::new(config.storage_path.clone());
    let (items, load_error) = match storage.load() {
        Ok(items) => (items, None),
        Err(e) => {
            warn!("Load from {} failed: {}", storage.path().display(), e);
            (Vec::new(), Some(e.to_string()))
        }
    };

    let provider: Arc<dyn QuoteProvider> = Arc::new(HttpQuoteProvider::new(
        config.quote_endpoint.clone(),
        config.quote_timeout,
    ));
    let mut app = App::from_config(items, &config);
    let mut tui = TuiState::new(&config.panel);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let size = terminal.size()?;
    let screen = Rect::new(0, 0, size.width, size.height);
    let mut shell = Shell::new(storage, provider, config.fallback_quote.clone(), tx, screen);

    let result = event_loop(&mut terminal, &mut app, &mut tui, &mut shell, &rx, load_error);

    if result.is_ok() {
        info!("Quitting with {} items in memory", app.items.len());
    }
    shell.shutdown();
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    shell: &mut Shell,
    rx: &mpsc::Receiver<Action>,
    load_error: Option<String>,
) -> std::io::Result<()> {
    // Build the initial rows, report a failed load, start the first quote
    tui.sync(app, shell.screen);
    if let Some(message) = load_error {
        shell.dispatch(app, tui, Action::LoadFailed(message));
    }
    shell.dispatch(app, tui, Action::RefreshQuote);

    let mut next_tick = Instant::now() + TICK_INTERVAL;
    let mut needs_redraw = true;

    loop {
        let size = terminal.size()?;
        let screen = Rect::new(0, 0, size.width, size.height);
        if screen != shell.screen {
            shell.resize(app, tui, screen);
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let timeout = next_tick.saturating_duration_since(Instant::now());
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain all pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            needs_redraw = true;
            if shell.handle_event(app, tui, event) {
                should_quit = true;
                break;
            }
        }
        if should_quit {
            break;
        }

        if Instant::now() >= next_tick {
            shell.dispatch(app, tui, Action::Tick(Local::now()));
            next_tick = Instant::now() + TICK_INTERVAL;
            needs_redraw = true;
        }

        // Handle background task actions (quote fetches)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if shell.dispatch(app, tui, action) {
                should_quit = true;
            }
        }
        if should_quit {
            break;
        }
    }

    Ok(())
}
