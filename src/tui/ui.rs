use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Clear};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Checklist, Clock, ContextMenu, DialogView, QuoteLine};

const BORDER_HEIGHT: u16 = 2;
const BORDER_WIDTH: u16 = 2;
const CLOCK_HEIGHT: u16 = 1;
/// Blank line between the quote and the checklist.
const GAP_HEIGHT: u16 = 1;

/// Columns available inside the panel border.
pub fn inner_width(panel_width: u16) -> u16 {
    panel_width.saturating_sub(BORDER_WIDTH)
}

/// Rows the panel spends on everything except the checklist.
pub fn chrome_height(quote: &str, panel_width: u16) -> u16 {
    BORDER_HEIGHT + CLOCK_HEIGHT + QuoteLine::height(quote, inner_width(panel_width)) + GAP_HEIGHT
}

fn panel_layout(inner: Rect, quote_height: u16) -> [Rect; 4] {
    use Constraint::{Length, Min};
    Layout::vertical([
        Length(CLOCK_HEIGHT),
        Length(quote_height),
        Length(GAP_HEIGHT),
        Min(0),
    ])
    .areas(inner)
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let screen = frame.area();
    let area = tui.geometry.area().intersection(screen);

    frame.render_widget(Clear, area);
    let block = Block::bordered().border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let quote_height = QuoteLine::height(&app.quote, inner.width);
    let [clock_area, quote_area, _gap, list_area] = panel_layout(inner, quote_height);

    Clock::new(app.clock_text()).render(frame, clock_area);
    QuoteLine::new(&app.quote).render(frame, quote_area);
    Checklist::new(&mut tui.checklist, &app.items).render(frame, list_area);

    if let Some(menu) = tui.menu.as_mut() {
        ContextMenu::new(menu).render(frame, screen);
    }
    if let Some(dialog) = &app.dialog {
        DialogView::new(dialog).render(frame, screen);
    }
}
