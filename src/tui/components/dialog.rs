//! # Dialog Component
//!
//! Modal message box drawn over the panel. Storage errors use the red error
//! style; save confirmations use the info style. Stateless: the `Dialog`
//! value lives in core `App` state and the shell handles dismissal.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::core::state::{Dialog, DialogKind};
use crate::tui::component::Component;

const HELP_TEXT: &str = " Enter OK ";
const MAX_WIDTH: u16 = 40;

pub struct DialogView<'a> {
    pub dialog: &'a Dialog,
}

impl<'a> DialogView<'a> {
    pub fn new(dialog: &'a Dialog) -> Self {
        Self { dialog }
    }

    /// Centered overlay sized to the message, within `outer`.
    fn overlay(&self, outer: Rect) -> Rect {
        let width = MAX_WIDTH.min(outer.width);
        // borders (2) + padding (2)
        let text_width = width.saturating_sub(4).max(1) as usize;
        let options = textwrap::Options::new(text_width).break_words(true);
        let lines = textwrap::wrap(&self.dialog.message, options).len() as u16;
        let height = (lines + 2).min(outer.height);

        Rect::new(
            outer.x + (outer.width - width) / 2,
            outer.y + (outer.height - height) / 2,
            width,
            height,
        )
    }
}

fn border_color(kind: DialogKind) -> Color {
    match kind {
        DialogKind::Info => Color::Green,
        DialogKind::Error => Color::Red,
    }
}

impl Component for DialogView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = self.overlay(area);
        frame.render_widget(Clear, overlay);

        let style = Style::default().fg(border_color(self.dialog.kind));
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(style)
            .title(format!(" {} ", self.dialog.title))
            .title_style(style)
            .title_bottom(Line::from(HELP_TEXT).centered())
            .padding(Padding::horizontal(1));

        let body = Paragraph::new(self.dialog.message.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);

        frame.render_widget(body, overlay);
    }
}
