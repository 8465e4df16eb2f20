//! # QuoteLine Component
//!
//! The quote under the clock, centered and word-wrapped. Its height depends
//! on the text, so the panel asks `QuoteLine::height` before laying out.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub struct QuoteLine<'a> {
    pub text: &'a str,
}

impl<'a> QuoteLine<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Lines the quote occupies when wrapped to `width` columns.
    pub fn height(text: &str, width: u16) -> u16 {
        if width == 0 {
            return 1;
        }
        let options = textwrap::Options::new(width as usize).break_words(true);
        (textwrap::wrap(text, options).len() as u16).max(1)
    }

    fn lines(&self, width: u16) -> Vec<String> {
        let options = textwrap::Options::new(width.max(1) as usize).break_words(true);
        textwrap::wrap(self.text, options)
            .into_iter()
            .map(|line| line.into_owned())
            .collect()
    }
}

impl Component for QuoteLine<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Pre-wrapped so the rendered height always matches `height()`.
        let quote = Paragraph::new(self.lines(area.width).join("\n"))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::ITALIC),
            );
        frame.render_widget(quote, area);
    }
}
