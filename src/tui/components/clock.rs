//! # Clock Component
//!
//! One centered line with the current date and time. Stateless: the text is
//! formatted by the core on every tick and passed in as a prop.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub struct Clock {
    pub text: String,
}

impl Clock {
    pub fn new(text: String) -> Self {
        Self { text }
    }
}

impl Component for Clock {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let clock = Paragraph::new(self.text.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(clock, area);
    }
}
