use ratatui::Frame;
use ratatui::layout::Rect;

/// A piece of the widget panel that knows how to draw itself.
///
/// Props arrive as struct fields; persistent presentation state (scroll
/// offsets, cursor positions) is borrowed mutably so `render` can update it,
/// which matches ratatui's `StatefulWidget` pattern.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that consumes terminal events.
pub trait EventHandler {
    /// The higher-level event this component emits.
    type Event;

    /// Handle a `TuiEvent`, optionally producing a component event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
