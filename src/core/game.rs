/// Core game interface for the lanterm terminal runtime
use crossterm::event::Event;
use ratatui::layout::Rect;

/// What the engine should do after an event has been handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Main game trait that all games must implement
pub trait Game {
    /// Handle a terminal event. `area` is the current terminal area, the same
    /// one `render` will draw into, so mouse positions can be hit-tested.
    fn handle_input(&mut self, event: &Event, area: Rect) -> Flow;

    /// Render the current state into the Ratatui Frame
    fn render(&self, frame: &mut ratatui::Frame);
}
