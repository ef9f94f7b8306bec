use ratatui::Frame;
use ratatui::layout::Rect;

/// Something that draws itself into an area of the frame.
///
/// Screens and bars take their data as struct fields ("props") and are
/// rebuilt every frame from the current `App`. Stateful widgets such as the
/// edit form keep their state across frames and are rendered in place.
///
/// `render` takes `&mut self` so a component can record layout it needs later
/// (for example the cursor position of a focused text field).
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that consumes input events and may emit its own.
pub trait EventHandler {
    /// The high-level event this component emits.
    type Event;

    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
