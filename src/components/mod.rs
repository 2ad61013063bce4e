use crossterm::event::Event;
use ratatui::layout::Rect;

use crate::ui::UiFrame;

pub use crate::component_context::ComponentContext;

/// The interface every app window content implements. The shell renders
/// components into the content region handed to them and forwards events
/// to the focused one.
pub trait Component {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext);

    /// Handle an input event. Returning `true` consumes the event.
    fn handle_event(&mut self, _event: &Event, _ctx: &ComponentContext) -> bool {
        false
    }
}
