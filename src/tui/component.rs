use ratatui::Frame;
use ratatui::layout::Rect;

/// A renderable UI piece.
///
/// Components receive external data as struct fields ("props", synced from
/// core state each frame) and may hold presentation state of their own
/// (cursor, focus, scroll offsets).
///
/// `render` takes `&mut self` so presentation state and cached layout can
/// move during the pass. This aligns with ratatui's `StatefulWidget`
/// pattern.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
