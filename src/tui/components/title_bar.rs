//! # TitleBar Component
//!
//! One-line header showing the store name, the active screen, and the
//! transient status message. Purely presentational: all three values are
//! props, re-read from app state every frame.
//!
//! Formatting priority mirrors the rest of the chrome: the store name and
//! screen are always visible, the status message only when there is one.

use crate::core::screen::ScreenId;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

pub struct TitleBar {
    pub store_name: String,
    pub screen: ScreenId,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(store_name: String, screen: ScreenId, status_message: String) -> Self {
        Self {
            store_name,
            screen,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.status_message.is_empty() {
            format!("{} ({})", self.store_name, self.screen.title())
        } else {
            format!(
                "{} ({}) | {}",
                self.store_name,
                self.screen.title(),
                self.status_message
            )
        };

        frame.render_widget(Span::raw(title_text), area);
    }
}
