//! Frame layout and draw dispatch.
//!
//! One row of chrome (the title bar), then the active screen gets the rest
//! of the terminal.

use crate::core::state::App;
use crate::tui::components::TitleBar;
use crate::tui::component::Component;
use crate::tui::{ScreenView, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [title_area, body_area] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());

    // Transient wrapper: props are re-read from app state every frame.
    let mut title_bar = TitleBar::new(
        app.store_name.clone(),
        app.screen,
        app.status_message.clone(),
    );
    title_bar.render(frame, title_area);

    match &mut tui.view {
        ScreenView::Login(form) => form.render(frame, body_area),
        ScreenView::Registration(form) => form.render(frame, body_area),
        ScreenView::Main(store) => store.render(frame, body_area),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;
    use crate::tui::TuiState;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered_text(app: &App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut tui = TuiState::new(app);
        terminal.draw(|f| draw_ui(f, app, &mut tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_login_screen() {
        let app = test_app();
        let text = rendered_text(&app);
        assert!(text.contains("Vestenet (Sign in)"));
        assert!(text.contains("Username"));
        assert!(text.contains("Password"));
    }

    #[test]
    fn test_draw_storefront_screen() {
        let mut app = test_app();
        app.navigate(crate::core::screen::ScreenId::Main);
        let text = rendered_text(&app);
        assert!(text.contains("Vestenet (Storefront)"));
        assert!(text.contains("Camisa Polo"));
    }

    #[test]
    fn test_draw_registration_screen() {
        let mut app = test_app();
        app.navigate(crate::core::screen::ScreenId::Registration);
        let text = rendered_text(&app);
        assert!(text.contains("Vestenet (Sign up)"));
        assert!(text.contains("CPF"));
    }
}
