//! # Login Screen
//!
//! Username + password form. Enter submits, Ctrl+R jumps to sign-up,
//! Esc quits. Field focus cycles with Tab / Shift+Tab or the arrow keys.
//!
//! The form itself decides nothing: keystrokes become `LoginEvent`s and
//! the core reducer runs the sign-in rule.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::core::form::Field;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::centered_column;
use crate::tui::components::text_field::{FIELD_HEIGHT, FieldEvent, TextField};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the login form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginEvent {
    Edit(Field, String),
    Submit,
    /// Jump to the registration screen.
    SignUp,
    Quit,
}

pub struct LoginForm {
    pub username: TextField,
    pub password: TextField,
    /// Rejection message to show, if any (Prop)
    pub error: Option<&'static str>,
    /// Storefront branding for the heading (Prop)
    store_name: String,
    /// Index of the focused field (0 = username, 1 = password)
    focus: usize,
}

const FIELD_COUNT: usize = 2;

impl LoginForm {
    pub fn new(store_name: String) -> Self {
        let mut form = Self {
            username: TextField::new("Username"),
            password: TextField::secret("Password"),
            error: None,
            store_name,
            focus: 0,
        };
        form.apply_focus();
        form
    }

    fn apply_focus(&mut self) {
        self.username.focused = self.focus == 0;
        self.password.focused = self.focus == 1;
    }

    fn move_focus(&mut self, step: isize) {
        self.focus = (self.focus as isize + step).rem_euclid(FIELD_COUNT as isize) as usize;
        self.apply_focus();
    }

    fn focused_field(&mut self) -> (&mut TextField, Field) {
        match self.focus {
            0 => (&mut self.username, Field::Username),
            _ => (&mut self.password, Field::Password),
        }
    }
}

impl EventHandler for LoginForm {
    type Event = LoginEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::FocusNext | TuiEvent::CursorDown => {
                self.move_focus(1);
                None
            }
            TuiEvent::FocusPrev | TuiEvent::CursorUp => {
                self.move_focus(-1);
                None
            }
            TuiEvent::Submit => Some(LoginEvent::Submit),
            TuiEvent::OpenRegistration => Some(LoginEvent::SignUp),
            TuiEvent::Escape => Some(LoginEvent::Quit),
            _ => {
                let (field, name) = self.focused_field();
                field
                    .handle_event(event)
                    .map(|FieldEvent::Edited(value)| LoginEvent::Edit(name, value))
            }
        }
    }
}

impl Component for LoginForm {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let column = centered_column(50, area);

        let [heading_area, _, username_area, password_area, _, error_area, hint_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .flex(Flex::Center)
            .areas(column);

        render_heading(frame, heading_area, &self.store_name);
        self.username.render(frame, username_area);
        self.password.render(frame, password_area);
        render_error_line(frame, error_area, self.error);
        render_hint_line(frame, hint_area, "Enter Sign in  Ctrl+R Sign up  Esc Quit");
    }
}

/// Bold store-name heading shared by the form screens.
pub(super) fn render_heading(frame: &mut Frame, area: Rect, text: &str) {
    let heading = Paragraph::new(text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .centered();
    frame.render_widget(heading, area);
}

/// Red rejection line, blank while no error is up.
pub(super) fn render_error_line(frame: &mut Frame, area: Rect, error: Option<&'static str>) {
    if let Some(message) = error {
        let line = Paragraph::new(message)
            .style(Style::default().fg(Color::Red))
            .centered();
        frame.render_widget(line, area);
    }
}

/// Dim key-binding hints at the bottom of a screen.
pub(super) fn render_hint_line(frame: &mut Frame, area: Rect, hints: &str) {
    let line = Paragraph::new(hints)
        .style(Style::default().fg(Color::DarkGray))
        .centered();
    frame.render_widget(line, area);
}
