//! # Registration Screen
//!
//! Username, email, password and CPF fields. Enter submits, Esc goes back
//! to the login screen.
//!
//! The CPF field echoes whatever core state stored for it, which is the
//! masked `DDD.DDD.DDD-DD` form as soon as eleven digits are in. The
//! masking itself lives in `core::validation`; this component never
//! formats anything.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};

use crate::core::form::Field;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::centered_column;
use crate::tui::components::login::{render_error_line, render_heading, render_hint_line};
use crate::tui::components::text_field::{FIELD_HEIGHT, FieldEvent, TextField};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the registration form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationEvent {
    Edit(Field, String),
    Submit,
    /// Return to the login screen without registering.
    Back,
}

pub struct RegistrationForm {
    pub username: TextField,
    pub email: TextField,
    pub password: TextField,
    pub cpf: TextField,
    /// Rejection message to show, if any (Prop)
    pub error: Option<&'static str>,
    /// Index of the focused field, in render order
    focus: usize,
}

const FIELD_COUNT: usize = 4;

impl RegistrationForm {
    pub fn new() -> Self {
        let mut form = Self {
            username: TextField::new("Username"),
            email: TextField::new("Email"),
            password: TextField::secret("Password"),
            cpf: TextField::new("CPF"),
            error: None,
            focus: 0,
        };
        form.apply_focus();
        form
    }

    fn apply_focus(&mut self) {
        self.username.focused = self.focus == 0;
        self.email.focused = self.focus == 1;
        self.password.focused = self.focus == 2;
        self.cpf.focused = self.focus == 3;
    }

    fn move_focus(&mut self, step: isize) {
        self.focus = (self.focus as isize + step).rem_euclid(FIELD_COUNT as isize) as usize;
        self.apply_focus();
    }

    fn focused_field(&mut self) -> (&mut TextField, Field) {
        match self.focus {
            0 => (&mut self.username, Field::Username),
            1 => (&mut self.email, Field::Email),
            2 => (&mut self.password, Field::Password),
            _ => (&mut self.cpf, Field::Cpf),
        }
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for RegistrationForm {
    type Event = RegistrationEvent;

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
            TuiEvent::Submit => Some(RegistrationEvent::Submit),
            TuiEvent::Escape => Some(RegistrationEvent::Back),
            _ => {
                let (field, name) = self.focused_field();
                field
                    .handle_event(event)
                    .map(|FieldEvent::Edited(value)| RegistrationEvent::Edit(name, value))
            }
        }
    }
}

impl Component for RegistrationForm {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let column = centered_column(50, area);

        let [heading_area, _, username_area, email_area, password_area, cpf_area, _, error_area, hint_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .flex(Flex::Center)
            .areas(column);

        render_heading(frame, heading_area, "Create account");
        self.username.render(frame, username_area);
        self.email.render(frame, email_area);
        self.password.render(frame, password_area);
        self.cpf.render(frame, cpf_area);
        render_error_line(frame, error_area, self.error);
        render_hint_line(frame, hint_area, "Enter Register  Esc Back");
    }
}
