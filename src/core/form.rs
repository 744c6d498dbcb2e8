//! Form field storage for the active screen.
//!
//! One [`FormState`] holds the text of every input field the app knows
//! about; each screen only reads the fields it renders. Values are always
//! defined strings (empty when untouched), and the whole thing is reset on
//! navigation, so nothing typed on one screen leaks into the next.

use crate::core::validation::mask_cpf;

/// Names of the editable fields across all screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    Password,
    Email,
    Cpf,
}

/// Mutable text contents of the active screen's fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    username: String,
    password: String,
    email: String,
    cpf: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a field edit, replacing the previous value unconditionally.
    ///
    /// The CPF field is special-cased: the masked form is what gets stored,
    /// so the echoed value is always `mask_cpf(raw digits)` rather than the
    /// raw keystrokes.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Username => self.username = value,
            Field::Password => self.password = value,
            Field::Email => self.email = value,
            Field::Cpf => self.cpf = mask_cpf(&value),
        }
    }

    /// Current value of a field, for display echo and validation.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Password => &self.password,
            Field::Email => &self.email,
            Field::Cpf => &self.cpf,
        }
    }

    /// Discard everything, as when a screen unmounts.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
