//! # TextField Component
//!
//! Single-line labeled input field used by the login and registration
//! forms.
//!
//! ## State Management
//!
//! The echoed value belongs to core state: every keystroke is emitted as a
//! `FieldEvent::Edited` carrying the full new value, and the parent syncs
//! the stored value back in before the next frame. The round trip matters
//! for the CPF field, where the stored value is the masked form rather
//! than the raw keystrokes. Cursor position and focus are presentation
//! state and live here.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Rendered height of a field: one content line plus borders.
pub const FIELD_HEIGHT: u16 = 3;

/// High-level events emitted by the TextField.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// The content changed; payload is the full new value.
    Edited(String),
}

/// Single-line text input with a border label.
pub struct TextField {
    /// Border title (Prop)
    pub label: &'static str,
    /// Render content as bullets (password entry)
    pub secret: bool,
    /// Focused fields get the bright border and the terminal cursor
    pub focused: bool,
    /// Echoed value, synced from core state after every dispatch
    value: String,
    /// Cursor position as byte offset in value (0..=value.len())
    cursor: usize,
}

impl TextField {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            secret: false,
            focused: false,
            value: String::new(),
            cursor: 0,
        }
    }

    /// A field whose content renders as bullets.
    pub fn secret(label: &'static str) -> Self {
        Self {
            secret: true,
            ..Self::new(label)
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Adopt the value held in core state. When the stored value differs
    /// from the local echo (the CPF mask rewrote the input), the cursor
    /// jumps to the end of the new value.
    pub fn sync(&mut self, stored: &str) {
        if self.value != stored {
            self.value = stored.to_string();
            self.cursor = self.value.len();
        }
    }

    fn edited(&self) -> Option<FieldEvent> {
        Some(FieldEvent::Edited(self.value.clone()))
    }

    fn display_value(&self) -> String {
        if self.secret {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    /// Display column of the cursor within the content line.
    fn cursor_col(&self) -> u16 {
        if self.secret {
            // Bullets are one cell each regardless of the hidden character.
            self.value[..self.cursor].chars().count() as u16
        } else {
            self.value[..self.cursor].width() as u16
        }
    }
}

impl Component for TextField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.label);

        // Keep the cursor visible when the content outgrows the field.
        let inner_width = area.width.saturating_sub(2);
        let cursor_col = self.cursor_col();
        let h_scroll = cursor_col.saturating_sub(inner_width.saturating_sub(1));

        let input = Paragraph::new(self.display_value())
            .block(block)
            .scroll((0, h_scroll));
        frame.render_widget(input, area);

        if self.focused {
            frame.set_cursor_position((area.x + 1 + cursor_col - h_scroll, area.y + 1));
        }
    }
}

impl EventHandler for TextField {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                if c.is_control() {
                    return None;
                }
                self.value.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                self.edited()
            }
            TuiEvent::Paste(text) => {
                // Single-line field: control characters (newlines included)
                // are dropped from pasted content.
                let text: String = text.chars().filter(|c| !c.is_control()).collect();
                if text.is_empty() {
                    return None;
                }
                self.value.insert_str(self.cursor, &text);
                self.cursor += text.len();
                self.edited()
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.value, self.cursor);
                    self.value.drain(prev..self.cursor);
                    self.cursor = prev;
                    self.edited()
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.value.len() {
                    let next = next_char_boundary(&self.value, self.cursor);
                    self.value.drain(self.cursor..next);
                    self.edited()
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor = prev_char_boundary(&self.value, self.cursor);
                }
                None
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.value.len() {
                    self.cursor = next_char_boundary(&self.value, self.cursor);
                }
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.value.len();
                None
            }
            _ => None,
        }
    }
}

/// Largest char boundary strictly before `pos`.
fn prev_char_boundary(s: &str, pos: usize) -> usize {
    let mut p = pos - 1;
    while !s.is_char_boundary(p) {
        p -= 1;
    }
    p
}

/// Smallest char boundary strictly after `pos`.
fn next_char_boundary(s: &str, pos: usize) -> usize {
    let mut p = pos + 1;
    while p < s.len() && !s.is_char_boundary(p) {
        p += 1;
    }
    p
}
