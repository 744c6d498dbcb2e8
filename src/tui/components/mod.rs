//! # TUI Components
//!
//! One file per screen or widget, each carrying its state types, event
//! handling, rendering and tests:
//!
//! - `TitleBar`: one-line header (stateless, props only)
//! - `TextField`: single-line input with cursor and optional masking
//! - `LoginForm` / `RegistrationForm`: the two form screens
//! - `Storefront`: the signed-in product listing
//!
//! Components receive external data as props synced from app state each
//! frame and emit screen-level events that the main loop turns into
//! `core::Action`s. They never reach into `App` themselves.

use ratatui::layout::{Constraint, Layout, Rect};

pub mod login;
pub mod registration;
pub mod storefront;
pub mod text_field;
pub mod title_bar;

pub use login::{LoginEvent, LoginForm};
pub use registration::{RegistrationEvent, RegistrationForm};
pub use storefront::{Storefront, StorefrontEvent};
pub use title_bar::TitleBar;

/// Horizontally centered column taking `percent_x` of the outer rect.
pub(crate) fn centered_column(percent_x: u16, outer: Rect) -> Rect {
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(outer);
    center
}
