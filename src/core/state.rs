//! # Application State
//!
//! Core business state for Vestenet. This module contains domain state only -
//! no TUI-specific types. Presentation state (cursors, focus, scroll) lives
//! in the `tui` module.
//!
//! ```text
//! App
//! ├── screen: ScreenId              // active screen (router input)
//! ├── form: FormState               // field contents of the active screen
//! ├── error: Option<&str>           // rejection message currently shown
//! ├── error_generation: u64         // guards stale dismissal timers
//! ├── status_message: String        // title bar text
//! ├── catalog: Vec<Product>         // storefront inventory
//! ├── store_name: String            // branding, from config
//! └── error_timeout_ms: u64         // auto-dismiss delay, from config
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::catalog::Product;
use crate::core::config::ResolvedConfig;
use crate::core::form::FormState;
use crate::core::screen::ScreenId;

pub struct App {
    pub screen: ScreenId,
    pub form: FormState,
    /// Rejection message currently on screen, if any.
    pub error: Option<&'static str>,
    /// Bumped whenever the error slot changes hands. A scheduled dismissal
    /// only fires if it still matches; see `Action::DismissError`.
    pub error_generation: u64,
    pub status_message: String,
    pub catalog: Vec<Product>,
    pub store_name: String,
    pub error_timeout_ms: u64,
}

impl App {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            screen: config.start_screen,
            form: FormState::new(),
            error: None,
            error_generation: 0,
            status_message: format!("Welcome to {}!", config.store_name),
            catalog: config.products.clone(),
            store_name: config.store_name.clone(),
            error_timeout_ms: config.error_timeout_ms,
        }
    }

    /// Move to another screen: the old screen's form unmounts (fields are
    /// discarded), the error slot empties, and any pending dismissal timer
    /// goes stale.
    pub fn navigate(&mut self, destination: ScreenId) {
        self.screen = destination;
        self.form.reset();
        self.error = None;
        self.error_generation += 1;
        self.status_message.clear();
    }
}
