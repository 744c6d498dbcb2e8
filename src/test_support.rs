//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::catalog::default_catalog;
use crate::core::config::{DEFAULT_ERROR_TIMEOUT_MS, ResolvedConfig};
use crate::core::screen::ScreenId;
use crate::core::state::App;

/// A ResolvedConfig with stock defaults, bypassing file/env lookup.
pub fn test_config() -> ResolvedConfig {
    ResolvedConfig {
        store_name: "Vestenet".to_string(),
        start_screen: ScreenId::Login,
        error_timeout_ms: DEFAULT_ERROR_TIMEOUT_MS,
        products: default_catalog(),
    }
}

/// Creates a test App on the login screen with the demo catalog.
pub fn test_app() -> App {
    App::from_config(&test_config())
}
