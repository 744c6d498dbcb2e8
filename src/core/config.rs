//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.vestenet/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::catalog::{Product, default_catalog};
use crate::core::screen::ScreenId;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct VestenetConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub products: Vec<Product>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub store_name: Option<String>,
    pub start_screen: Option<String>,
    pub error_timeout_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_STORE_NAME: &str = "Vestenet";
/// How long a rejection message stays on screen before it is auto-dismissed.
pub const DEFAULT_ERROR_TIMEOUT_MS: u64 = 3000;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub store_name: String,
    pub start_screen: ScreenId,
    pub error_timeout_ms: u64,
    pub products: Vec<Product>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.vestenet/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".vestenet").join("config.toml"))
}

/// Load config from `~/.vestenet/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `VestenetConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<VestenetConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(VestenetConfig::default());
        }
    };

    if !path.exists() {
        info!(
            "No config file found, generating default at {}",
            path.display()
        );
        generate_default_config(&path);
        return Ok(VestenetConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: VestenetConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Vestenet Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# store_name = "Vestenet"
# start_screen = "login"             # "login", "registration" or "main"
# error_timeout_ms = 3000            # How long rejection messages stay visible

# [[products]]
# name = "Camisa Polo"
# price = "R$ 79,90"

# [[products]]
# name = "Calça Jeans"
# price = "R$ 120,00"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_screen` is the `--screen` flag (None = not specified).
pub fn resolve(config: &VestenetConfig, cli_screen: Option<&str>) -> ResolvedConfig {
    // Start screen: CLI → env → config → default
    let start_screen = cli_screen
        .map(|s| s.to_string())
        .or_else(|| std::env::var("VESTENET_START_SCREEN").ok())
        .or_else(|| config.general.start_screen.clone())
        .map(|route| {
            ScreenId::from_route(&route).unwrap_or_else(|| {
                warn!("Unknown start screen {route:?}, falling back to login");
                ScreenId::Login
            })
        })
        .unwrap_or(ScreenId::Login);

    // Store name: env → config → default
    let store_name = std::env::var("VESTENET_STORE_NAME")
        .ok()
        .or_else(|| config.general.store_name.clone())
        .unwrap_or_else(|| DEFAULT_STORE_NAME.to_string());

    // Error timeout: env → config → default
    let error_timeout_ms = std::env::var("VESTENET_ERROR_TIMEOUT_MS")
        .ok()
        .and_then(|v| v.parse().ok())
        .or(config.general.error_timeout_ms)
        .unwrap_or(DEFAULT_ERROR_TIMEOUT_MS);

    // Catalog: config entries, or the demo inventory when none are given
    let products = if config.products.is_empty() {
        default_catalog()
    } else {
        config.products.clone()
    };

    ResolvedConfig {
        store_name,
        start_screen,
        error_timeout_ms,
        products,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = VestenetConfig::default();
        assert!(config.products.is_empty());
        assert!(config.general.store_name.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = VestenetConfig::default();
        let resolved = resolve(&config, None);
        assert_eq!(resolved.store_name, DEFAULT_STORE_NAME);
        assert_eq!(resolved.start_screen, ScreenId::Login);
        assert_eq!(resolved.error_timeout_ms, DEFAULT_ERROR_TIMEOUT_MS);
        assert_eq!(resolved.products, default_catalog());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = VestenetConfig {
            general: GeneralConfig {
                store_name: Some("Loja Teste".to_string()),
                start_screen: Some("main".to_string()),
                error_timeout_ms: Some(500),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.store_name, "Loja Teste");
        assert_eq!(resolved.start_screen, ScreenId::Main);
        assert_eq!(resolved.error_timeout_ms, 500);
    }

    #[test]
    fn test_resolve_cli_screen_wins() {
        let config = VestenetConfig {
            general: GeneralConfig {
                start_screen: Some("main".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some("registration"));
        assert_eq!(resolved.start_screen, ScreenId::Registration);
    }

    #[test]
    fn test_resolve_bad_screen_falls_back_to_login() {
        let config = VestenetConfig::default();
        let resolved = resolve(&config, Some("checkout"));
        assert_eq!(resolved.start_screen, ScreenId::Login);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
store_name = "Vestenet Dev"
start_screen = "registration"
error_timeout_ms = 1500

[[products]]
name = "Camisa Polo"
price = "R$ 79,90"

[[products]]
name = "Calça Jeans"
price = "R$ 120,00"
"#;
        let config: VestenetConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.store_name.as_deref(), Some("Vestenet Dev"));
        assert_eq!(config.general.error_timeout_ms, Some(1500));
        assert_eq!(config.products.len(), 2);
        assert_eq!(config.products[1].name, "Calça Jeans");
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[general]
error_timeout_ms = 1000
"#;
        let config: VestenetConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.error_timeout_ms, Some(1000));
        assert!(config.general.store_name.is_none());
        assert!(config.products.is_empty());
    }
}
