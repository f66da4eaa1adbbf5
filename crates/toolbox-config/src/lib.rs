//! Toolbox configuration system.
//!
//! TOML-based app configuration with validation, toolbox definition
//! loading (TOML or YAML), and a file-backed preference store. All config
//! sections use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use toolbox_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

mod atomic;
pub mod definition;
pub mod paths;
pub mod preferences;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use definition::{default_definition, load_definition_from_path, resolve_definition};
pub use preferences::FilePreferences;
pub use schema::{AppConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use toolbox_common::ConfigError;

/// Load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, and validates the result.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &AppConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
