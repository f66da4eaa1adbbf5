//! Full configuration validation.
//!
//! Validates numeric ranges and required strings. Each section has its own
//! submodule; this orchestrator calls them all and collects errors into a
//! single `ConfigError`.

mod helpers;
mod toolbox;
mod window;


use crate::schema::AppConfig;
use toolbox_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    window::validate_window(&mut errors, config);
    toolbox::validate_toolbox(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
