//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod logging;
mod toolbox;
mod window;

pub use logging::*;
pub use toolbox::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Every option has a default; only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub toolbox: ToolboxConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolbox_common::IconSize;

    #[test]
    fn defaults_are_sensible() {
        let config = AppConfig::default();
        assert_eq!(config.window.title, "Toolbox");
        assert!(config.window.resizable);
        assert_eq!(config.window.icons.len(), 4);
        assert_eq!(config.toolbox.icon_size, IconSize::LargeToolbar);
        assert!(config.toolbox.definition.is_none());
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
[window]
title = "Modeler"

[toolbox]
icon_size = "small_toolbar"
"#,
        )
        .unwrap();
        assert_eq!(config.window.title, "Modeler");
        assert_eq!(config.window.width, 800);
        assert_eq!(config.toolbox.icon_size, IconSize::SmallToolbar);
        assert_eq!(config.toolbox.width, 160);
    }

    #[test]
    fn log_level_parses_uppercase() {
        let config: AppConfig = toml::from_str("[logging]\nlevel = \"DEBUG\"\n").unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.level.directive(), "debug");
        assert_eq!(LogLevel::Warning.directive(), "warn");
    }
}
