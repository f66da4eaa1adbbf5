//! Toolbox panel configuration types.

use serde::{Deserialize, Serialize};
use toolbox_common::IconSize;

/// Toolbox panel settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolboxConfig {
    /// Definition file (TOML or YAML). `None` uses `toolbox.toml` in the
    /// config directory, falling back to the built-in definition.
    pub definition: Option<String>,
    /// Preference file. `None` uses `preferences.toml` in the config directory.
    pub preferences: Option<String>,
    pub icon_size: IconSize,
    /// Panel width in pixels used for wrapping buttons (valid range: 40-2000).
    pub width: u32,
    /// Gap between buttons in pixels (valid range: 0-32).
    pub spacing: u32,
    /// Padding inside each button around its icon or label (valid range: 0-16).
    pub button_padding: u32,
}

impl Default for ToolboxConfig {
    fn default() -> Self {
        Self {
            definition: None,
            preferences: None,
            icon_size: IconSize::LargeToolbar,
            width: 160,
            spacing: 2,
            button_padding: 4,
        }
    }
}
