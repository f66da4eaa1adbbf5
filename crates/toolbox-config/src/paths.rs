//! Platform paths for config, preferences and the toolbox definition.

use std::path::PathBuf;

use toolbox_common::ConfigError;

pub(crate) const APP_NAME: &str = "toolbox";

/// Returns the platform-specific configuration directory.
///
/// - macOS: `~/Library/Application Support/toolbox`
/// - Linux: `$XDG_CONFIG_HOME/toolbox` (defaults to `~/.config/toolbox`)
/// - Windows: `%APPDATA%\toolbox`
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// `config_dir()/config.toml`
pub fn config_file() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// `config_dir()/preferences.toml`
pub fn preferences_file() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("preferences.toml"))
}

/// `config_dir()/toolbox.toml`
pub fn definition_file() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("toolbox.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_live_in_config_dir() {
        // Some CI environments have no config dir at all.
        if let Ok(dir) = config_dir() {
            assert!(dir.ends_with(APP_NAME));
            assert_eq!(config_file().unwrap(), dir.join("config.toml"));
            assert_eq!(preferences_file().unwrap(), dir.join("preferences.toml"));
            assert_eq!(definition_file().unwrap(), dir.join("toolbox.toml"));
        }
    }
}
