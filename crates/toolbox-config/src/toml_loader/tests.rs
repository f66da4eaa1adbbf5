//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;
use toolbox_common::{ConfigError, IconSize};

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_toolbox_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[window]
title = "UML Modeler"
resizable = false

[toolbox]
icon_size = "menu"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.window.title, "UML Modeler");
    assert!(!config.window.resizable);
    assert_eq!(config.toolbox.icon_size, IconSize::Menu);
    // Defaults preserved
    assert_eq!(config.window.width, 800);
    assert_eq!(config.toolbox.spacing, 2);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_config_with_invalid_values_keeps_them() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[toolbox]\nwidth = 1\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.toolbox.width, 1);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("toolbox").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.window.title, "Toolbox");
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::AppConfig;

    let config: AppConfig = toml::from_str(default_config_toml()).unwrap();
    assert_eq!(config.window.title, "Toolbox");
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("toolbox"));
        assert!(path_str.ends_with("config.toml"));
    }
}
