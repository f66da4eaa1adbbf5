use std::path::PathBuf;

/// A toolbox definition that cannot be compiled.
///
/// Every variant aborts construction. Nothing is silently overwritten.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DefinitionError {
    #[error("empty action name in group {group}, item {index}")]
    EmptyActionName { group: usize, index: usize },

    #[error("duplicate shortcut '{shortcut}': assigned to both '{first}' and '{second}'")]
    DuplicateShortcut {
        shortcut: String,
        first: String,
        second: String,
    },

    #[error("preference key '{key}' derived from both '{first}' and '{second}'")]
    PreferenceKeyCollision {
        key: String,
        first: String,
        second: String,
    },
}

/// A failed read or write against a preference store.
///
/// Never fatal: callers log it and fall back to the default state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreferenceStoreError {
    #[error("preference store unavailable: {0}")]
    Unavailable(String),

    #[error("preference '{key}' has type {found}, expected boolean")]
    WrongType { key: String, found: String },

    #[error("preference store io error: {0}")]
    Io(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ToolboxError {
    #[error(transparent)]
    Definition(#[from] DefinitionError),

    #[error(transparent)]
    Preferences(#[from] PreferenceStoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
