//! File-backed preference store.
//!
//! A flat TOML table of quoted keys (`"ui.toolbox.classes" = true`),
//! rewritten atomically on every `set`. Hand-written dotted keys
//! (`ui.toolbox.classes = true`) parse as nested tables and are flattened
//! back into dotted keys on open.

use std::path::{Path, PathBuf};

use toolbox_common::{PreferenceStore, PreferenceStoreError};
use tracing::{debug, info, warn};

use crate::atomic::write_atomic;

/// Preference store persisted to a TOML file.
#[derive(Debug)]
pub struct FilePreferences {
    path: PathBuf,
    values: toml::Table,
}

impl FilePreferences {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PreferenceStoreError> {
        let path = path.into();

        if !path.exists() {
            debug!(path = %path.display(), "no preference file yet, starting empty");
            return Ok(Self {
                path,
                values: toml::Table::new(),
            });
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            PreferenceStoreError::Io(format!("failed to read {}: {e}", path.display()))
        })?;
        let parsed: toml::Table = toml::from_str(&content).map_err(|e| {
            PreferenceStoreError::Unavailable(format!("failed to parse {}: {e}", path.display()))
        })?;
        let mut values = toml::Table::new();
        flatten_into(&mut values, None, parsed);

        info!("loaded {} preferences from {}", values.len(), path.display());
        Ok(Self { path, values })
    }

    /// Open the store at the platform default path.
    pub fn open_default() -> Result<Self, PreferenceStoreError> {
        let path = crate::paths::preferences_file()
            .map_err(|e| PreferenceStoreError::Unavailable(e.to_string()))?;
        Self::open(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn save(&self) -> Result<(), PreferenceStoreError> {
        let content = toml::to_string(&self.values).map_err(|e| {
            PreferenceStoreError::Io(format!("failed to serialize preferences: {e}"))
        })?;
        write_atomic(&self.path, content).map_err(|e| {
            PreferenceStoreError::Io(format!("failed to write {}: {e}", self.path.display()))
        })
    }
}

/// Move every leaf of `table` into `out` under its full dotted key.
///
/// Non-table leaves are kept as they are so `get` can report their type.
/// When a key appears both quoted and nested, the later one in key order
/// wins.
fn flatten_into(out: &mut toml::Table, prefix: Option<&str>, table: toml::Table) {
    for (key, value) in table {
        let full = match prefix {
            Some(prefix) => format!("{prefix}.{key}"),
            None => key,
        };
        match value {
            toml::Value::Table(nested) => flatten_into(out, Some(&full), nested),
            leaf => {
                if out.insert(full.clone(), leaf).is_some() {
                    warn!("preference '{full}' is defined twice, keeping the last one");
                }
            }
        }
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str, default: bool) -> Result<bool, PreferenceStoreError> {
        match self.values.get(key) {
            None => Ok(default),
            Some(toml::Value::Boolean(value)) => Ok(*value),
            Some(other) => Err(PreferenceStoreError::WrongType {
                key: key.to_owned(),
                found: other.type_str().to_owned(),
            }),
        }
    }

    fn set(&mut self, key: &str, value: bool) -> Result<(), PreferenceStoreError> {
        self.values
            .insert(key.to_owned(), toml::Value::Boolean(value));
        self.save()
    }
}
