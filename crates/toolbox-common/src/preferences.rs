//! Preference store interface and an in-memory implementation.

use std::collections::BTreeMap;

use crate::errors::PreferenceStoreError;

/// Prefix shared by every toolbox group preference key.
pub const TOOLBOX_KEY_PREFIX: &str = "ui.toolbox.";

/// Flat key → boolean store for persisted UI state.
///
/// Reads go through `&self` and writes through `&mut self`, so a single
/// owner serializes all writes.
pub trait PreferenceStore {
    /// Read a flag, returning `default` when the key is absent.
    fn get(&self, key: &str, default: bool) -> Result<bool, PreferenceStoreError>;

    /// Store a flag.
    fn set(&mut self, key: &str, value: bool) -> Result<(), PreferenceStoreError>;
}

/// Derive the preference key for a group title.
///
/// `"Structure"` → `"ui.toolbox.structure"`, `"Use Cases"` →
/// `"ui.toolbox.use-cases"`. Not injective: distinct titles that differ only
/// in case or spacing share a key.
pub fn toolbox_preference_key(title: &str) -> String {
    format!(
        "{TOOLBOX_KEY_PREFIX}{}",
        title.to_lowercase().replace(' ', "-")
    )
}

/// In-memory store, for tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: BTreeMap<String, bool>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: bool) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str, default: bool) -> Result<bool, PreferenceStoreError> {
        Ok(self.values.get(key).copied().unwrap_or(default))
    }

    fn set(&mut self, key: &str, value: bool) -> Result<(), PreferenceStoreError> {
        self.values.insert(key.to_owned(), value);
        Ok(())
    }
}
