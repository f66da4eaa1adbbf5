//! Shortcut table: key string → action name.
//!
//! Filled once while compiling a definition and read-only afterwards. The
//! external accelerator dispatcher binds keys from it; nothing here
//! intercepts keystrokes.

use std::collections::BTreeMap;

use serde::Serialize;
use toolbox_common::{ActionName, DefinitionError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ShortcutTable {
    bindings: BTreeMap<String, ActionName>,
}

impl ShortcutTable {
    /// Bind `shortcut` to `action`, refusing to rebind a taken shortcut.
    pub(crate) fn insert(&mut self, shortcut: &str, action: &ActionName) -> Result<(), DefinitionError> {
        if let Some(existing) = self.bindings.get(shortcut) {
            return Err(DefinitionError::DuplicateShortcut {
                shortcut: shortcut.to_owned(),
                first: existing.to_string(),
                second: action.to_string(),
            });
        }
        self.bindings.insert(shortcut.to_owned(), action.clone());
        Ok(())
    }

    pub fn lookup(&self, shortcut: &str) -> Option<&ActionName> {
        self.bindings.get(shortcut)
    }

    /// Reverse lookup. An action may be reachable from several shortcuts;
    /// the first in key order is returned.
    pub fn shortcut_for_action(&self, action: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(_, a)| a.as_str() == action)
            .map(|(s, _)| s.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ActionName)> {
        self.bindings.iter().map(|(s, a)| (s.as_str(), a))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> ActionName {
        ActionName::new(s).unwrap()
    }

    #[test]
    fn insert_and_lookup() {
        let mut table = ShortcutTable::default();
        table.insert("c", &name("CreateClass")).unwrap();
        table.insert("a", &name("CreateAssoc")).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("c"), Some(&name("CreateClass")));
        assert_eq!(table.lookup("z"), None);
        assert_eq!(table.shortcut_for_action("CreateAssoc"), Some("a"));
        assert_eq!(table.shortcut_for_action("Pointer"), None);
    }

    #[test]
    fn duplicate_is_rejected_and_first_binding_kept() {
        let mut table = ShortcutTable::default();
        table.insert("c", &name("CreateClass")).unwrap();

        let err = table.insert("c", &name("CreateComponent")).unwrap_err();
        assert_eq!(
            err,
            DefinitionError::DuplicateShortcut {
                shortcut: "c".into(),
                first: "CreateClass".into(),
                second: "CreateComponent".into(),
            }
        );
        assert_eq!(table.lookup("c"), Some(&name("CreateClass")));
    }

    #[test]
    fn shortcuts_are_case_sensitive() {
        let mut table = ShortcutTable::default();
        table.insert("c", &name("CreateClass")).unwrap();
        table.insert("C", &name("CreateComponent")).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn serializes_as_map() {
        let mut table = ShortcutTable::default();
        table.insert("a", &name("CreateAssoc")).unwrap();
        table.insert("c", &name("CreateClass")).unwrap();
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"a":"CreateAssoc","c":"CreateClass"}"#);
    }
}
