//! Stand-in UI manager for running without a window system.

use std::collections::BTreeMap;

use toolbox_ui::{ShortcutTable, UiManager};

/// Widgets are named placeholders; the accelerator group is the list of
/// `(shortcut, action)` bindings.
#[derive(Debug, Default)]
pub struct HeadlessUi {
    widgets: BTreeMap<String, String>,
    accelerators: Vec<(String, String)>,
}

impl HeadlessUi {
    pub fn new(shortcuts: &ShortcutTable) -> Self {
        Self {
            widgets: BTreeMap::new(),
            accelerators: shortcuts
                .iter()
                .map(|(s, a)| (s.to_owned(), a.to_string()))
                .collect(),
        }
    }

    /// Register a widget under `path`. Empty paths are ignored.
    pub fn register(&mut self, path: &str, name: &str) {
        if !path.is_empty() {
            self.widgets.insert(path.to_owned(), name.to_owned());
        }
    }
}

impl UiManager for HeadlessUi {
    type Widget = String;
    type AccelGroup = Vec<(String, String)>;

    fn widget(&self, path: &str) -> Option<String> {
        self.widgets.get(path).cloned()
    }

    fn accel_group(&self) -> Vec<(String, String)> {
        self.accelerators.clone()
    }
}
