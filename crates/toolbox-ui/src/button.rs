//! Tool buttons: sustained toggles bound to one action.

use serde::Serialize;
use toolbox_common::{ActionName, IconSize};

use crate::drag::{DragPayload, DragSource, DragTarget};

/// Index of a button in the toolbox's flat button list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ButtonId(pub usize);

/// What a button draws: its icon, or else text. Never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ButtonContent {
    Icon(String),
    Label(String),
}

/// Button border style. Tool buttons are flat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Relief {
    Normal,
    None,
}

/// A toggle button bound to a named action.
///
/// The button stays pressed once toggled on. Mapping on/off to tool
/// selection is the host's job; the button only keeps the state and the
/// action identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionButton {
    action: ActionName,
    label: Option<String>,
    icon_id: Option<String>,
    shortcut: Option<String>,
    icon_size: IconSize,
    active: bool,
}

impl ActionButton {
    pub fn new(
        action: ActionName,
        label: Option<String>,
        icon_id: Option<String>,
        shortcut: Option<String>,
    ) -> Self {
        Self {
            action,
            label: label.filter(|l| !l.is_empty()),
            icon_id: icon_id.filter(|i| !i.is_empty()),
            shortcut: shortcut.filter(|s| !s.is_empty()),
            icon_size: IconSize::default(),
            active: false,
        }
    }

    pub fn with_icon_size(mut self, icon_size: IconSize) -> Self {
        self.icon_size = icon_size;
        self
    }

    pub fn action(&self) -> &ActionName {
        &self.action
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn icon_id(&self) -> Option<&str> {
        self.icon_id.as_deref()
    }

    pub fn shortcut(&self) -> Option<&str> {
        self.shortcut.as_deref()
    }

    pub fn icon_size(&self) -> IconSize {
        self.icon_size
    }

    pub fn relief(&self) -> Relief {
        Relief::None
    }

    /// The icon when there is one, otherwise the label, otherwise the
    /// action name.
    pub fn content(&self) -> ButtonContent {
        match (&self.icon_id, &self.label) {
            (Some(icon), _) => ButtonContent::Icon(icon.clone()),
            (None, Some(label)) => ButtonContent::Label(label.clone()),
            (None, None) => ButtonContent::Label(self.action.to_string()),
        }
    }

    /// `"Label (shortcut)"`, or just the label without a shortcut.
    /// No tooltip without a label.
    pub fn tooltip(&self) -> Option<String> {
        let label = self.label.as_deref()?;
        Some(match self.shortcut.as_deref() {
            Some(shortcut) => format!("{label} ({shortcut})"),
            None => label.to_owned(),
        })
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns `true` if the state changed.
    pub fn set_active(&mut self, active: bool) -> bool {
        let changed = self.active != active;
        self.active = active;
        changed
    }

    /// Flip the pressed state and return the new one.
    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }

    pub fn drag_source(&self) -> DragSource {
        DragSource::for_icon(self.icon_id.clone())
    }

    /// Data for a drop target that negotiated `target`.
    pub fn drag_data_get(&self, target: DragTarget) -> DragPayload {
        DragPayload::new(target, &self.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button(label: Option<&str>, icon: Option<&str>, shortcut: Option<&str>) -> ActionButton {
        ActionButton::new(
            ActionName::new("CreateClass").unwrap(),
            label.map(String::from),
            icon.map(String::from),
            shortcut.map(String::from),
        )
    }

    #[test]
    fn icon_wins_over_label() {
        let b = button(Some("Class"), Some("icon-class"), None);
        assert_eq!(b.content(), ButtonContent::Icon("icon-class".into()));
    }

    #[test]
    fn label_without_icon() {
        let b = button(Some("Class"), None, None);
        assert_eq!(b.content(), ButtonContent::Label("Class".into()));
    }

    #[test]
    fn action_name_without_label_or_icon() {
        let b = button(None, None, None);
        assert_eq!(b.content(), ButtonContent::Label("CreateClass".into()));
    }

    #[test]
    fn tooltip_forms() {
        assert_eq!(
            button(Some("Class"), None, Some("c")).tooltip().as_deref(),
            Some("Class (c)")
        );
        assert_eq!(
            button(Some("Class"), None, None).tooltip().as_deref(),
            Some("Class")
        );
        assert_eq!(button(None, None, Some("c")).tooltip(), None);
        assert_eq!(button(Some(""), None, Some("c")).tooltip(), None);
    }

    #[test]
    fn toggle_is_sustained() {
        let mut b = button(None, None, None);
        assert!(!b.is_active());
        assert!(b.toggle());
        assert!(b.is_active());
        assert!(!b.set_active(true));
        assert!(b.set_active(false));
        assert!(!b.is_active());
        assert_eq!(b.action(), "CreateClass");
    }

    #[test]
    fn drag_offers_identical_bytes_for_every_target() {
        let b = button(Some("Class"), Some("icon-class"), Some("c"));
        let source = b.drag_source();
        assert_eq!(source.icon_id.as_deref(), Some("icon-class"));

        let payloads: Vec<_> = source
            .targets
            .iter()
            .map(|t| b.drag_data_get(*t))
            .collect();
        assert_eq!(payloads.len(), 3);
        for payload in &payloads {
            assert_eq!(payload.data(), b"CreateClass");
        }
    }

    #[test]
    fn flat_with_default_icon_size() {
        let b = button(None, Some("icon"), None);
        assert_eq!(b.relief(), Relief::None);
        assert_eq!(b.icon_size(), IconSize::LargeToolbar);
        let b = b.with_icon_size(IconSize::Menu);
        assert_eq!(b.icon_size(), IconSize::Menu);
    }
}
