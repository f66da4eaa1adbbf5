//! Declarative toolbox definition.
//!
//! Groups and items are sequences, so every encoding (TOML arrays of
//! tables, YAML lists) keeps their order.

use serde::{Deserialize, Serialize};

/// One tool in a group: the action it triggers and how it is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSpec {
    #[serde(rename = "action")]
    pub action_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, rename = "icon", skip_serializing_if = "Option::is_none")]
    pub icon_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<String>,
}

impl ActionSpec {
    pub fn new(action_name: impl Into<String>) -> Self {
        Self {
            action_name: action_name.into(),
            label: None,
            icon_id: None,
            shortcut: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_icon(mut self, icon_id: impl Into<String>) -> Self {
        self.icon_id = Some(icon_id.into());
        self
    }

    pub fn with_shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = Some(shortcut.into());
        self
    }

    /// The shortcut, treating an empty string as absent.
    pub fn shortcut(&self) -> Option<&str> {
        self.shortcut.as_deref().filter(|s| !s.is_empty())
    }
}

/// A run of tools shown together, optionally under a collapsible title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, rename = "item")]
    pub items: Vec<ActionSpec>,
}

impl ToolGroup {
    pub fn titled(title: impl Into<String>, items: Vec<ActionSpec>) -> Self {
        Self {
            title: Some(title.into()),
            items,
        }
    }

    pub fn untitled(items: Vec<ActionSpec>) -> Self {
        Self { title: None, items }
    }

    /// The title, treating an empty string as absent.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }
}

/// Ordered groups making up a toolbox.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolboxDefinition {
    #[serde(default, rename = "group")]
    pub groups: Vec<ToolGroup>,
}

impl ToolboxDefinition {
    pub fn new(groups: Vec<ToolGroup>) -> Self {
        Self { groups }
    }

    /// Total number of items across all groups.
    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }

    /// Every item in group order, then item order.
    pub fn items(&self) -> impl Iterator<Item = &ActionSpec> {
        self.groups.iter().flat_map(|g| g.items.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ToolboxDefinition {
        ToolboxDefinition::new(vec![
            ToolGroup::titled(
                "Classes",
                vec![
                    ActionSpec::new("CreateClass")
                        .with_label("Class")
                        .with_icon("icon-class")
                        .with_shortcut("c"),
                    ActionSpec::new("CreateAssoc")
                        .with_label("Association")
                        .with_shortcut("a"),
                ],
            ),
            ToolGroup::untitled(vec![ActionSpec::new("Pointer").with_icon("icon-pointer")]),
        ])
    }

    #[test]
    fn items_are_flattened_in_order() {
        let def = sample();
        let names: Vec<&str> = def.items().map(|s| s.action_name.as_str()).collect();
        assert_eq!(names, vec!["CreateClass", "CreateAssoc", "Pointer"]);
        assert_eq!(def.item_count(), 3);
    }

    #[test]
    fn empty_title_and_shortcut_count_as_absent() {
        let group = ToolGroup::titled("", vec![]);
        assert_eq!(group.title(), None);

        let spec = ActionSpec::new("X").with_shortcut("");
        assert_eq!(spec.shortcut(), None);
    }

    #[test]
    fn json_keeps_order_and_short_field_names() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"action\":\"CreateClass\""));
        assert!(json.contains("\"icon\":\"icon-class\""));
        let back: ToolboxDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }
}
