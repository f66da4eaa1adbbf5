//! Definition → widget tree compiler.

use std::collections::HashMap;

use serde::Serialize;
use toolbox_common::{
    toolbox_preference_key, ActionName, DefinitionError, IconSize, PreferenceStore,
    ToolboxDefinition,
};
use tracing::debug;

use crate::button::{ActionButton, ButtonId};
use crate::group::GroupPanel;
use crate::shortcuts::ShortcutTable;
use crate::wrap::WrapBox;

/// One entry of the toolbox's vertical stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    /// A titled, collapsible group.
    Group(GroupPanel),
    /// An untitled group: always visible, no disclosure.
    Flow(WrapBox),
}

impl Section {
    pub fn content(&self) -> &WrapBox {
        match self {
            Section::Group(panel) => panel.content(),
            Section::Flow(wrap) => wrap,
        }
    }

    pub fn as_group(&self) -> Option<&GroupPanel> {
        match self {
            Section::Group(panel) => Some(panel),
            Section::Flow(_) => None,
        }
    }

    /// Whether the buttons are currently shown.
    pub fn is_visible(&self) -> bool {
        match self {
            Section::Group(panel) => panel.is_expanded(),
            Section::Flow(_) => true,
        }
    }
}

/// Output of [`ToolboxBuilder::compile`].
///
/// Fields are read-only outside this crate, so every `Compiled` has passed
/// the checks in `compile`.
///
/// ```compile_fail
/// use toolbox_ui::Compiled;
///
/// let forged = Compiled {
///     sections: Vec::new(),
///     buttons: Vec::new(),
///     shortcuts: Default::default(),
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct Compiled {
    pub(crate) sections: Vec<Section>,
    pub(crate) buttons: Vec<ActionButton>,
    pub(crate) shortcuts: ShortcutTable,
}

impl Compiled {
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn buttons(&self) -> &[ActionButton] {
        &self.buttons
    }

    pub fn shortcuts(&self) -> &ShortcutTable {
        &self.shortcuts
    }
}

/// Compiles a [`ToolboxDefinition`] into sections, buttons and shortcuts.
///
/// Output order mirrors the definition exactly: sections follow group
/// order, buttons follow item order across all groups.
pub struct ToolboxBuilder<'a> {
    preferences: &'a dyn PreferenceStore,
    icon_size: IconSize,
}

impl<'a> ToolboxBuilder<'a> {
    pub fn new(preferences: &'a dyn PreferenceStore) -> Self {
        Self {
            preferences,
            icon_size: IconSize::default(),
        }
    }

    pub fn with_icon_size(mut self, icon_size: IconSize) -> Self {
        self.icon_size = icon_size;
        self
    }

    /// Fails on an empty action name, a shortcut used twice, or two group
    /// titles mapping to one preference key.
    pub fn compile(&self, definition: &ToolboxDefinition) -> Result<Compiled, DefinitionError> {
        let mut compiled = Compiled::default();
        let mut keys: HashMap<String, &str> = HashMap::new();

        for (group_index, group) in definition.groups.iter().enumerate() {
            let mut wrap = WrapBox::new();

            for (index, spec) in group.items.iter().enumerate() {
                let action = ActionName::new(spec.action_name.as_str()).ok_or(
                    DefinitionError::EmptyActionName {
                        group: group_index,
                        index,
                    },
                )?;

                if let Some(shortcut) = spec.shortcut() {
                    compiled.shortcuts.insert(shortcut, &action)?;
                }

                let button = ActionButton::new(
                    action,
                    spec.label.clone(),
                    spec.icon_id.clone(),
                    spec.shortcut.clone(),
                )
                .with_icon_size(self.icon_size);

                wrap.add(ButtonId(compiled.buttons.len()));
                compiled.buttons.push(button);
            }

            let section = match group.title() {
                Some(title) => {
                    let key = toolbox_preference_key(title);
                    if let Some(first) = keys.get(&key) {
                        return Err(DefinitionError::PreferenceKeyCollision {
                            key,
                            first: (*first).to_owned(),
                            second: title.to_owned(),
                        });
                    }
                    keys.insert(key, title);
                    Section::Group(GroupPanel::new(title, wrap, self.preferences))
                }
                None => Section::Flow(wrap),
            };
            compiled.sections.push(section);
        }

        debug!(
            sections = compiled.sections.len(),
            buttons = compiled.buttons.len(),
            shortcuts = compiled.shortcuts.len(),
            "toolbox definition compiled"
        );
        Ok(compiled)
    }
}
