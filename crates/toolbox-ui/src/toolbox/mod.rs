//! The assembled toolbox.
//!
//! Owns the sections, the flat button list and the shortcut table. After
//! construction the only entry points are user events: activating a group
//! disclosure, toggling a button, and drag data requests.

use serde::Serialize;
use toolbox_common::{
    ActionName, DefinitionError, GroupVisibilityChanged, IconSize, PreferenceStore,
    ToolboxDefinition,
};
use tracing::info;

use crate::builder::{Compiled, Section, ToolboxBuilder};
use crate::button::{ActionButton, ButtonId};
use crate::drag::{DragPayload, DragTarget};
use crate::group::GroupPanel;
use crate::shortcuts::ShortcutTable;
use crate::signal::{ListenerId, Listeners};

#[cfg(test)]
mod tests;

#[derive(Debug)]
pub struct Toolbox {
    sections: Vec<Section>,
    buttons: Vec<ActionButton>,
    shortcuts: ShortcutTable,
    visibility_listeners: Listeners<GroupVisibilityChanged>,
}

/// Borrowed, serializable view of a toolbox.
#[derive(Debug, Serialize)]
pub struct ToolboxView<'a> {
    pub sections: &'a [Section],
    pub buttons: &'a [ActionButton],
    pub shortcuts: &'a ShortcutTable,
}

impl Toolbox {
    /// Compile `definition`, reading group states from `preferences`.
    pub fn build(
        definition: &ToolboxDefinition,
        preferences: &dyn PreferenceStore,
    ) -> Result<Self, DefinitionError> {
        let compiled = ToolboxBuilder::new(preferences).compile(definition)?;
        Ok(Self::from_compiled(compiled))
    }

    /// Like [`Toolbox::build`], rendering every button at `icon_size`.
    pub fn build_with_icon_size(
        definition: &ToolboxDefinition,
        preferences: &dyn PreferenceStore,
        icon_size: IconSize,
    ) -> Result<Self, DefinitionError> {
        let compiled = ToolboxBuilder::new(preferences)
            .with_icon_size(icon_size)
            .compile(definition)?;
        Ok(Self::from_compiled(compiled))
    }

    /// Only reachable with the output of [`ToolboxBuilder::compile`].
    pub(crate) fn from_compiled(compiled: Compiled) -> Self {
        info!(
            "toolbox ready ({} sections, {} buttons, {} shortcuts)",
            compiled.sections.len(),
            compiled.buttons.len(),
            compiled.shortcuts.len()
        );
        Self {
            sections: compiled.sections,
            buttons: compiled.buttons,
            shortcuts: compiled.shortcuts,
            visibility_listeners: Listeners::new(),
        }
    }

    // -- Accessors --

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn buttons(&self) -> &[ActionButton] {
        &self.buttons
    }

    pub fn shortcuts(&self) -> &ShortcutTable {
        &self.shortcuts
    }

    pub fn button(&self, id: ButtonId) -> Option<&ActionButton> {
        self.buttons.get(id.0)
    }

    pub fn button_for_action(&self, action: &str) -> Option<(ButtonId, &ActionButton)> {
        self.buttons
            .iter()
            .enumerate()
            .find(|(_, b)| b.action().as_str() == action)
            .map(|(i, b)| (ButtonId(i), b))
    }

    pub fn action_for_shortcut(&self, shortcut: &str) -> Option<&ActionName> {
        self.shortcuts.lookup(shortcut)
    }

    /// Titled groups in stacking order.
    pub fn groups(&self) -> impl Iterator<Item = &GroupPanel> {
        self.sections.iter().filter_map(Section::as_group)
    }

    pub fn group(&self, title: &str) -> Option<&GroupPanel> {
        self.groups().find(|g| g.title() == title)
    }

    pub fn view(&self) -> ToolboxView<'_> {
        ToolboxView {
            sections: &self.sections,
            buttons: &self.buttons,
            shortcuts: &self.shortcuts,
        }
    }

    // -- Listeners --

    /// Register a listener for group expand/collapse.
    ///
    /// Called synchronously, once per activation, in registration order.
    pub fn on_group_visibility_changed(
        &mut self,
        listener: impl FnMut(&GroupVisibilityChanged) + 'static,
    ) -> ListenerId {
        self.visibility_listeners.connect(listener)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.visibility_listeners.disconnect(id)
    }

    // -- User events --

    /// The user activated the disclosure of the group titled `title`.
    ///
    /// Returns the group's new expanded state, or `None` if no titled
    /// group has that title.
    pub fn activate_group(
        &mut self,
        title: &str,
        preferences: &mut dyn PreferenceStore,
    ) -> Option<bool> {
        let panel = self.sections.iter_mut().find_map(|s| match s {
            Section::Group(panel) if panel.title() == title => Some(panel),
            _ => None,
        })?;

        let event = panel.activate(preferences);
        self.visibility_listeners.emit(&event);
        Some(event.expanded)
    }

    /// The user toggled a button. Returns its new pressed state.
    pub fn toggle_button(&mut self, id: ButtonId) -> Option<bool> {
        self.buttons.get_mut(id.0).map(ActionButton::toggle)
    }

    /// Set a button's pressed state, e.g. when the host deselects a tool.
    pub fn set_button_active(&mut self, id: ButtonId, active: bool) -> Option<bool> {
        self.buttons.get_mut(id.0).map(|b| b.set_active(active))
    }

    /// A drop target asked button `id` for its data as `target`.
    pub fn drag_data_get(&self, id: ButtonId, target: DragTarget) -> Option<DragPayload> {
        self.button(id).map(|b| b.drag_data_get(target))
    }
}
