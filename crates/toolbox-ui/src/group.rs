//! Collapsible group panels.
//!
//! A panel is `Collapsed` or `Expanded`. It starts in the state stored
//! under its preference key and, on every activation, flips first and then
//! stores the state it flipped into.

use serde::Serialize;
use toolbox_common::{toolbox_preference_key, GroupVisibilityChanged, PreferenceStore};
use tracing::{debug, warn};

use crate::wrap::WrapBox;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum GroupState {
    #[default]
    Collapsed,
    Expanded,
}

impl GroupState {
    pub fn from_expanded(expanded: bool) -> Self {
        if expanded {
            GroupState::Expanded
        } else {
            GroupState::Collapsed
        }
    }

    pub fn is_expanded(self) -> bool {
        self == GroupState::Expanded
    }

    pub fn toggled(self) -> Self {
        match self {
            GroupState::Collapsed => GroupState::Expanded,
            GroupState::Expanded => GroupState::Collapsed,
        }
    }
}

/// A titled disclosure around a wrap box of buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupPanel {
    title: String,
    preference_key: String,
    state: GroupState,
    content: WrapBox,
}

impl GroupPanel {
    /// Build a panel, reading its initial state from `preferences`.
    ///
    /// A failed read is logged and the panel starts collapsed.
    pub fn new(title: impl Into<String>, content: WrapBox, preferences: &dyn PreferenceStore) -> Self {
        let title = title.into();
        let preference_key = toolbox_preference_key(&title);
        let expanded = match preferences.get(&preference_key, false) {
            Ok(expanded) => expanded,
            Err(e) => {
                warn!("failed to read '{preference_key}', starting collapsed: {e}");
                false
            }
        };

        Self {
            title,
            preference_key,
            state: GroupState::from_expanded(expanded),
            content,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn preference_key(&self) -> &str {
        &self.preference_key
    }

    pub fn state(&self) -> GroupState {
        self.state
    }

    pub fn is_expanded(&self) -> bool {
        self.state.is_expanded()
    }

    pub fn content(&self) -> &WrapBox {
        &self.content
    }

    /// Handle a user activation of the disclosure.
    ///
    /// The visual state flips first; the resulting state is what gets
    /// persisted and reported. A failed write is logged and the new state
    /// is kept.
    pub fn activate(&mut self, preferences: &mut dyn PreferenceStore) -> GroupVisibilityChanged {
        self.state = self.state.toggled();
        let expanded = self.state.is_expanded();

        if let Err(e) = preferences.set(&self.preference_key, expanded) {
            warn!("failed to persist '{}': {e}", self.preference_key);
        }
        debug!(title = %self.title, expanded, "group toggled");

        GroupVisibilityChanged {
            title: self.title.clone(),
            expanded,
        }
    }
}
