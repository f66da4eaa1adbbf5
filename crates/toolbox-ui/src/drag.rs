//! Drag-and-drop descriptions for tool buttons.
//!
//! A button offers its action name under three content types so tree
//! views, plain-text widgets and toolbox-aware targets can all take it.
//! The bytes are the same whichever type the drop target negotiates.

use serde::Serialize;
use toolbox_common::ActionName;

/// Target info shared by the two generic string types.
pub const TARGET_STRING: u32 = 0;
/// Target info of the application-specific type.
pub const TARGET_TOOLBOX_ACTION: u32 = 1;

/// Content types a tool button offers during a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DragTarget {
    String,
    TextPlain,
    ToolboxAction,
}

impl DragTarget {
    /// Every offered type, in negotiation order.
    pub const ALL: [DragTarget; 3] = [
        DragTarget::String,
        DragTarget::TextPlain,
        DragTarget::ToolboxAction,
    ];

    pub fn mime(self) -> &'static str {
        match self {
            DragTarget::String => "STRING",
            DragTarget::TextPlain => "text/plain",
            DragTarget::ToolboxAction => "application/x-toolbox-action",
        }
    }

    pub fn info(self) -> u32 {
        match self {
            DragTarget::String | DragTarget::TextPlain => TARGET_STRING,
            DragTarget::ToolboxAction => TARGET_TOOLBOX_ACTION,
        }
    }

    pub fn from_mime(mime: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.mime() == mime)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DragAction {
    Copy,
    Link,
}

/// Pointer button pressed when a drag begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

/// How a button starts a drag: primary button only, within this
/// application, as copy or link, showing the button's icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DragSource {
    pub start_button: PointerButton,
    pub targets: &'static [DragTarget],
    pub actions: &'static [DragAction],
    pub same_app: bool,
    pub icon_id: Option<String>,
}

impl DragSource {
    pub(crate) fn for_icon(icon_id: Option<String>) -> Self {
        Self {
            start_button: PointerButton::Primary,
            targets: &DragTarget::ALL,
            actions: &[DragAction::Copy, DragAction::Link],
            same_app: true,
            icon_id,
        }
    }

    /// Whether a press of `button` may begin a drag.
    pub fn starts_with(&self, button: PointerButton) -> bool {
        self.start_button == button
    }

    pub fn offers(&self, target: DragTarget) -> bool {
        self.targets.contains(&target)
    }
}

/// Data handed to a drop target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    target: DragTarget,
    data: Vec<u8>,
}

impl DragPayload {
    /// Bits per unit of `data`.
    pub const FORMAT: u8 = 8;

    pub(crate) fn new(target: DragTarget, action: &ActionName) -> Self {
        Self {
            target,
            data: action.as_bytes().to_vec(),
        }
    }

    pub fn target(&self) -> DragTarget {
        self.target
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The payload decoded as the action name.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.data).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_round_trip() {
        for target in DragTarget::ALL {
            assert_eq!(DragTarget::from_mime(target.mime()), Some(target));
        }
        assert_eq!(DragTarget::from_mime("image/png"), None);
    }

    #[test]
    fn string_types_share_info() {
        assert_eq!(DragTarget::String.info(), TARGET_STRING);
        assert_eq!(DragTarget::TextPlain.info(), TARGET_STRING);
        assert_eq!(DragTarget::ToolboxAction.info(), TARGET_TOOLBOX_ACTION);
    }

    #[test]
    fn source_offers_all_targets_as_copy_or_link() {
        let source = DragSource::for_icon(Some("icon-class".into()));
        assert!(DragTarget::ALL.iter().all(|t| source.offers(*t)));
        assert_eq!(source.actions, &[DragAction::Copy, DragAction::Link]);
        assert!(source.same_app);
        assert!(source.starts_with(PointerButton::Primary));
        assert!(!source.starts_with(PointerButton::Middle));
        assert!(!source.starts_with(PointerButton::Secondary));
    }

    #[test]
    fn payload_carries_action_bytes() {
        let action = ActionName::new("CreateClass").unwrap();
        let payload = DragPayload::new(DragTarget::TextPlain, &action);
        assert_eq!(payload.data(), b"CreateClass");
        assert_eq!(payload.as_str(), Some("CreateClass"));
        assert_eq!(payload.target(), DragTarget::TextPlain);
    }
}
