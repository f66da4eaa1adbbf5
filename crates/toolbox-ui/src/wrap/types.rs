//! Wrap box types and layout configuration.

use serde::Serialize;
use toolbox_common::{IconSize, Size};

use crate::button::ButtonId;

/// Flow container: buttons left to right, wrapping into new rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WrapBox {
    pub(crate) children: Vec<ButtonId>,
}

impl WrapBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, id: ButtonId) {
        self.children.push(id);
    }

    pub fn children(&self) -> &[ButtonId] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// Geometry for placing wrap box children.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WrapLayout {
    /// Gap in pixels between neighbours, both across and down.
    pub spacing: f64,
    /// Padding inside a button around its icon.
    pub padding: f64,
}

impl WrapLayout {
    /// Outer size of a flat button drawing an icon of `icon_size`.
    pub fn button_size(&self, icon_size: IconSize) -> Size {
        let edge = icon_size.pixels() as f64 + 2.0 * self.padding;
        Size::new(edge, edge)
    }
}

impl Default for WrapLayout {
    fn default() -> Self {
        Self {
            spacing: 2.0,
            padding: 4.0,
        }
    }
}
