use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Named icon sizes, matching the usual desktop toolkit presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum IconSize {
    Menu,
    SmallToolbar,
    #[default]
    LargeToolbar,
    Button,
    Dnd,
    Dialog,
}

impl IconSize {
    /// Edge length in pixels.
    pub fn pixels(self) -> u32 {
        match self {
            IconSize::Menu | IconSize::SmallToolbar => 16,
            IconSize::Button => 20,
            IconSize::LargeToolbar => 24,
            IconSize::Dnd => 32,
            IconSize::Dialog => 48,
        }
    }
}
