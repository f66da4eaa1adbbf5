//! Toplevel window configuration types.

use serde::{Deserialize, Serialize};

/// Toplevel window settings.
///
/// When either `menubar_path` or `toolbar_path` is non-empty the window is
/// assembled as menubar + toolbar + main content; otherwise the main
/// content fills the window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Requested width in pixels (valid range: 100-10000).
    pub width: u32,
    /// Requested height in pixels (valid range: 100-10000).
    pub height: u32,
    pub resizable: bool,
    /// Icon file names, smallest first.
    pub icons: Vec<String>,
    /// UI manager path of the menubar, empty for none.
    pub menubar_path: String,
    /// UI manager path of the toolbar, empty for none.
    pub toolbar_path: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Toolbox".into(),
            width: 800,
            height: 600,
            resizable: true,
            icons: vec![
                "toolbox-24x24.png".into(),
                "toolbox-48x48.png".into(),
                "toolbox-96x96.png".into(),
                "toolbox-256x256.png".into(),
            ],
            menubar_path: "/mainwindow".into(),
            toolbar_path: "/mainwindow-toolbar".into(),
        }
    }
}
