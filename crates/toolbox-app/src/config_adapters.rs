//! Conversions from config sections to the UI core's geometry types.

use toolbox_common::Size;
use toolbox_config::schema::{ToolboxConfig, WindowConfig};
use toolbox_ui::{WindowSpec, WrapLayout};

pub fn window_spec(config: &WindowConfig) -> WindowSpec {
    WindowSpec {
        title: config.title.clone(),
        size: Size::new(config.width as f64, config.height as f64),
        resizable: config.resizable,
        icons: config.icons.clone(),
        menubar_path: config.menubar_path.clone(),
        toolbar_path: config.toolbar_path.clone(),
    }
}

pub fn wrap_layout(config: &ToolboxConfig) -> WrapLayout {
    WrapLayout {
        spacing: config.spacing as f64,
        padding: config.button_padding as f64,
    }
}
