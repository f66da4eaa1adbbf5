//! User events and output.

use serde_json::json;
use tracing::warn;

use toolbox_common::Event;
use toolbox_ui::{DragPayload, ToplevelWindow, WindowContent};

use crate::config_adapters::{window_spec, wrap_layout};
use crate::headless::HeadlessUi;
use crate::render;

use super::core::ToolboxApp;

/// Placeholder name of the toolbox widget inside the window.
const MAIN_WIDGET: &str = "toolbox";

impl ToolboxApp {
    /// Activate the disclosure of the group titled `title`.
    pub fn toggle_group(&mut self, title: &str) -> Option<bool> {
        let expanded = self.toolbox.activate_group(title, self.preferences.as_mut());
        if expanded.is_none() {
            warn!("No group titled '{title}'");
        }
        expanded
    }

    /// Make `action` the selected tool and start a drag from its button.
    ///
    /// Other buttons are released. Returns the payload for every offered
    /// drag target, or `None` if no button has that action.
    pub fn select_tool(&mut self, action: &str) -> Option<Vec<DragPayload>> {
        let Some((id, _)) = self.toolbox.button_for_action(action) else {
            warn!("No tool for action '{action}'");
            return None;
        };

        for index in 0..self.toolbox.buttons().len() {
            let other = toolbox_ui::ButtonId(index);
            if other != id && self.toolbox.set_button_active(other, false) == Some(true) {
                if let Some(button) = self.toolbox.button(other) {
                    self.bus.publish(Event::ToolToggled {
                        action: button.action().to_string(),
                        active: false,
                    });
                }
            }
        }
        if self.toolbox.set_button_active(id, true) == Some(true) {
            self.bus.publish(Event::ToolToggled {
                action: action.to_owned(),
                active: true,
            });
        }

        let button = self.toolbox.button(id)?;
        self.bus.publish(Event::DragStarted {
            action: action.to_owned(),
        });
        Some(
            button
                .drag_source()
                .targets
                .iter()
                .map(|target| button.drag_data_get(*target))
                .collect(),
        )
    }

    pub fn window(&self) -> ToplevelWindow<String, Vec<(String, String)>> {
        let spec = window_spec(&self.config.window);
        let mut ui = HeadlessUi::new(self.toolbox.shortcuts());
        ui.register(&spec.menubar_path, "menubar");
        ui.register(&spec.toolbar_path, "toolbar");
        ToplevelWindow::construct(&spec, &ui, MAIN_WIDGET.to_owned())
    }

    pub fn outline(&self) -> String {
        let layout = wrap_layout(&self.config.toolbox);
        render::outline(&self.toolbox, &layout, self.config.toolbox.width as f64)
    }

    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        let window = self.window();
        let (menubar, toolbar) = match &window.content {
            WindowContent::Simple(_) => (None, None),
            WindowContent::Stacked {
                menubar, toolbar, ..
            } => (menubar.clone(), toolbar.clone()),
        };
        Ok(json!({
            "window": {
                "title": window.title,
                "size": serde_json::to_value(window.size_request)?,
                "resizable": window.resizable,
                "icons": window.icons,
                "stacked": matches!(window.content, WindowContent::Stacked { .. }),
                "menubar": menubar,
                "toolbar": toolbar,
            },
            "toolbox": serde_json::to_value(self.toolbox.view())?,
        }))
    }
}
