//! `ToolboxApp` struct definition.

use tokio::task::JoinHandle;

use toolbox_common::{EventBus, PreferenceStore};
use toolbox_config::AppConfig;
use toolbox_ui::Toolbox;

/// Capacity of the event bus channel.
pub(super) const EVENT_BUS_CAPACITY: usize = 64;

pub struct ToolboxApp {
    pub(super) config: AppConfig,
    pub(super) toolbox: Toolbox,
    pub(super) preferences: Box<dyn PreferenceStore>,
    pub(super) bus: EventBus,
    /// Runtime for the status task. `None` if it could not be started.
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,
    pub(super) status_task: Option<JoinHandle<usize>>,
}

impl ToolboxApp {
    pub fn toolbox(&self) -> &Toolbox {
        &self.toolbox
    }
}
