//! Graceful shutdown: stop the status task and the runtime.

use std::time::Duration;

use tracing::{info, warn};

use toolbox_common::Event;

use super::core::ToolboxApp;

impl ToolboxApp {
    /// Stop the status task. Returns how many events it logged.
    pub fn shutdown(mut self) -> usize {
        info!("Initiating shutdown");
        self.bus.publish(Event::Shutdown);

        let mut logged = 0;
        if let Some(rt) = self.tokio_runtime.take() {
            if let Some(task) = self.status_task.take() {
                match rt.block_on(task) {
                    Ok(n) => logged = n,
                    Err(e) => warn!("Status task failed: {e}"),
                }
            }
            rt.shutdown_timeout(Duration::from_secs(1));
        }

        info!("Shutdown complete ({logged} events)");
        logged
    }
}
