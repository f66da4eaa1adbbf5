//! Definition resolution, preference store and status task setup.

use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{info, warn};

use toolbox_common::{
    Event, EventBus, MemoryPreferences, PreferenceStore, ToolboxDefinition, ToolboxError,
};
use toolbox_config::schema::ToolboxConfig;
use toolbox_config::{resolve_definition, AppConfig, FilePreferences};
use toolbox_ui::Toolbox;

use super::core::{ToolboxApp, EVENT_BUS_CAPACITY};

// =============================================================================
// INITIALIZATION
// =============================================================================

impl ToolboxApp {
    /// Resolve the definition and preference store named by `config` and
    /// build the toolbox.
    pub fn new(config: AppConfig) -> Result<Self, ToolboxError> {
        let definition = resolve_definition(&config.toolbox)?;
        let preferences = open_preferences(&config.toolbox);
        Self::from_parts(config, &definition, preferences)
    }

    /// Build from an already loaded definition and store.
    pub fn from_parts(
        config: AppConfig,
        definition: &ToolboxDefinition,
        preferences: Box<dyn PreferenceStore>,
    ) -> Result<Self, ToolboxError> {
        let mut toolbox =
            Toolbox::build_with_icon_size(definition, preferences.as_ref(), config.toolbox.icon_size)?;

        let bus = EventBus::new(EVENT_BUS_CAPACITY);
        let forward = bus.clone();
        toolbox.on_group_visibility_changed(move |event| {
            forward.publish(Event::GroupVisibilityChanged(event.clone()));
        });

        let (tokio_runtime, status_task) = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("toolbox-status")
            .enable_all()
            .build()
        {
            Ok(rt) => {
                let task = rt.spawn(log_events(bus.subscribe()));
                (Some(rt), Some(task))
            }
            Err(e) => {
                warn!("Failed to start status runtime: {e}");
                (None, None)
            }
        };

        Ok(Self {
            config,
            toolbox,
            preferences,
            bus,
            tokio_runtime,
            status_task,
        })
    }
}

/// Open the file store named by the config, or the default one. A store
/// that cannot be opened is replaced by an in-memory one.
fn open_preferences(config: &ToolboxConfig) -> Box<dyn PreferenceStore> {
    let opened = match config.preferences {
        Some(ref path) => FilePreferences::open(path),
        None => FilePreferences::open_default(),
    };
    match opened {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!("Preferences unavailable, group states will not persist: {e}");
            Box::new(MemoryPreferences::new())
        }
    }
}

/// Log bus events until `Shutdown`. Returns how many events were logged.
async fn log_events(mut rx: broadcast::Receiver<Event>) -> usize {
    let mut logged = 0;
    loop {
        match rx.recv().await {
            Ok(Event::Shutdown) | Err(RecvError::Closed) => break,
            Ok(Event::GroupVisibilityChanged(e)) => {
                info!(title = %e.title, expanded = e.expanded, "group visibility changed");
                logged += 1;
            }
            Ok(Event::ToolToggled { action, active }) => {
                info!(%action, active, "tool toggled");
                logged += 1;
            }
            Ok(Event::DragStarted { action }) => {
                info!(%action, "drag started");
                logged += 1;
            }
            Ok(Event::Unknown) => {}
            Err(RecvError::Lagged(n)) => warn!("status log lagged, {n} events dropped"),
        }
    }
    logged
}
