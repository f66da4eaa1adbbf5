pub mod action;
pub mod definition;
pub mod errors;
pub mod events;
pub mod preferences;
pub mod types;

pub use action::ActionName;
pub use definition::{ActionSpec, ToolGroup, ToolboxDefinition};
pub use errors::{ConfigError, DefinitionError, PreferenceStoreError, ToolboxError};
pub use events::{Event, EventBus, GroupVisibilityChanged};
pub use preferences::{toolbox_preference_key, MemoryPreferences, PreferenceStore};
pub use types::{IconSize, Rect, Size};

pub type Result<T> = std::result::Result<T, ToolboxError>;
