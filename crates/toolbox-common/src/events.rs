use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Fired once per user toggle of a titled group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupVisibilityChanged {
    pub title: String,
    pub expanded: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    GroupVisibilityChanged(GroupVisibilityChanged),
    ToolToggled { action: String, active: bool },
    DragStarted { action: String },
    Shutdown,
    #[serde(other)]
    Unknown,
}

/// Cross-thread fan-out for subscribers living outside the UI thread.
pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: Event) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}
