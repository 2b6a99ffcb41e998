use serde_json::Value;
use tokio::sync::broadcast;

/// Pushed to the owner's sockets after an income or expense is stored.
pub const NEW_TRANSACTION: &str = "new_transaction";

/// Event envelope routed to the sockets of a single owner.
#[derive(Clone, Debug)]
pub struct ServerEvent {
    pub name: &'static str,
    pub owner_id: i64,
    pub payload: Value,
}

impl ServerEvent {
    pub fn new(name: &'static str, owner_id: i64, payload: Value) -> Self {
        Self {
            name,
            owner_id,
            payload,
        }
    }

    /// Wire frame: `{"event": <name>, "data": <payload>}`.
    pub fn to_frame(&self) -> Value {
        serde_json::json!({
            "event": self.name,
            "data": self.payload,
        })
    }
}

/// Lightweight broadcast bus that fans out events to connected sockets.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<ServerEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _receiver) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ServerEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: ServerEvent) {
        // No subscribers is not an error.
        let _ = self.sender.send(event);
    }
}
