//! Broadcast-channel RelayBus implementation

use tokio::sync::broadcast;
use tracing::trace;

use super::NavigationEvent;
use super::bus::RelayBus;

/// RelayBus backed by a tokio broadcast channel
///
/// `send` on a broadcast channel never blocks and fails only when no
/// receiver exists, which is exactly the drop-when-unsubscribed semantics
/// the pipeline wants.
pub struct BroadcastRelayBus {
    tx: broadcast::Sender<NavigationEvent>,
}

impl BroadcastRelayBus {
    /// Create a new bus with the given channel capacity
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }
}

impl RelayBus for BroadcastRelayBus {
    fn publish(&self, event: NavigationEvent) {
        // Dropped when no subscriber is attached
        if self.tx.send(event).is_err() {
            trace!("No relay subscriber, event dropped");
        }
    }

    fn subscribe(&self) -> broadcast::Receiver<NavigationEvent> {
        self.tx.subscribe()
    }
}
