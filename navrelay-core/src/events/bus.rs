//! RelayBus trait definition
//!
//! The bus decouples the capture point from the display sink: one
//! direction, fire-and-forget. Guidance is ephemeral, so there is no
//! buffering and no replay for late joiners.

use tokio::sync::broadcast;

use super::NavigationEvent;

/// Bus carrying navigation events from the capture point to the display sink
///
/// Implementations must never block the publisher: an event published while
/// no subscriber is attached is dropped. Delivery order to a live subscriber
/// matches publish order.
pub trait RelayBus: Send + Sync {
    /// Publish an event; dropped if nobody is subscribed
    fn publish(&self, event: NavigationEvent);

    /// Subscribe to events from now on (live stream only, no replay)
    fn subscribe(&self) -> broadcast::Receiver<NavigationEvent>;
}
