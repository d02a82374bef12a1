//! Event types and the relay bus

pub mod broadcast;
pub mod bus;
pub mod types;

pub use broadcast::BroadcastRelayBus;
pub use bus::RelayBus;
pub use types::{NavigationEvent, RawGuidance};
