//! navrelay-core: capture, classify, and relay navigation notifications
//!
//! This crate provides the pieces of the navrelay pipeline:
//!
//! - **Classification** - [`classify`](classify::classify) turns free-text
//!   guidance into a [`DirectionSymbol`]
//! - **Normalization** - [`Normalizer`] assembles [`NavigationEvent`]s with
//!   sticky carry-forward distance
//! - **Relay bus** - [`RelayBus`] trait and [`BroadcastRelayBus`] for
//!   fire-and-forget delivery to the display sink
//! - **Monitoring** - [`Monitor`] state machine gating when the platform
//!   source is observed
//! - **Display sink** - [`DisplayService`] re-posting notifications and
//!   appending the on-screen log
//!
//! # Architecture
//!
//! ```text
//! platform source ──SourcePost──▶ CapturePipeline ──▶ RelayBus ──▶ DisplayService
//!        ▲                        (filter, normalize,              (notification,
//!        │ start/stop              classify, publish)               log line)
//!     Monitor
//! ```
//!
//! The platform collaborator (notification-observation service, UI) stays
//! behind the [`NotificationSource`] and
//! [`NotificationPoster`](sink::NotificationPoster) seams; everything here
//! is platform-free and independently testable.

pub mod classify;
pub mod config;
pub mod error;
pub mod events;
pub mod monitor;
pub mod normalize;
pub mod sink;
pub mod source;

// Re-export key types for convenience
pub use classify::DirectionSymbol;
pub use config::{DEFAULT_SOURCE_PACKAGE, NotificationConfig, RelayConfig};
pub use error::{ConfigError, RelayError, SourceError};
pub use events::{BroadcastRelayBus, NavigationEvent, RawGuidance, RelayBus};
pub use monitor::{Monitor, MonitoringState, ToggleOutcome};
pub use normalize::{INITIAL_DISTANCE, Normalizer};
pub use sink::{DisplayService, NotificationPoster, RecordingPoster, RelayNotification};
pub use source::{CapturePipeline, MockSource, NotificationSource, SourceCall, SourcePost};
