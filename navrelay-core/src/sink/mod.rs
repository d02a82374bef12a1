//! Display sink: notification re-posting and the on-screen log

pub mod service;
pub mod types;

pub use service::{DisplayService, NotificationPoster, RecordingPoster};
pub use types::RelayNotification;
