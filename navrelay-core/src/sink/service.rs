//! Display service that re-announces relayed navigation events
//!
//! Consumes the relay bus on its own execution context, posts a local
//! notification for each event, and appends a timestamped line to the
//! on-screen log.

use std::sync::Arc;

use tokio::sync::{Mutex, broadcast};
use tracing::{info, warn};

use super::types::RelayNotification;
use crate::config::NotificationConfig;
use crate::events::NavigationEvent;

/// Posts re-announced notifications to the local notification surface
pub trait NotificationPoster: Send + Sync {
    fn post(&self, notification: &RelayNotification);
}

/// Service consuming the relay bus and rendering both display surfaces
pub struct DisplayService {
    poster: Arc<dyn NotificationPoster>,
    config: NotificationConfig,
    log: Mutex<String>,
}

impl DisplayService {
    /// Create a display service posting through the given poster
    pub fn new(poster: Arc<dyn NotificationPoster>, config: NotificationConfig) -> Self {
        Self {
            poster,
            config,
            log: Mutex::new(String::new()),
        }
    }

    /// Consume events until the relay bus closes
    pub async fn run(&self, mut rx: broadcast::Receiver<NavigationEvent>) {
        info!("DisplayService started");

        loop {
            match rx.recv().await {
                Ok(event) => self.announce(&event).await,
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    // Stale guidance has no value; skip ahead
                    warn!("DisplayService lagged by {} events", n);
                }
                Err(broadcast::error::RecvError::Closed) => {
                    info!("Relay bus closed, stopping DisplayService");
                    break;
                }
            }
        }
    }

    /// Snapshot of the appended log
    pub async fn log_snapshot(&self) -> String {
        self.log.lock().await.clone()
    }

    async fn announce(&self, event: &NavigationEvent) {
        let notification =
            RelayNotification::from_event(event, &self.config.suffix, self.config.timeout_ms);
        if self.config.enabled {
            self.poster.post(&notification);
        }
        self.log.lock().await.push_str(&notification.log_line(event));
    }
}

/// Poster that records notifications instead of displaying them
///
/// Used by tests and headless runs.
#[derive(Default)]
pub struct RecordingPoster {
    posted: std::sync::Mutex<Vec<RelayNotification>>,
}

impl RecordingPoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications posted so far
    pub fn posted(&self) -> Vec<RelayNotification> {
        self.posted.lock().unwrap().clone()
    }
}

impl NotificationPoster for RecordingPoster {
    fn post(&self, notification: &RelayNotification) {
        self.posted.lock().unwrap().push(notification.clone());
    }
}
