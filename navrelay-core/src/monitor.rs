//! Monitoring state machine
//!
//! Tracks whether relaying is armed and drives the platform source's
//! start/stop hooks. Permission loss forces `Disabled` from any state and
//! clears any "was active" memory; toggling only works while permission is
//! held. The machine renders nothing itself; the UI queries [`Monitor::state`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::SourceError;
use crate::source::NotificationSource;

/// State of the monitoring machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonitoringState {
    /// Listener access is not granted
    Disabled,
    /// Permission held, not observing
    Ready,
    /// Observing and relaying
    Active,
}

/// Result of a toggle request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Observation started
    Started,
    /// Observation stopped
    Stopped,
    /// Relaying is disabled; the UI should request listener access
    PermissionRequired,
}

/// At-most-one-active-relay state machine
pub struct Monitor {
    state: MonitoringState,
    source: Arc<dyn NotificationSource>,
}

impl Monitor {
    /// Create a monitor; starts `Ready` or `Disabled` depending on the
    /// initial permission check.
    pub fn new(source: Arc<dyn NotificationSource>, permission_granted: bool) -> Self {
        let state = if permission_granted {
            MonitoringState::Ready
        } else {
            MonitoringState::Disabled
        };
        Self { state, source }
    }

    /// Current state, for the UI to render
    pub fn state(&self) -> MonitoringState {
        self.state
    }

    /// Feed the externally-reported permission flag into the machine.
    ///
    /// Revocation forces `Disabled` and stops observation if it was active.
    /// A later grant lands in `Ready`, never directly back in `Active`.
    pub async fn set_permission(&mut self, granted: bool) -> Result<(), SourceError> {
        match (granted, self.state) {
            (false, MonitoringState::Active) => {
                // Disabled regardless of whether the stop hook succeeds
                self.state = MonitoringState::Disabled;
                info!("Listener access revoked, monitoring disabled");
                self.source.stop().await?;
            }
            (false, _) => {
                self.state = MonitoringState::Disabled;
            }
            (true, MonitoringState::Disabled) => {
                self.state = MonitoringState::Ready;
                info!("Listener access granted, ready to start");
            }
            (true, _) => {}
        }
        Ok(())
    }

    /// Toggle between `Ready` and `Active`; a no-op while `Disabled`.
    pub async fn toggle(&mut self) -> Result<ToggleOutcome, SourceError> {
        match self.state {
            MonitoringState::Disabled => Ok(ToggleOutcome::PermissionRequired),
            MonitoringState::Ready => {
                self.source.start().await?;
                self.state = MonitoringState::Active;
                info!("Monitoring started");
                Ok(ToggleOutcome::Started)
            }
            MonitoringState::Active => {
                self.source.stop().await?;
                self.state = MonitoringState::Ready;
                info!("Monitoring stopped");
                Ok(ToggleOutcome::Stopped)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::Mutex;

    use super::*;
    use crate::config::DEFAULT_SOURCE_PACKAGE;
    use crate::events::{BroadcastRelayBus, RelayBus};
    use crate::normalize::Normalizer;
    use crate::source::{CapturePipeline, MockSource, SourceCall};

    fn mock_source() -> Arc<MockSource> {
        let bus: Arc<dyn RelayBus> = Arc::new(BroadcastRelayBus::new(16));
        let pipeline = Arc::new(Mutex::new(CapturePipeline::new(
            DEFAULT_SOURCE_PACKAGE,
            Normalizer::default(),
            bus,
        )));
        Arc::new(MockSource::new(pipeline))
    }

    // ==================== Creation Tests ====================

    #[tokio::test]
    async fn starts_ready_with_permission() {
        let monitor = Monitor::new(mock_source(), true);
        assert_eq!(monitor.state(), MonitoringState::Ready);
    }

    #[tokio::test]
    async fn starts_disabled_without_permission() {
        let monitor = Monitor::new(mock_source(), false);
        assert_eq!(monitor.state(), MonitoringState::Disabled);
    }

    // ==================== Toggle Tests ====================

    #[tokio::test]
    async fn toggle_from_ready_starts_observing() {
        let source = mock_source();
        let mut monitor = Monitor::new(source.clone(), true);

        let outcome = monitor.toggle().await.unwrap();

        assert_eq!(outcome, ToggleOutcome::Started);
        assert_eq!(monitor.state(), MonitoringState::Active);
        assert_eq!(source.calls(), vec![SourceCall::Start]);
        assert!(source.observing());
    }

    #[tokio::test]
    async fn toggle_from_active_stops_observing() {
        let source = mock_source();
        let mut monitor = Monitor::new(source.clone(), true);

        monitor.toggle().await.unwrap();
        let outcome = monitor.toggle().await.unwrap();

        assert_eq!(outcome, ToggleOutcome::Stopped);
        assert_eq!(monitor.state(), MonitoringState::Ready);
        assert_eq!(source.calls(), vec![SourceCall::Start, SourceCall::Stop]);
        assert!(!source.observing());
    }

    #[tokio::test]
    async fn toggle_from_disabled_requests_permission_without_side_effects() {
        let source = mock_source();
        let mut monitor = Monitor::new(source.clone(), false);

        let outcome = monitor.toggle().await.unwrap();

        assert_eq!(outcome, ToggleOutcome::PermissionRequired);
        assert_eq!(monitor.state(), MonitoringState::Disabled);
        assert!(source.calls().is_empty());
    }

    #[tokio::test]
    async fn failed_start_leaves_monitor_ready() {
        let source = mock_source();
        source.fail_next_start();
        let mut monitor = Monitor::new(source.clone(), true);

        let result = monitor.toggle().await;

        assert!(result.is_err());
        assert_eq!(monitor.state(), MonitoringState::Ready);
        assert!(!source.observing());
    }

    // ==================== Permission Tests ====================

    #[tokio::test]
    async fn revocation_from_active_disables_and_stops() {
        let source = mock_source();
        let mut monitor = Monitor::new(source.clone(), true);
        monitor.toggle().await.unwrap();

        monitor.set_permission(false).await.unwrap();

        assert_eq!(monitor.state(), MonitoringState::Disabled);
        assert_eq!(source.calls(), vec![SourceCall::Start, SourceCall::Stop]);
    }

    #[tokio::test]
    async fn regrant_lands_in_ready_never_active() {
        let source = mock_source();
        let mut monitor = Monitor::new(source.clone(), true);
        monitor.toggle().await.unwrap();
        monitor.set_permission(false).await.unwrap();

        monitor.set_permission(true).await.unwrap();

        assert_eq!(monitor.state(), MonitoringState::Ready);
        assert!(!source.observing());
    }

    #[tokio::test]
    async fn revocation_from_ready_disables() {
        let mut monitor = Monitor::new(mock_source(), true);
        monitor.set_permission(false).await.unwrap();
        assert_eq!(monitor.state(), MonitoringState::Disabled);
    }

    #[tokio::test]
    async fn grant_while_ready_is_a_no_op() {
        let mut monitor = Monitor::new(mock_source(), true);
        monitor.set_permission(true).await.unwrap();
        assert_eq!(monitor.state(), MonitoringState::Ready);
    }

    #[tokio::test]
    async fn grant_while_active_is_a_no_op() {
        let source = mock_source();
        let mut monitor = Monitor::new(source.clone(), true);
        monitor.toggle().await.unwrap();

        monitor.set_permission(true).await.unwrap();

        assert_eq!(monitor.state(), MonitoringState::Active);
        assert!(source.observing());
    }

    // ==================== Serialization Tests ====================

    #[test]
    fn monitoring_state_serialization_roundtrip() {
        for state in [
            MonitoringState::Disabled,
            MonitoringState::Ready,
            MonitoringState::Active,
        ] {
            let json = serde_json::to_string(&state).unwrap();
            let parsed: MonitoringState = serde_json::from_str(&json).unwrap();
            assert_eq!(state, parsed);
        }
    }
}
