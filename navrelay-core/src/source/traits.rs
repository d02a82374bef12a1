//! NotificationSource trait
//!
//! Abstracts the platform's notification-observation service as start/stop
//! hooks. The monitor only ever drives the hooks; implementations deliver
//! captured posts to a [`CapturePipeline`](super::CapturePipeline) on their
//! own callback context.

use async_trait::async_trait;

use crate::error::SourceError;

/// Platform collaborator that observes source notifications
#[async_trait]
pub trait NotificationSource: Send + Sync {
    /// Begin observing source notifications
    async fn start(&self) -> Result<(), SourceError>;

    /// Stop observing
    async fn stop(&self) -> Result<(), SourceError>;
}
