//! Capture pipeline: source post -> raw guidance -> navigation event

use std::sync::Arc;

use tracing::debug;

use super::SourcePost;
use crate::events::RelayBus;
use crate::normalize::Normalizer;

/// Glue between the platform callback and the relay bus
///
/// Posts from any package other than the configured source are silently
/// discarded. `on_posted` expects serial invocation (the platform delivers
/// callbacks one at a time); sources that cannot guarantee that must wrap
/// the pipeline in a mutex before sharing it.
pub struct CapturePipeline {
    source_package: String,
    normalizer: Normalizer,
    bus: Arc<dyn RelayBus>,
}

impl CapturePipeline {
    /// Create a pipeline that accepts posts from `source_package` only
    pub fn new(
        source_package: impl Into<String>,
        normalizer: Normalizer,
        bus: Arc<dyn RelayBus>,
    ) -> Self {
        Self {
            source_package: source_package.into(),
            normalizer,
            bus,
        }
    }

    /// Handle one observed notification
    pub fn on_posted(&mut self, post: SourcePost) {
        if post.package != self.source_package {
            debug!(package = %post.package, "Ignoring post from unrecognized package");
            return;
        }

        let event = self.normalizer.normalize(post.into_guidance());
        debug!(
            symbol = ?event.symbol,
            distance = %event.distance,
            "Captured source notification"
        );
        self.bus.publish(event);
    }
}
