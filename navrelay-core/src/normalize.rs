//! Event normalization
//!
//! The normalizer assembles a [`NavigationEvent`] from raw guidance fields
//! and owns the only long-lived mutable state in the pipeline: the
//! carry-forward distance and the last issued timestamp. It is a
//! single-writer value; callers that cannot guarantee serial invocation
//! must wrap it in a mutex (the capture pipeline does).

use chrono::{DateTime, Utc};

use crate::classify::classify;
use crate::events::{NavigationEvent, RawGuidance};

/// Carry-forward distance before any source event has supplied one
pub const INITIAL_DISTANCE: &str = "0 m";

/// Assembles normalized navigation events from raw guidance
pub struct Normalizer {
    /// Last non-empty distance seen
    last_distance: String,
    /// Timestamp of the previously issued event
    last_timestamp: DateTime<Utc>,
}

impl Normalizer {
    /// Create a normalizer with an injected initial carry-forward distance
    pub fn new(initial_distance: impl Into<String>) -> Self {
        Self {
            last_distance: initial_distance.into(),
            last_timestamp: DateTime::<Utc>::MIN_UTC,
        }
    }

    /// Current carry-forward distance
    pub fn last_distance(&self) -> &str {
        &self.last_distance
    }

    /// Assemble a navigation event from one set of raw guidance fields.
    ///
    /// A present, non-empty distance replaces the carried value; anything
    /// else reuses it. Timestamps never decrease across calls even if the
    /// wall clock steps backwards; ties are broken by arrival order.
    pub fn normalize(&mut self, raw: RawGuidance) -> NavigationEvent {
        if let Some(distance) = raw.distance_text.filter(|d| !d.is_empty()) {
            self.last_distance = distance;
        }

        let timestamp = Utc::now().max(self.last_timestamp);
        self.last_timestamp = timestamp;

        let symbol = classify(raw.maneuver_text.as_deref());

        NavigationEvent {
            symbol,
            distance: self.last_distance.clone(),
            maneuver_text: raw.maneuver_text.unwrap_or_default(),
            time_dist_info: raw.sub_text,
            timestamp,
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(INITIAL_DISTANCE)
    }
}
