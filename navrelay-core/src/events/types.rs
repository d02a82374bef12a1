//! Event type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classify::DirectionSymbol;

/// Raw guidance fields lifted from one source notification
///
/// Transient: consumed by the normalizer immediately after capture. Any
/// field may be absent; absence is never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawGuidance {
    /// Distance to the maneuver, e.g. "200 ft"
    pub distance_text: Option<String>,
    /// Free-text maneuver description, e.g. "Turn left onto Elm St"
    pub maneuver_text: Option<String>,
    /// Time/distance summary, e.g. "3 min · 240 m"
    pub sub_text: Option<String>,
}

/// A normalized navigation event relayed to the display sink
///
/// Immutable after creation; one is produced per relay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationEvent {
    /// Classified maneuver symbol
    pub symbol: DirectionSymbol,
    /// Last non-empty distance seen (sticky carry-forward)
    pub distance: String,
    /// Raw maneuver description, possibly empty
    pub maneuver_text: String,
    /// Time/distance summary, if the source supplied one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_dist_info: Option<String>,
    /// Capture time; non-decreasing across the process lifetime
    pub timestamp: DateTime<Utc>,
}
