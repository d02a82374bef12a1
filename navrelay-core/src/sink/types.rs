//! Display sink types

use serde::{Deserialize, Serialize};

use crate::events::NavigationEvent;

/// Body text used when the source supplied no time/distance summary
const FALLBACK_BODY: &str = "Navigation update";

/// A local notification re-announcing a relayed navigation event
///
/// Carries the posting hints (priority, auto-dismiss, timeout) so a
/// platform poster can honor them; composition itself is platform-free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayNotification {
    /// Composed direction/symbol string
    pub title: String,
    /// Time/distance summary with the fixed marker suffix
    pub body: String,
    /// Post at high priority so guidance surfaces immediately
    pub high_priority: bool,
    /// Dismiss when tapped
    pub auto_cancel: bool,
    /// Auto-dismiss timeout in milliseconds
    pub timeout_ms: u64,
}

impl RelayNotification {
    /// Compose a notification from a navigation event
    pub fn from_event(event: &NavigationEvent, suffix: &str, timeout_ms: u64) -> Self {
        let title = format!(
            "({}){} . {}",
            event.symbol.marker(),
            event.distance,
            event.maneuver_text
        );
        let body = format!(
            "{} - {}",
            event.time_dist_info.as_deref().unwrap_or(FALLBACK_BODY),
            suffix
        );
        Self {
            title,
            body,
            high_priority: true,
            auto_cancel: true,
            timeout_ms,
        }
    }

    /// Timestamped line appended to the on-screen log
    pub fn log_line(&self, event: &NavigationEvent) -> String {
        format!(
            "[{}] 📱⌚\n📍 {}\n💬 {}\n\n",
            event.timestamp.format("%H:%M:%S"),
            self.title,
            self.body
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::classify::DirectionSymbol;

    fn left_turn_event() -> NavigationEvent {
        NavigationEvent {
            symbol: DirectionSymbol::Left,
            distance: "200 ft".to_string(),
            maneuver_text: "Turn left onto Elm St".to_string(),
            time_dist_info: Some("1 min · 200 ft".to_string()),
            timestamp: Utc.with_ymd_and_hms(2024, 5, 4, 9, 30, 15).unwrap(),
        }
    }

    #[test]
    fn title_composes_marker_distance_and_maneuver() {
        let note = RelayNotification::from_event(&left_turn_event(), "🗺️", 60_000);
        assert_eq!(note.title, "(⬅️)200 ft . Turn left onto Elm St");
    }

    #[test]
    fn body_suffixes_the_fixed_marker() {
        let note = RelayNotification::from_event(&left_turn_event(), "🗺️", 60_000);
        assert_eq!(note.body, "1 min · 200 ft - 🗺️");
    }

    #[test]
    fn body_falls_back_when_time_dist_info_is_absent() {
        let mut event = left_turn_event();
        event.time_dist_info = None;
        let note = RelayNotification::from_event(&event, "🗺️", 60_000);
        assert_eq!(note.body, "Navigation update - 🗺️");
    }

    #[test]
    fn posting_hints_are_set() {
        let note = RelayNotification::from_event(&left_turn_event(), "🗺️", 60_000);
        assert!(note.high_priority);
        assert!(note.auto_cancel);
        assert_eq!(note.timeout_ms, 60_000);
    }

    #[test]
    fn log_line_is_timestamped_and_shaped() {
        let event = left_turn_event();
        let note = RelayNotification::from_event(&event, "🗺️", 60_000);
        let line = note.log_line(&event);
        assert_eq!(
            line,
            "[09:30:15] 📱⌚\n📍 (⬅️)200 ft . Turn left onto Elm St\n💬 1 min · 200 ft - 🗺️\n\n"
        );
    }
}
