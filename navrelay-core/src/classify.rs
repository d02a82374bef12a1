//! Maneuver text classification
//!
//! Maps the free-text guidance field of a source notification onto a
//! compact direction symbol. Matching is ordered, case-insensitive
//! substring matching; the first rule that matches wins. The rule order
//! reproduces the phrasing observed from the source app, including rules
//! that earlier, broader rules shadow. Changing the order changes
//! observable output, so it stays as observed.

use serde::{Deserialize, Serialize};

/// Symbolic form of a turn-by-turn maneuver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectionSymbol {
    Right,
    Left,
    SlightRight,
    SlightLeft,
    UTurn,
    Roundabout,
    Straight,
    Destination,
    /// Fallback for absent, empty, or unrecognized text
    Unknown,
}

impl DirectionSymbol {
    /// Emoji marker used when rendering the symbol
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Right => "➡️",
            Self::Left => "⬅️",
            Self::SlightRight => "↗️",
            Self::SlightLeft => "↖️",
            Self::UTurn => "↩️",
            Self::Roundabout => "🔄",
            Self::Straight => "⬆️",
            Self::Destination => "🏁",
            Self::Unknown => "📍",
        }
    }
}

/// Classify raw maneuver text into a direction symbol.
///
/// Total and deterministic: absent, empty, and unrecognized text all
/// collapse to [`DirectionSymbol::Unknown`].
pub fn classify(text: Option<&str>) -> DirectionSymbol {
    let Some(text) = text else {
        return DirectionSymbol::Unknown;
    };
    let lower = text.to_lowercase();

    if contains_any(&lower, &["turn right", "exit right", "right"]) {
        DirectionSymbol::Right
    } else if contains_any(&lower, &["turn left", "exit left", "left"]) {
        DirectionSymbol::Left
    } else if contains_any(&lower, &["keep right", "right"]) {
        // Shadowed by the Right rule above; kept as observed behavior.
        DirectionSymbol::SlightRight
    } else if contains_any(&lower, &["keep left", "left"]) {
        // Shadowed by the Left rule above; kept as observed behavior.
        DirectionSymbol::SlightLeft
    } else if contains_any(&lower, &["make a u-turn", "u"]) {
        // The bare "u" token matches inside words like "continue".
        DirectionSymbol::UTurn
    } else if contains_any(&lower, &["roundabout", "round"]) {
        DirectionSymbol::Roundabout
    } else if contains_any(&lower, &["continue straight", "go straight", "straight"])
        || lower.starts_with("head")
    {
        // "straight" can arrive as "Head north", "Head west", etc.
        DirectionSymbol::Straight
    } else if lower.contains("destination") {
        DirectionSymbol::Destination
    } else {
        DirectionSymbol::Unknown
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
