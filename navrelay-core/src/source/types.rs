//! Source post types

use serde::{Deserialize, Serialize};

use crate::events::RawGuidance;

/// One notification as observed from the platform, before filtering
///
/// Field names follow the platform's notification extras: `title` carries
/// the distance, `text` the maneuver description, `sub_text` the
/// time/distance summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcePost {
    /// Package identifier of the posting application
    pub package: String,
    /// Distance to the maneuver, e.g. "200 ft"
    #[serde(default)]
    pub title: Option<String>,
    /// Maneuver description, e.g. "Turn left onto Elm St"
    #[serde(default)]
    pub text: Option<String>,
    /// Time/distance summary, e.g. "3 min · 240 m"
    #[serde(default)]
    pub sub_text: Option<String>,
}

impl SourcePost {
    /// Lift the guidance fields out of the post
    pub fn into_guidance(self) -> RawGuidance {
        RawGuidance {
            distance_text: self.title,
            maneuver_text: self.text,
            sub_text: self.sub_text,
        }
    }
}
