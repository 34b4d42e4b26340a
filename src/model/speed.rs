//! Speed profiles: configured transit speed per equipment type.

use serde::{Deserialize, Serialize};

/// A travel-speed assumption for one equipment type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedProfile {
    #[serde(rename = "type")]
    pub kind: String,
    pub speed_km_per_day: f64,
}

impl SpeedProfile {
    pub fn new(kind: impl Into<String>, speed_km_per_day: f64) -> Self {
        Self {
            kind: kind.into(),
            speed_km_per_day,
        }
    }
}
