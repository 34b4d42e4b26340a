//! Core data model for fleetdesk.
//!
//! These types are the records the dispatch desk works with:
//! assets, projects, speed profiles, assignments, daily logs, and the
//! ROI assumptions.
//! The recommendation engine reads them; only storage writes them.

mod asset;
mod assignment;
mod daily_log;
mod project;
mod roi;
mod speed;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub use asset::{Asset, AssetStatus, CapabilityProfile, ConstraintValue, HomeBase};
pub use assignment::{Assignment, AssignmentStatus, ChecklistItem};
pub use daily_log::DailyLog;
pub use project::{Project, ProjectPhase};
pub use roi::RoiAssumptions;
pub use speed::SpeedProfile;

/// A string did not name any variant of a record enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// The category of engineering work an asset or project belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceLine {
    Dredging,
    Dewatering,
    SoilImprovement,
}

impl ServiceLine {
    pub const ALL: [Self; 3] = [Self::Dredging, Self::Dewatering, Self::SoilImprovement];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dredging => "Dredging",
            Self::Dewatering => "Dewatering",
            Self::SoilImprovement => "SoilImprovement",
        }
    }
}

impl fmt::Display for ServiceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ServiceLine {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|line| line.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "service line",
                value: s.to_string(),
            })
    }
}
