//! Project types: civil and marine works that assets are dispatched to.

use std::{fmt, str::FromStr};

use jiff::{Timestamp, civil::Date};
use serde::{Deserialize, Serialize};

use super::{Coordinates, ServiceLine, UnknownVariant};

/// A construction project at a fixed site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub client_type: String,
    pub service_line: ServiceLine,
    pub phase: ProjectPhase,
    pub planned_start: Date,
    pub planned_end: Date,

    /// 1 is the most urgent.
    pub priority: u32,

    /// Site position.
    #[serde(flatten)]
    pub position: Coordinates,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risks: Option<String>,

    pub last_update_at: Timestamp,
}

/// A project's current lifecycle stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectPhase {
    Mobilisasi,
    Survey,
    Lokasi,
    Perakitan,
    Operasi,
    Disposal,
}

impl ProjectPhase {
    pub const ALL: [Self; 6] = [
        Self::Mobilisasi,
        Self::Survey,
        Self::Lokasi,
        Self::Perakitan,
        Self::Operasi,
        Self::Disposal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mobilisasi => "Mobilisasi",
            Self::Survey => "Survey",
            Self::Lokasi => "Lokasi",
            Self::Perakitan => "Perakitan",
            Self::Operasi => "Operasi",
            Self::Disposal => "Disposal",
        }
    }
}

impl fmt::Display for ProjectPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ProjectPhase {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|phase| phase.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "project phase",
                value: s.to_string(),
            })
    }
}
