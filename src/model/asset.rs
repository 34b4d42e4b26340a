//! Asset types: mobilizable heavy equipment.

use std::{collections::BTreeMap, fmt, str::FromStr};

use jiff::{Timestamp, civil::Date};
use serde::{Deserialize, Serialize};

use super::{Coordinates, ServiceLine, UnknownVariant};

/// A piece of mobilizable heavy equipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub name: String,

    /// Equipment type. Free-form; keys into the speed table.
    #[serde(rename = "type")]
    pub kind: String,

    pub service_line: ServiceLine,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_base: Option<HomeBase>,

    /// Current position.
    #[serde(flatten)]
    pub position: Coordinates,

    pub status: AssetStatus,

    /// When the asset becomes free, if it is not already idle or on standby.
    pub availability_date: Date,

    pub capability_profile: CapabilityProfile,

    pub last_update_at: Timestamp,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update_by: Option<String>,
}

/// Where an asset returns to between jobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeBase {
    pub label: String,

    #[serde(flatten)]
    pub position: Coordinates,
}

/// What an asset can do and under which conditions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CapabilityProfile {
    #[serde(default)]
    pub constraints: Vec<String>,

    #[serde(default)]
    pub production_range: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Arbitrary flags. `restricted_phase` is read by the capability score.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub optional_constraints: BTreeMap<String, ConstraintValue>,
}

/// The value of an optional constraint flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConstraintValue {
    Text(String),
    Number(f64),
    Flag(bool),
}

impl ConstraintValue {
    /// The text value, if this is a text flag.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) | Self::Flag(_) => None,
        }
    }
}

impl fmt::Display for ConstraintValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Flag(b) => write!(f, "{b}"),
        }
    }
}

/// Where an asset stands operationally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetStatus {
    Working,
    Mobilizing,
    Idle,
    Maintenance,
    Standby,
}

impl AssetStatus {
    pub const ALL: [Self; 5] = [
        Self::Working,
        Self::Mobilizing,
        Self::Idle,
        Self::Maintenance,
        Self::Standby,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Working => "Working",
            Self::Mobilizing => "Mobilizing",
            Self::Idle => "Idle",
            Self::Maintenance => "Maintenance",
            Self::Standby => "Standby",
        }
    }

    /// Idle and standby assets can be dispatched right away,
    /// regardless of their recorded availability date.
    pub fn is_immediately_available(self) -> bool {
        matches!(self, Self::Idle | Self::Standby)
    }
}

impl fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for AssetStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "asset status",
                value: s.to_string(),
            })
    }
}
