//! Assignment types: an asset dispatched to a project.

use std::{fmt, str::FromStr};

use jiff::{Timestamp, civil::Date};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AssetStatus, UnknownVariant};

/// An asset committed to a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: Uuid,
    pub project_id: String,
    pub asset_id: String,

    /// Expected arrival on site.
    pub eta_estimate: Date,

    #[serde(default)]
    pub mobilization_checklist: Vec<ChecklistItem>,

    #[serde(default)]
    pub risk_notes: String,

    pub status: AssignmentStatus,
    pub created_at: Timestamp,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

/// One line of a mobilization checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub item: String,
    pub done: bool,
}

impl ChecklistItem {
    /// An item that still has to be done.
    pub fn open(item: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            done: false,
        }
    }
}

/// Where an assignment stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssignmentStatus {
    Planned,
    Active,
    Completed,
}

impl AssignmentStatus {
    pub const ALL: [Self; 3] = [Self::Planned, Self::Active, Self::Completed];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Planned => "Planned",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }

    /// The status the assigned asset takes on when the assignment
    /// enters this state.
    pub fn asset_status(self) -> AssetStatus {
        match self {
            Self::Planned => AssetStatus::Mobilizing,
            Self::Active => AssetStatus::Working,
            Self::Completed => AssetStatus::Idle,
        }
    }
}

impl fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for AssignmentStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "assignment status",
                value: s.to_string(),
            })
    }
}
