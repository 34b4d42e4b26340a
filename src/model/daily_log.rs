//! Daily log: one day of progress for an asset on a project.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLog {
    pub id: Uuid,
    pub project_id: String,
    pub asset_id: String,
    pub date: Date,
    pub hours_worked: f64,
    pub progress_value: f64,
    pub progress_unit: String,

    /// Reasons for lost time, e.g. "Weather" or "Mechanical".
    #[serde(default)]
    pub downtime_tags: Vec<String>,

    #[serde(default)]
    pub notes: String,

    #[serde(default)]
    pub attachments: Vec<String>,
}
