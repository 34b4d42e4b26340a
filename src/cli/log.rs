//! Daily progress log commands: add, list.

use clap::{Args, Subcommand};
use jiff::civil::Date;
use uuid::Uuid;

use crate::model::DailyLog;
use crate::seed::DOWNTIME_TAGS;
use crate::storage::Storage;

use super::format::format_log_row;

#[derive(Debug, Subcommand)]
pub enum LogCommand {
    /// Record a day of work. Prints the log ID.
    Add(AddLog),

    /// List daily logs, most recent first.
    List {
        /// Only logs for this project.
        #[arg(long)]
        project: Option<String>,
    },
}

#[derive(Debug, Args)]
pub struct AddLog {
    /// Project ID.
    #[arg(long)]
    project: String,

    /// Asset ID.
    #[arg(long)]
    asset: String,

    /// Day worked (YYYY-MM-DD).
    #[arg(long)]
    date: Date,

    #[arg(long)]
    hours: f64,

    /// Output for the day, in `--unit`.
    #[arg(long)]
    progress: f64,

    #[arg(long, default_value = "m3/day")]
    unit: String,

    /// Downtime reason: Weather, Mechanical, Permit, Crew, Fuel Delay,
    /// or Other. Can be specified multiple times.
    #[arg(long = "tag")]
    tags: Vec<String>,

    #[arg(long, default_value = "")]
    notes: String,

    /// Path or URL of a supporting file. Can be specified multiple times.
    #[arg(long = "attach")]
    attachments: Vec<String>,
}

pub(super) fn cmd_add(storage: &Storage, args: AddLog) -> Result<(), String> {
    let AddLog {
        project,
        asset,
        date,
        hours,
        progress,
        unit,
        tags,
        notes,
        attachments,
    } = args;

    if !hours.is_finite() || hours < 0.0 {
        return Err(format!("hours must be zero or more, got {hours}"));
    }
    if !progress.is_finite() || progress < 0.0 {
        return Err(format!("progress must be zero or more, got {progress}"));
    }
    let downtime_tags = tags
        .iter()
        .map(|t| normalize_tag(t))
        .collect::<Result<Vec<_>, _>>()?;

    storage
        .get_project(&project)
        .map_err(|e| format!("failed to load project: {e}"))?;
    storage
        .get_asset(&asset)
        .map_err(|e| format!("failed to load asset: {e}"))?;

    let log = DailyLog {
        id: Uuid::new_v4(),
        project_id: project,
        asset_id: asset,
        date,
        hours_worked: hours,
        progress_value: progress,
        progress_unit: unit,
        downtime_tags,
        notes,
        attachments,
    };
    storage
        .create_daily_log(&log)
        .map_err(|e| format!("failed to record daily log: {e}"))?;

    println!("{}", log.id);
    Ok(())
}

pub(super) fn cmd_list(storage: &Storage, project: Option<&str>) -> Result<(), String> {
    let logs = storage
        .list_daily_logs(project)
        .map_err(|e| format!("failed to list daily logs: {e}"))?;

    if logs.is_empty() {
        println!("No daily logs");
        return Ok(());
    }

    for log in &logs {
        println!("{}", format_log_row(log));
    }
    Ok(())
}

/// Match a downtime tag case-insensitively, returning its canonical spelling.
fn normalize_tag(tag: &str) -> Result<String, String> {
    DOWNTIME_TAGS
        .iter()
        .find(|known| known.eq_ignore_ascii_case(tag.trim()))
        .map(ToString::to_string)
        .ok_or_else(|| {
            format!(
                "unknown downtime tag '{tag}' (expected one of: {})",
                DOWNTIME_TAGS.join(", ")
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_matched_case_insensitively() {
        assert_eq!(normalize_tag("fuel delay").unwrap(), "Fuel Delay");
        assert_eq!(normalize_tag(" WEATHER ").unwrap(), "Weather");
    }

    #[test]
    fn unknown_tag_lists_the_options() {
        let err = normalize_tag("Tsunami").unwrap_err();
        assert!(err.contains("Tsunami"));
        assert!(err.contains("Mechanical"));
    }
}
