//! Daily log storage.

use rusqlite::{Row, params_from_iter};

use crate::model::DailyLog;

use super::{Result, Storage, parse_column};

const COLUMNS: &str = "id, project_id, asset_id, date, hours_worked, progress_value, \
    progress_unit, downtime_tags, notes, attachments";

impl Storage {
    /// Records a day of work.
    pub fn create_daily_log(&self, log: &DailyLog) -> Result<()> {
        let tags = serde_json::to_string(&log.downtime_tags)?;
        let attachments = serde_json::to_string(&log.attachments)?;
        self.conn.execute(
            &format!(
                "INSERT INTO daily_logs ({COLUMNS})
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)"
            ),
            rusqlite::params![
                log.id.to_string(),
                &log.project_id,
                &log.asset_id,
                log.date.to_string(),
                log.hours_worked,
                log.progress_value,
                &log.progress_unit,
                tags,
                &log.notes,
                attachments,
            ],
        )?;
        Ok(())
    }

    /// Lists daily logs, most recent day first, optionally for one project.
    ///
    /// Logs for the same day keep the order they were recorded in.
    pub fn list_daily_logs(&self, project_id: Option<&str>) -> Result<Vec<DailyLog>> {
        let filter = if project_id.is_some() {
            "WHERE project_id = ?1"
        } else {
            ""
        };
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {COLUMNS} FROM daily_logs {filter} ORDER BY date DESC, rowid"
        ))?;
        let rows = stmt.query_map(params_from_iter(project_id), LogRow::read)?;
        rows.map(|row| row?.into_log()).collect()
    }
}

struct LogRow {
    id: String,
    project_id: String,
    asset_id: String,
    date: String,
    hours_worked: f64,
    progress_value: f64,
    progress_unit: String,
    downtime_tags: String,
    notes: String,
    attachments: String,
}

impl LogRow {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            project_id: row.get(1)?,
            asset_id: row.get(2)?,
            date: row.get(3)?,
            hours_worked: row.get(4)?,
            progress_value: row.get(5)?,
            progress_unit: row.get(6)?,
            downtime_tags: row.get(7)?,
            notes: row.get(8)?,
            attachments: row.get(9)?,
        })
    }

    fn into_log(self) -> Result<DailyLog> {
        Ok(DailyLog {
            id: parse_column(&self.id, "id")?,
            date: parse_column(&self.date, "date")?,
            downtime_tags: serde_json::from_str(&self.downtime_tags)?,
            attachments: serde_json::from_str(&self.attachments)?,
            project_id: self.project_id,
            asset_id: self.asset_id,
            hours_worked: self.hours_worked,
            progress_value: self.progress_value,
            progress_unit: self.progress_unit,
            notes: self.notes,
        })
    }
}
