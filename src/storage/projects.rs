//! Project storage: list, load, and upsert.

use rusqlite::{OptionalExtension, Row};

use crate::model::{Coordinates, Project};

use super::{Result, Storage, StorageError, parse_column};

const COLUMNS: &str = "id, name, client_type, service_line, phase, planned_start, \
    planned_end, priority, lat, lng, notes, risks, last_update_at";

impl Storage {
    /// Lists all projects, most urgent first, then by name.
    pub fn list_projects(&self) -> Result<Vec<Project>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {COLUMNS} FROM projects ORDER BY priority, name, id"
        ))?;
        let rows = stmt.query_map([], ProjectRow::read)?;
        rows.map(|row| row?.into_project()).collect()
    }

    /// Loads a single project.
    pub fn get_project(&self, id: &str) -> Result<Project> {
        self.conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM projects WHERE id = ?1"),
                [id],
                ProjectRow::read,
            )
            .optional()?
            .ok_or_else(|| StorageError::ProjectNotFound(id.to_string()))?
            .into_project()
    }

    /// Inserts a project, or replaces the one with the same id.
    pub fn upsert_project(&self, project: &Project) -> Result<()> {
        self.conn.execute(
            &format!(
                "INSERT OR REPLACE INTO projects ({COLUMNS})
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)"
            ),
            rusqlite::params![
                &project.id,
                &project.name,
                &project.client_type,
                project.service_line.as_str(),
                project.phase.as_str(),
                project.planned_start.to_string(),
                project.planned_end.to_string(),
                project.priority,
                project.position.lat,
                project.position.lng,
                project.notes.as_deref(),
                project.risks.as_deref(),
                project.last_update_at.to_string(),
            ],
        )?;
        Ok(())
    }
}

struct ProjectRow {
    id: String,
    name: String,
    client_type: String,
    service_line: String,
    phase: String,
    planned_start: String,
    planned_end: String,
    priority: u32,
    lat: f64,
    lng: f64,
    notes: Option<String>,
    risks: Option<String>,
    last_update_at: String,
}

impl ProjectRow {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            client_type: row.get(2)?,
            service_line: row.get(3)?,
            phase: row.get(4)?,
            planned_start: row.get(5)?,
            planned_end: row.get(6)?,
            priority: row.get(7)?,
            lat: row.get(8)?,
            lng: row.get(9)?,
            notes: row.get(10)?,
            risks: row.get(11)?,
            last_update_at: row.get(12)?,
        })
    }

    fn into_project(self) -> Result<Project> {
        Ok(Project {
            service_line: parse_column(&self.service_line, "service_line")?,
            phase: parse_column(&self.phase, "phase")?,
            planned_start: parse_column(&self.planned_start, "planned_start")?,
            planned_end: parse_column(&self.planned_end, "planned_end")?,
            last_update_at: parse_column(&self.last_update_at, "last_update_at")?,
            id: self.id,
            name: self.name,
            client_type: self.client_type,
            priority: self.priority,
            position: Coordinates::new(self.lat, self.lng),
            notes: self.notes,
            risks: self.risks,
        })
    }
}
