//! Assignment storage.

use rusqlite::{OptionalExtension, Row};
use uuid::Uuid;

use crate::model::Assignment;

use super::{Result, Storage, StorageError, parse_column};

const COLUMNS: &str = "id, project_id, asset_id, eta_estimate, mobilization_checklist, \
    risk_notes, status, created_at, created_by";

impl Storage {
    /// Records a new assignment.
    pub fn create_assignment(&self, assignment: &Assignment) -> Result<()> {
        let checklist = serde_json::to_string(&assignment.mobilization_checklist)?;
        self.conn.execute(
            &format!(
                "INSERT INTO assignments ({COLUMNS})
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)"
            ),
            rusqlite::params![
                assignment.id.to_string(),
                &assignment.project_id,
                &assignment.asset_id,
                assignment.eta_estimate.to_string(),
                checklist,
                &assignment.risk_notes,
                assignment.status.as_str(),
                assignment.created_at.to_string(),
                assignment.created_by.as_deref(),
            ],
        )?;
        Ok(())
    }

    /// Lists all assignments, newest first.
    ///
    /// Assignments created at the same instant come out in reverse
    /// insertion order.
    pub fn list_assignments(&self) -> Result<Vec<Assignment>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {COLUMNS} FROM assignments ORDER BY rowid DESC"
        ))?;
        let rows = stmt.query_map([], AssignmentRow::read)?;
        let mut assignments = rows
            .map(|row| row?.into_assignment())
            .collect::<Result<Vec<_>>>()?;
        // Timestamps don't sort as text, so order them here.
        assignments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(assignments)
    }

    /// Loads a single assignment.
    pub fn get_assignment(&self, id: Uuid) -> Result<Assignment> {
        self.conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM assignments WHERE id = ?1"),
                [id.to_string()],
                AssignmentRow::read,
            )
            .optional()?
            .ok_or(StorageError::AssignmentNotFound(id))?
            .into_assignment()
    }

    /// Overwrites the mutable fields of an existing assignment.
    ///
    /// The project, asset, and creation stamp never change.
    pub fn update_assignment(&self, assignment: &Assignment) -> Result<()> {
        let checklist = serde_json::to_string(&assignment.mobilization_checklist)?;
        let rows = self.conn.execute(
            "UPDATE assignments
             SET eta_estimate = ?1, mobilization_checklist = ?2, risk_notes = ?3, status = ?4
             WHERE id = ?5",
            rusqlite::params![
                assignment.eta_estimate.to_string(),
                checklist,
                &assignment.risk_notes,
                assignment.status.as_str(),
                assignment.id.to_string(),
            ],
        )?;
        if rows == 0 {
            return Err(StorageError::AssignmentNotFound(assignment.id));
        }
        Ok(())
    }
}

struct AssignmentRow {
    id: String,
    project_id: String,
    asset_id: String,
    eta_estimate: String,
    mobilization_checklist: String,
    risk_notes: String,
    status: String,
    created_at: String,
    created_by: Option<String>,
}

impl AssignmentRow {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            project_id: row.get(1)?,
            asset_id: row.get(2)?,
            eta_estimate: row.get(3)?,
            mobilization_checklist: row.get(4)?,
            risk_notes: row.get(5)?,
            status: row.get(6)?,
            created_at: row.get(7)?,
            created_by: row.get(8)?,
        })
    }

    fn into_assignment(self) -> Result<Assignment> {
        Ok(Assignment {
            id: parse_column(&self.id, "id")?,
            eta_estimate: parse_column(&self.eta_estimate, "eta_estimate")?,
            mobilization_checklist: serde_json::from_str(&self.mobilization_checklist)?,
            status: parse_column(&self.status, "status")?,
            created_at: parse_column(&self.created_at, "created_at")?,
            project_id: self.project_id,
            asset_id: self.asset_id,
            risk_notes: self.risk_notes,
            created_by: self.created_by,
        })
    }
}
