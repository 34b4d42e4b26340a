//! Local persistence for the fleet.
//!
//! Everything lives in a single `SQLite` file:
//!
//! ```text
//! ~/.fleetdesk/
//!   fleetdesk.sqlite   # assets, projects, speed_profiles, assignments, daily_logs, settings
//! ```
//!
//! Nested records (capability profiles, checklists, tag lists) are stored
//! as JSON text columns.

mod assets;
mod assignments;
mod daily_logs;
mod projects;
mod settings;
mod speeds;

use std::{fmt::Display, fs, io, path::PathBuf, str::FromStr};

use rusqlite::Connection;
use uuid::Uuid;

use crate::seed;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("asset not found: {0}")]
    AssetNotFound(String),

    #[error("project not found: {0}")]
    ProjectNotFound(String),

    #[error("assignment not found: {0}")]
    AssignmentNotFound(Uuid),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupt record: {0}")]
    Corrupt(String),
}

pub type Result<T> = core::result::Result<T, StorageError>;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS assets (
    id                 TEXT PRIMARY KEY,
    name               TEXT NOT NULL,
    type               TEXT NOT NULL,
    service_line       TEXT NOT NULL,
    home_base_label    TEXT,
    home_base_lat      REAL,
    home_base_lng      REAL,
    lat                REAL NOT NULL,
    lng                REAL NOT NULL,
    status             TEXT NOT NULL,
    availability_date  TEXT NOT NULL,
    capability_profile TEXT NOT NULL,
    last_update_at     TEXT NOT NULL,
    last_update_by     TEXT
);
CREATE TABLE IF NOT EXISTS projects (
    id             TEXT PRIMARY KEY,
    name           TEXT NOT NULL,
    client_type    TEXT NOT NULL,
    service_line   TEXT NOT NULL,
    phase          TEXT NOT NULL,
    planned_start  TEXT NOT NULL,
    planned_end    TEXT NOT NULL,
    priority       INTEGER NOT NULL,
    lat            REAL NOT NULL,
    lng            REAL NOT NULL,
    notes          TEXT,
    risks          TEXT,
    last_update_at TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS speed_profiles (
    type             TEXT PRIMARY KEY,
    speed_km_per_day REAL NOT NULL
);
CREATE TABLE IF NOT EXISTS assignments (
    id                     TEXT PRIMARY KEY,
    project_id             TEXT NOT NULL,
    asset_id               TEXT NOT NULL,
    eta_estimate           TEXT NOT NULL,
    mobilization_checklist TEXT NOT NULL,
    risk_notes             TEXT NOT NULL,
    status                 TEXT NOT NULL,
    created_at             TEXT NOT NULL,
    created_by             TEXT
);
CREATE TABLE IF NOT EXISTS daily_logs (
    id             TEXT PRIMARY KEY,
    project_id     TEXT NOT NULL,
    asset_id       TEXT NOT NULL,
    date           TEXT NOT NULL,
    hours_worked   REAL NOT NULL,
    progress_value REAL NOT NULL,
    progress_unit  TEXT NOT NULL,
    downtime_tags  TEXT NOT NULL,
    notes          TEXT NOT NULL,
    attachments    TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS settings (
    key   TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
";

/// `SQLite`-backed store for the fleet and its history.
pub struct Storage {
    conn: Connection,
}

impl Storage {
    /// Opens (or creates) the store at the given path.
    ///
    /// The parent directory is created if it doesn't exist.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(&path)?;
        conn.execute_batch(SCHEMA)?;
        tracing::debug!(path = %path.display(), "opened store");
        Ok(Self { conn })
    }

    /// Returns the default store path: `~/.fleetdesk/fleetdesk.sqlite`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".fleetdesk").join("fleetdesk.sqlite"))
    }

    /// Whether the store holds no assets and no projects.
    pub fn is_empty(&self) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT (SELECT COUNT(*) FROM assets) + (SELECT COUNT(*) FROM projects)",
            [],
            |row| row.get(0),
        )?;
        Ok(count == 0)
    }

    /// Seeds the demo data set if the store is empty.
    ///
    /// Returns whether seeding happened.
    pub fn seed_if_empty(&self) -> Result<bool> {
        if !self.is_empty()? {
            return Ok(false);
        }
        self.reset()?;
        Ok(true)
    }

    /// Runs `f` inside a transaction, committing only if it succeeds.
    pub fn in_transaction<T, E>(
        &self,
        f: impl FnOnce(&Self) -> core::result::Result<T, E>,
    ) -> core::result::Result<T, E>
    where
        E: From<StorageError>,
    {
        let tx = self.conn.unchecked_transaction().map_err(StorageError::from)?;
        let value = f(self)?;
        tx.commit().map_err(StorageError::from)?;
        Ok(value)
    }

    /// Wipes the fleet tables and reloads the demo data set.
    ///
    /// Either everything is replaced or nothing is. Settings are kept.
    pub fn reset(&self) -> Result<()> {
        self.in_transaction(|store| {
            store.conn.execute_batch(
                "DELETE FROM assets;
                 DELETE FROM projects;
                 DELETE FROM speed_profiles;
                 DELETE FROM assignments;
                 DELETE FROM daily_logs;",
            )?;
            for asset in seed::assets() {
                store.upsert_asset(&asset)?;
            }
            for project in seed::projects() {
                store.upsert_project(&project)?;
            }
            for profile in seed::default_speed_profiles() {
                store.upsert_speed_profile(&profile)?;
            }
            for assignment in seed::assignments() {
                store.create_assignment(&assignment)?;
            }
            for log in seed::daily_logs() {
                store.create_daily_log(&log)?;
            }
            Ok::<_, StorageError>(())
        })?;
        tracing::info!("store reset to demo data");
        Ok(())
    }
}

/// Parses a text column, reporting a corrupt record on failure.
fn parse_column<T>(value: &str, column: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .parse()
        .map_err(|e| StorageError::Corrupt(format!("invalid {column} {value:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::Timestamp;
    use tempfile::TempDir;

    use crate::model::{AssetStatus, SpeedProfile};

    pub(super) fn test_storage() -> (TempDir, Storage) {
        let dir = TempDir::new().unwrap();
        let storage = Storage::open(dir.path().join("fleet").join("fleetdesk.sqlite")).unwrap();
        (dir, storage)
    }

    #[test]
    fn new_store_is_empty() {
        let (_dir, storage) = test_storage();
        assert!(storage.is_empty().unwrap());
        assert!(storage.list_assets().unwrap().is_empty());
    }

    #[test]
    fn seed_if_empty_seeds_once() {
        let (_dir, storage) = test_storage();
        assert!(storage.seed_if_empty().unwrap());
        assert!(!storage.seed_if_empty().unwrap());

        assert_eq!(storage.list_assets().unwrap().len(), seed::assets().len());
        assert_eq!(storage.list_projects().unwrap().len(), seed::projects().len());
        assert_eq!(
            storage.list_speed_profiles().unwrap().len(),
            seed::default_speed_profiles().len()
        );
        assert_eq!(storage.list_assignments().unwrap().len(), 2);
        assert_eq!(storage.list_daily_logs(None).unwrap().len(), 16);
    }

    #[test]
    fn reset_discards_changes() {
        let (_dir, storage) = test_storage();
        storage.reset().unwrap();

        let mut asset = storage.get_asset("a3").unwrap();
        asset.name = "Renamed".into();
        storage.upsert_asset(&asset).unwrap();
        storage
            .upsert_speed_profile(&SpeedProfile::new("Hovercraft", 400.0))
            .unwrap();

        storage.reset().unwrap();
        assert_eq!(storage.get_asset("a3").unwrap().name, "Pontoon Alpha");
        assert!(!storage.speed_table().unwrap().contains("Hovercraft"));
    }

    #[test]
    fn reopen_preserves_data() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fleetdesk.sqlite");
        {
            let storage = Storage::open(&path).unwrap();
            storage.reset().unwrap();
        }
        let storage = Storage::open(&path).unwrap();
        assert!(!storage.is_empty().unwrap());
        assert_eq!(storage.get_project("p3").unwrap().name, "KPC Pit Dewatering");
    }

    #[test]
    fn failed_transaction_rolls_back() {
        let (_dir, storage) = test_storage();
        storage.reset().unwrap();

        let now = Timestamp::now();
        let result = storage.in_transaction(|store| {
            store.update_asset_status("a3", AssetStatus::Working, now, None)?;
            store.update_asset_status("nope", AssetStatus::Working, now, None)
        });
        assert!(matches!(result, Err(StorageError::AssetNotFound(_))));
        assert_eq!(storage.get_asset("a3").unwrap().status, AssetStatus::Idle);
    }

    #[test]
    fn parse_column_reports_corruption() {
        let err = parse_column::<jiff::civil::Date>("2026-13-40", "availability_date").unwrap_err();
        assert!(matches!(err, StorageError::Corrupt(_)));
        assert!(err.to_string().contains("availability_date"));
    }
}
