//! Asset storage: list, load, upsert, and status updates.

use jiff::Timestamp;
use rusqlite::{OptionalExtension, Row};

use crate::model::{Asset, AssetStatus, Coordinates, HomeBase};

use super::{Result, Storage, StorageError, parse_column};

const COLUMNS: &str = "id, name, type, service_line, home_base_label, home_base_lat, \
    home_base_lng, lat, lng, status, availability_date, capability_profile, \
    last_update_at, last_update_by";

impl Storage {
    /// Lists all assets, sorted by name.
    pub fn list_assets(&self) -> Result<Vec<Asset>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {COLUMNS} FROM assets ORDER BY name, id"))?;
        let rows = stmt.query_map([], AssetRow::read)?;
        rows.map(|row| row?.into_asset()).collect()
    }

    /// Loads a single asset.
    pub fn get_asset(&self, id: &str) -> Result<Asset> {
        self.conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM assets WHERE id = ?1"),
                [id],
                AssetRow::read,
            )
            .optional()?
            .ok_or_else(|| StorageError::AssetNotFound(id.to_string()))?
            .into_asset()
    }

    /// Inserts an asset, or replaces the one with the same id.
    pub fn upsert_asset(&self, asset: &Asset) -> Result<()> {
        let profile = serde_json::to_string(&asset.capability_profile)?;
        let home = asset.home_base.as_ref();
        self.conn.execute(
            &format!(
                "INSERT OR REPLACE INTO assets ({COLUMNS})
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)"
            ),
            rusqlite::params![
                &asset.id,
                &asset.name,
                &asset.kind,
                asset.service_line.as_str(),
                home.map(|h| h.label.as_str()),
                home.map(|h| h.position.lat),
                home.map(|h| h.position.lng),
                asset.position.lat,
                asset.position.lng,
                asset.status.as_str(),
                asset.availability_date.to_string(),
                profile,
                asset.last_update_at.to_string(),
                asset.last_update_by.as_deref(),
            ],
        )?;
        Ok(())
    }

    /// Sets an asset's status, stamping who changed it and when.
    pub fn update_asset_status(
        &self,
        id: &str,
        status: AssetStatus,
        at: Timestamp,
        by: Option<&str>,
    ) -> Result<()> {
        let rows = self.conn.execute(
            "UPDATE assets SET status = ?1, last_update_at = ?2, last_update_by = ?3
             WHERE id = ?4",
            rusqlite::params![status.as_str(), at.to_string(), by, id],
        )?;
        if rows == 0 {
            return Err(StorageError::AssetNotFound(id.to_string()));
        }
        Ok(())
    }
}

/// Raw column values, converted into an [`Asset`] outside the row callback
/// so parse failures surface as [`StorageError::Corrupt`].
struct AssetRow {
    id: String,
    name: String,
    kind: String,
    service_line: String,
    home_base_label: Option<String>,
    home_base_lat: Option<f64>,
    home_base_lng: Option<f64>,
    lat: f64,
    lng: f64,
    status: String,
    availability_date: String,
    capability_profile: String,
    last_update_at: String,
    last_update_by: Option<String>,
}

impl AssetRow {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            kind: row.get(2)?,
            service_line: row.get(3)?,
            home_base_label: row.get(4)?,
            home_base_lat: row.get(5)?,
            home_base_lng: row.get(6)?,
            lat: row.get(7)?,
            lng: row.get(8)?,
            status: row.get(9)?,
            availability_date: row.get(10)?,
            capability_profile: row.get(11)?,
            last_update_at: row.get(12)?,
            last_update_by: row.get(13)?,
        })
    }

    fn into_asset(self) -> Result<Asset> {
        let home_base = match (self.home_base_label, self.home_base_lat, self.home_base_lng) {
            (Some(label), Some(lat), Some(lng)) => Some(HomeBase {
                label,
                position: Coordinates::new(lat, lng),
            }),
            (None, None, None) => None,
            _ => {
                return Err(StorageError::Corrupt(format!(
                    "asset {} has a partial home base",
                    self.id
                )));
            }
        };

        Ok(Asset {
            service_line: parse_column(&self.service_line, "service_line")?,
            status: parse_column(&self.status, "status")?,
            availability_date: parse_column(&self.availability_date, "availability_date")?,
            capability_profile: serde_json::from_str(&self.capability_profile)?,
            last_update_at: parse_column(&self.last_update_at, "last_update_at")?,
            id: self.id,
            name: self.name,
            kind: self.kind,
            home_base,
            position: Coordinates::new(self.lat, self.lng),
            last_update_by: self.last_update_by,
        })
    }
}
