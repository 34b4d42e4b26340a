//! Speed profile storage: one row per equipment type.

use crate::model::SpeedProfile;
use crate::recommend::SpeedTable;

use super::{Result, Storage};

impl Storage {
    /// Lists speed profiles, sorted by type.
    pub fn list_speed_profiles(&self) -> Result<Vec<SpeedProfile>> {
        let mut stmt = self
            .conn
            .prepare("SELECT type, speed_km_per_day FROM speed_profiles ORDER BY type")?;
        let rows = stmt.query_map([], |row| {
            Ok(SpeedProfile {
                kind: row.get(0)?,
                speed_km_per_day: row.get(1)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<_>>()?)
    }

    /// All speed profiles as a lookup table.
    pub fn speed_table(&self) -> Result<SpeedTable> {
        Ok(SpeedTable::from(self.list_speed_profiles()?.as_slice()))
    }

    /// Sets the speed for a type, inserting the type if it is new.
    pub fn upsert_speed_profile(&self, profile: &SpeedProfile) -> Result<()> {
        self.conn.execute(
            "INSERT INTO speed_profiles (type, speed_km_per_day) VALUES (?1, ?2)
             ON CONFLICT(type) DO UPDATE SET speed_km_per_day = excluded.speed_km_per_day",
            rusqlite::params![&profile.kind, profile.speed_km_per_day],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::model::SpeedProfile;
    use crate::recommend::FALLBACK_SPEED_KM_PER_DAY;
    use crate::storage::tests::test_storage;

    #[test]
    fn upsert_inserts_then_updates() {
        let (_dir, storage) = test_storage();
        storage
            .upsert_speed_profile(&SpeedProfile::new("CSD", 95.0))
            .unwrap();
        storage
            .upsert_speed_profile(&SpeedProfile::new("CSD", 110.0))
            .unwrap();

        let profiles = storage.list_speed_profiles().unwrap();
        assert_eq!(profiles, vec![SpeedProfile::new("CSD", 110.0)]);
    }

    #[test]
    fn table_falls_back_for_unknown_types() {
        let (_dir, storage) = test_storage();
        storage.reset().unwrap();

        let table = storage.speed_table().unwrap();
        assert_eq!(table.resolve("Pump Set"), 260.0);
        assert_eq!(table.resolve("Hovercraft"), FALLBACK_SPEED_KM_PER_DAY);
    }

    #[test]
    fn list_is_sorted_by_type() {
        let (_dir, storage) = test_storage();
        storage.reset().unwrap();

        let kinds: Vec<_> = storage
            .list_speed_profiles()
            .unwrap()
            .into_iter()
            .map(|p| p.kind)
            .collect();
        assert_eq!(
            kinds,
            [
                "Acetube System",
                "CSD",
                "PVD Rig",
                "Pontoon Excavator",
                "Pump Set",
                "Support Tug"
            ]
        );
    }
}
