//! Key/value settings, stored as JSON text.

use rusqlite::OptionalExtension;

use crate::model::RoiAssumptions;

use super::{Result, Storage};

const ROI_ASSUMPTIONS: &str = "roi_assumptions";

impl Storage {
    /// The saved ROI assumptions, or the defaults if none were saved.
    pub fn roi_assumptions(&self) -> Result<RoiAssumptions> {
        let value: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                [ROI_ASSUMPTIONS],
                |row| row.get(0),
            )
            .optional()?;
        match value {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(RoiAssumptions::default()),
        }
    }

    /// Replaces the saved ROI assumptions.
    pub fn save_roi_assumptions(&self, roi: &RoiAssumptions) -> Result<()> {
        let json = serde_json::to_string(roi)?;
        self.conn.execute(
            "INSERT INTO settings (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            rusqlite::params![ROI_ASSUMPTIONS, json],
        )?;
        tracing::debug!(recovery = roi.annual_recovery(), "saved ROI assumptions");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::model::RoiAssumptions;
    use crate::storage::tests::test_storage;

    #[test]
    fn defaults_until_saved() {
        let (_dir, storage) = test_storage();
        assert_eq!(
            storage.roi_assumptions().unwrap(),
            RoiAssumptions::default()
        );
    }

    #[test]
    fn save_overwrites() {
        let (_dir, storage) = test_storage();
        let mut roi = RoiAssumptions {
            asset_sets: 10.0,
            ..RoiAssumptions::default()
        };
        storage.save_roi_assumptions(&roi).unwrap();
        roi.jobs_per_year = 20.0;
        storage.save_roi_assumptions(&roi).unwrap();

        assert_eq!(storage.roi_assumptions().unwrap(), roi);
    }

    #[test]
    fn reset_keeps_roi_assumptions() {
        let (_dir, storage) = test_storage();
        let roi = RoiAssumptions {
            idle_days_baseline: 50.0,
            ..RoiAssumptions::default()
        };
        storage.save_roi_assumptions(&roi).unwrap();
        storage.reset().unwrap();

        assert_eq!(storage.roi_assumptions().unwrap(), roi);
    }
}
