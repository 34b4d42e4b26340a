//! Dispatch: commit assets to projects and keep asset status in step.
//!
//! An assignment and the status change it causes on its asset are written
//! in one transaction.

use jiff::{Timestamp, ToSpan, civil::Date};
use uuid::Uuid;

use crate::model::{AssetStatus, Assignment, AssignmentStatus, ChecklistItem};
use crate::recommend;
use crate::storage::{Storage, StorageError};

/// Errors that can occur while dispatching.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("no assets available to recommend for project {0}")]
    NoCandidates(String),
}

pub type Result<T> = core::result::Result<T, DispatchError>;

/// What to dispatch.
#[derive(Debug, Clone)]
pub struct NewAssignment {
    pub project_id: String,

    /// The asset to send. When `None`, the top recommendation is used.
    pub asset_id: Option<String>,

    /// Expected arrival. When `None`, derived from the recommendation's
    /// transit estimate.
    pub eta: Option<Date>,

    pub checklist: Vec<String>,
    pub risk_notes: String,
    pub status: AssignmentStatus,
    pub created_by: Option<String>,
}

/// Changes to an existing assignment. `None` leaves a field alone.
#[derive(Debug, Clone, Default)]
pub struct AssignmentUpdate {
    pub status: Option<AssignmentStatus>,
    pub eta: Option<Date>,
    pub risk_notes: Option<String>,
}

impl AssignmentUpdate {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.eta.is_none() && self.risk_notes.is_none()
    }
}

/// The status an asset takes on when an assignment is created for it.
///
/// A new assignment puts the asset in motion unless it was recorded as
/// already completed.
pub fn status_on_create(status: AssignmentStatus) -> AssetStatus {
    match status {
        AssignmentStatus::Completed => AssetStatus::Idle,
        AssignmentStatus::Planned | AssignmentStatus::Active => AssetStatus::Mobilizing,
    }
}

/// Create an assignment and update the asset's status.
///
/// `reference` is the date transit estimates count from; `now` stamps the
/// records.
pub fn create_assignment(
    storage: &Storage,
    new: NewAssignment,
    reference: Date,
    now: Timestamp,
) -> Result<Assignment> {
    let project = storage.get_project(&new.project_id)?;
    let speeds = storage.speed_table()?;

    let (asset, eta_days) = match &new.asset_id {
        Some(id) => {
            let asset = storage.get_asset(id)?;
            let eta_days = recommend::score_asset(&project, &asset, &speeds, reference).eta_days;
            (asset, eta_days)
        }
        None => {
            let assets = storage.list_assets()?;
            let best = recommend::recommend_top(&project, &assets, &speeds, reference, 1)
                .into_iter()
                .next()
                .map(|r| (r.asset.clone(), r.eta_days));
            best.ok_or_else(|| DispatchError::NoCandidates(project.id.clone()))?
        }
    };

    let eta_estimate = new
        .eta
        .unwrap_or_else(|| reference.saturating_add(i64::from(eta_days).days()));

    let assignment = Assignment {
        id: Uuid::new_v4(),
        project_id: project.id,
        asset_id: asset.id,
        eta_estimate,
        mobilization_checklist: new.checklist.into_iter().map(ChecklistItem::open).collect(),
        risk_notes: new.risk_notes,
        status: new.status,
        created_at: now,
        created_by: new.created_by,
    };
    let asset_status = status_on_create(assignment.status);

    storage.in_transaction(|store| {
        store.create_assignment(&assignment)?;
        store.update_asset_status(
            &assignment.asset_id,
            asset_status,
            now,
            assignment.created_by.as_deref(),
        )
    })?;

    tracing::info!(
        assignment = %assignment.id,
        project = %assignment.project_id,
        asset = %assignment.asset_id,
        eta = %assignment.eta_estimate,
        "assignment created"
    );
    tracing::debug!(asset = %assignment.asset_id, status = %asset_status, "asset status changed");
    Ok(assignment)
}

/// Apply `update` to an assignment.
///
/// Whatever changed, the asset's status is re-derived from the
/// assignment's resulting status (see [`AssignmentStatus::asset_status`])
/// and its update time is stamped.
pub fn update_assignment(
    storage: &Storage,
    id: Uuid,
    update: AssignmentUpdate,
    now: Timestamp,
    by: Option<&str>,
) -> Result<Assignment> {
    let mut assignment = storage.get_assignment(id)?;
    if let Some(eta) = update.eta {
        assignment.eta_estimate = eta;
    }
    if let Some(notes) = update.risk_notes {
        assignment.risk_notes = notes;
    }
    if let Some(status) = update.status {
        assignment.status = status;
    }

    storage.in_transaction(|store| {
        store.update_assignment(&assignment)?;
        store.update_asset_status(
            &assignment.asset_id,
            assignment.status.asset_status(),
            now,
            by,
        )
    })?;

    tracing::info!(assignment = %assignment.id, status = %assignment.status, "assignment updated");
    Ok(assignment)
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::civil::date;
    use tempfile::TempDir;

    use crate::seed::{DEMO_REFERENCE_DATE, SEEDED_AT};

    fn seeded() -> (TempDir, Storage) {
        let dir = TempDir::new().unwrap();
        let storage = Storage::open(dir.path().join("fleetdesk.sqlite")).unwrap();
        storage.reset().unwrap();
        (dir, storage)
    }

    fn request(project: &str, asset: Option<&str>) -> NewAssignment {
        NewAssignment {
            project_id: project.into(),
            asset_id: asset.map(String::from),
            eta: None,
            checklist: vec!["Crew manifest".into(), "Fuel barge".into()],
            risk_notes: String::new(),
            status: AssignmentStatus::Planned,
            created_by: Some("dispatcher".into()),
        }
    }

    #[test]
    fn create_mobilizes_the_asset() {
        let (_dir, storage) = seeded();
        let now = Timestamp::new(1_772_200_000, 0).unwrap();

        let assignment =
            create_assignment(&storage, request("p1", Some("a3")), DEMO_REFERENCE_DATE, now)
                .unwrap();

        assert_eq!(storage.get_assignment(assignment.id).unwrap(), assignment);
        assert_eq!(assignment.mobilization_checklist.len(), 2);
        assert!(assignment.mobilization_checklist.iter().all(|c| !c.done));

        let asset = storage.get_asset("a3").unwrap();
        assert_eq!(asset.status, AssetStatus::Mobilizing);
        assert_eq!(asset.last_update_at, now);
        assert_eq!(asset.last_update_by.as_deref(), Some("dispatcher"));
    }

    #[test]
    fn eta_defaults_to_transit_estimate() {
        let (_dir, storage) = seeded();

        // a1 is 121 km from Patimban at 95 km/day: two days out.
        let assignment = create_assignment(
            &storage,
            request("p1", Some("a1")),
            DEMO_REFERENCE_DATE,
            SEEDED_AT,
        )
        .unwrap();
        assert_eq!(assignment.eta_estimate, date(2026, 2, 28));
    }

    #[test]
    fn explicit_eta_wins() {
        let (_dir, storage) = seeded();
        let mut new = request("p1", Some("a1"));
        new.eta = Some(date(2026, 3, 15));

        let assignment =
            create_assignment(&storage, new, DEMO_REFERENCE_DATE, SEEDED_AT).unwrap();
        assert_eq!(assignment.eta_estimate, date(2026, 3, 15));
    }

    #[test]
    fn missing_asset_picks_the_top_recommendation() {
        let (_dir, storage) = seeded();
        let assets = storage.list_assets().unwrap();
        let project = storage.get_project("p3").unwrap();
        let speeds = storage.speed_table().unwrap();
        let ranked = recommend::recommend_assets(&project, &assets, &speeds, DEMO_REFERENCE_DATE);
        let best = ranked[0].asset.id.clone();

        let assignment =
            create_assignment(&storage, request("p3", None), DEMO_REFERENCE_DATE, SEEDED_AT)
                .unwrap();
        assert_eq!(assignment.asset_id, best);
    }

    #[test]
    fn completed_assignment_leaves_asset_idle() {
        let (_dir, storage) = seeded();
        let mut new = request("p1", Some("a1"));
        new.status = AssignmentStatus::Completed;

        create_assignment(&storage, new, DEMO_REFERENCE_DATE, SEEDED_AT).unwrap();
        assert_eq!(storage.get_asset("a1").unwrap().status, AssetStatus::Idle);
    }

    #[test]
    fn unknown_project_or_asset_is_rejected() {
        let (_dir, storage) = seeded();

        let err = create_assignment(
            &storage,
            request("p99", Some("a1")),
            DEMO_REFERENCE_DATE,
            SEEDED_AT,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DispatchError::Storage(StorageError::ProjectNotFound(_))
        ));

        let err = create_assignment(
            &storage,
            request("p1", Some("a99")),
            DEMO_REFERENCE_DATE,
            SEEDED_AT,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DispatchError::Storage(StorageError::AssetNotFound(_))
        ));
        assert_eq!(storage.list_assignments().unwrap().len(), 2);
    }

    #[test]
    fn empty_fleet_has_no_candidates() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::open(dir.path().join("fleetdesk.sqlite")).unwrap();
        storage
            .upsert_project(&crate::seed::projects().remove(0))
            .unwrap();

        let err = create_assignment(&storage, request("p1", None), DEMO_REFERENCE_DATE, SEEDED_AT)
            .unwrap_err();
        assert!(matches!(err, DispatchError::NoCandidates(id) if id == "p1"));
    }

    #[test]
    fn status_update_carries_over_to_asset() {
        let (_dir, storage) = seeded();
        let seeded = crate::seed::assignments();
        let planned = &seeded[1];

        let update = AssignmentUpdate {
            status: Some(AssignmentStatus::Active),
            ..AssignmentUpdate::default()
        };
        let updated = update_assignment(&storage, planned.id, update, SEEDED_AT, None).unwrap();
        assert_eq!(updated.status, AssignmentStatus::Active);
        assert_eq!(
            storage.get_asset(&planned.asset_id).unwrap().status,
            AssetStatus::Working
        );

        let update = AssignmentUpdate {
            status: Some(AssignmentStatus::Completed),
            ..AssignmentUpdate::default()
        };
        update_assignment(&storage, planned.id, update, SEEDED_AT, None).unwrap();
        assert_eq!(
            storage.get_asset(&planned.asset_id).unwrap().status,
            AssetStatus::Idle
        );
    }

    #[test]
    fn eta_only_update_still_syncs_the_asset() {
        let (_dir, storage) = seeded();
        let active = &crate::seed::assignments()[0];
        storage
            .update_asset_status(&active.asset_id, AssetStatus::Maintenance, SEEDED_AT, None)
            .unwrap();

        let later = Timestamp::new(1_772_300_000, 0).unwrap();
        let update = AssignmentUpdate {
            eta: Some(date(2026, 3, 12)),
            ..AssignmentUpdate::default()
        };
        update_assignment(&storage, active.id, update, later, Some("ops")).unwrap();

        let asset = storage.get_asset(&active.asset_id).unwrap();
        assert_eq!(asset.status, AssetStatus::Working);
        assert_eq!(asset.last_update_at, later);
        assert_eq!(asset.last_update_by.as_deref(), Some("ops"));
    }

    #[test]
    fn non_status_update_keeps_assignment_status() {
        let (_dir, storage) = seeded();
        let active = &crate::seed::assignments()[0];

        let update = AssignmentUpdate {
            eta: Some(date(2026, 3, 9)),
            risk_notes: Some("Permit granted".into()),
            ..AssignmentUpdate::default()
        };
        let updated = update_assignment(&storage, active.id, update, SEEDED_AT, None).unwrap();

        assert_eq!(updated.eta_estimate, date(2026, 3, 9));
        assert_eq!(updated.risk_notes, "Permit granted");
        assert_eq!(updated.status, AssignmentStatus::Active);
        assert_eq!(storage.get_asset("a1").unwrap().status, AssetStatus::Working);
    }

    #[test]
    fn update_unknown_assignment_fails() {
        let (_dir, storage) = seeded();
        let err = update_assignment(
            &storage,
            Uuid::new_v4(),
            AssignmentUpdate::default(),
            SEEDED_AT,
            None,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DispatchError::Storage(StorageError::AssignmentNotFound(_))
        ));
    }

    #[test]
    fn create_status_rule() {
        assert_eq!(
            status_on_create(AssignmentStatus::Planned),
            AssetStatus::Mobilizing
        );
        assert_eq!(
            status_on_create(AssignmentStatus::Active),
            AssetStatus::Mobilizing
        );
        assert_eq!(
            status_on_create(AssignmentStatus::Completed),
            AssetStatus::Idle
        );
    }
}
