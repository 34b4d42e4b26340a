//! Dispatch commands: new, list, update.

use clap::{Subcommand, ValueEnum};
use jiff::{Timestamp, civil::Date};
use uuid::Uuid;

use crate::config::Config;
use crate::dispatch::{self, AssignmentUpdate, NewAssignment};
use crate::model::{Assignment, AssignmentStatus};
use crate::storage::Storage;

use super::format::{format_assignment_row, short_id};

#[derive(Debug, Subcommand)]
pub enum DispatchCommand {
    /// Assign an asset to a project. Prints the assignment ID.
    ///
    /// Without `--asset`, the top-ranked recommendation is sent.
    /// Without `--eta`, the arrival is estimated from transit time.
    New {
        /// Project ID.
        #[arg(long)]
        project: String,

        /// Asset ID.
        #[arg(long)]
        asset: Option<String>,

        /// Expected arrival (YYYY-MM-DD).
        #[arg(long)]
        eta: Option<Date>,

        /// Mobilization checklist item. Can be specified multiple times.
        #[arg(long = "check")]
        checklist: Vec<String>,

        #[arg(long, default_value = "")]
        risk_notes: String,

        #[arg(long, value_enum, default_value = "planned")]
        status: AssignmentStatusArg,

        /// Who is dispatching. Defaults to the configured operator.
        #[arg(long = "as")]
        operator: Option<String>,

        /// Date transit estimates count from (YYYY-MM-DD).
        #[arg(long)]
        as_of: Option<Date>,
    },

    /// List assignments, newest first.
    List,

    /// Change an assignment's status, ETA, or risk notes.
    ///
    /// A status change moves the asset too: planned mobilizes it,
    /// active puts it to work, completed frees it.
    Update {
        /// Assignment ID: full UUID or unambiguous prefix (e.g. `a3b`).
        id: String,

        #[arg(long, value_enum)]
        status: Option<AssignmentStatusArg>,

        /// New expected arrival (YYYY-MM-DD).
        #[arg(long)]
        eta: Option<Date>,

        #[arg(long)]
        risk_notes: Option<String>,

        /// Who is making the change. Defaults to the configured operator.
        #[arg(long = "as")]
        operator: Option<String>,
    },
}

/// CLI-facing assignment status, mapped to the domain `AssignmentStatus`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AssignmentStatusArg {
    Planned,
    Active,
    Completed,
}

impl AssignmentStatusArg {
    pub(super) fn to_domain(self) -> AssignmentStatus {
        match self {
            Self::Planned => AssignmentStatus::Planned,
            Self::Active => AssignmentStatus::Active,
            Self::Completed => AssignmentStatus::Completed,
        }
    }
}

pub(super) fn cmd_new(
    config: &Config,
    storage: &Storage,
    mut new: NewAssignment,
    as_of: Option<Date>,
) -> Result<(), String> {
    if new.created_by.is_none() {
        new.created_by.clone_from(&config.operator);
    }

    let assignment = dispatch::create_assignment(
        storage,
        new,
        config.reference_date(as_of),
        Timestamp::now(),
    )
    .map_err(|e| format!("failed to create assignment: {e}"))?;

    println!("{}", assignment.id);
    eprintln!(
        "Dispatched {} to {}, ETA {}",
        assignment.asset_id, assignment.project_id, assignment.eta_estimate
    );
    Ok(())
}

pub(super) fn cmd_list(storage: &Storage) -> Result<(), String> {
    let assignments = storage
        .list_assignments()
        .map_err(|e| format!("failed to list assignments: {e}"))?;

    if assignments.is_empty() {
        println!("No assignments");
        return Ok(());
    }

    for assignment in &assignments {
        println!("{}", format_assignment_row(assignment));
        if !assignment.risk_notes.is_empty() {
            println!("          risk: {}", assignment.risk_notes);
        }
    }
    Ok(())
}

pub(super) fn cmd_update(
    config: &Config,
    storage: &Storage,
    assignment_ref: &str,
    update: AssignmentUpdate,
    operator: Option<&str>,
) -> Result<(), String> {
    if update.is_empty() {
        return Err("nothing to update: pass --status, --eta, or --risk-notes".to_string());
    }

    let assignment = resolve_assignment(storage, assignment_ref)?;
    let by = operator.or(config.operator.as_deref());
    let updated = dispatch::update_assignment(storage, assignment.id, update, Timestamp::now(), by)
        .map_err(|e| format!("failed to update assignment: {e}"))?;

    eprintln!(
        "Assignment {} is {}, ETA {}",
        short_id(updated.id),
        updated.status,
        updated.eta_estimate
    );
    Ok(())
}

/// Resolve an assignment reference (full UUID or unambiguous prefix).
fn resolve_assignment(storage: &Storage, reference: &str) -> Result<Assignment, String> {
    if let Ok(id) = reference.parse::<Uuid>() {
        return storage
            .get_assignment(id)
            .map_err(|e| format!("failed to load assignment: {e}"));
    }

    let assignments = storage
        .list_assignments()
        .map_err(|e| format!("failed to list assignments: {e}"))?;

    let matches: Vec<&Assignment> = assignments
        .iter()
        .filter(|a| a.id.to_string().starts_with(reference))
        .collect();

    match matches.as_slice() {
        [] => Err(format!("no assignment matching '{reference}'")),
        [only] => Ok((*only).clone()),
        many => {
            let ids: Vec<String> = many.iter().map(|a| short_id(a.id)).collect();
            Err(format!(
                "'{reference}' is ambiguous: matches {} assignments: {}",
                many.len(),
                ids.join(", ")
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    use crate::seed;

    fn seeded() -> (TempDir, Storage) {
        let dir = TempDir::new().unwrap();
        let storage = Storage::open(dir.path().join("fleetdesk.sqlite")).unwrap();
        storage.reset().unwrap();
        (dir, storage)
    }

    #[test]
    fn resolves_full_id_and_prefix() {
        let (_dir, storage) = seeded();
        let first = &seed::assignments()[0];

        let by_full = resolve_assignment(&storage, &first.id.to_string()).unwrap();
        assert_eq!(by_full.id, first.id);

        let mut extra = first.clone();
        extra.id = Uuid::from_u128(0xfeed_0000_0000_4000_8000_0000_0000_0001);
        storage.create_assignment(&extra).unwrap();
        let by_prefix = resolve_assignment(&storage, "feed").unwrap();
        assert_eq!(by_prefix.id, extra.id);
    }

    #[test]
    fn ambiguous_prefix_is_rejected() {
        let (_dir, storage) = seeded();
        // Seeded ids differ only in their last digit.
        let err = resolve_assignment(&storage, "0000").unwrap_err();
        assert!(err.contains("ambiguous"), "{err}");
        assert!(err.contains("2 assignments"), "{err}");
    }

    #[test]
    fn unmatched_prefix_is_rejected() {
        let (_dir, storage) = seeded();
        let err = resolve_assignment(&storage, "ffff").unwrap_err();
        assert!(err.contains("no assignment matching"), "{err}");
    }

    #[test]
    fn status_args_map_to_domain() {
        assert_eq!(
            AssignmentStatusArg::Completed.to_domain(),
            AssignmentStatus::Completed
        );
        assert_eq!(
            AssignmentStatusArg::Planned.to_domain(),
            AssignmentStatus::Planned
        );
    }
}
