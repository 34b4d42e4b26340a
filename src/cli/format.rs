//! Output formatting for CLI display.

use uuid::Uuid;

use crate::model::{Asset, Assignment, ChecklistItem, DailyLog, Project};
use crate::recommend::Recommendation;

/// The first eight characters of an id, enough to reference it.
pub(super) fn short_id(id: Uuid) -> String {
    id.to_string()[..8].to_string()
}

pub(super) fn format_asset_row(asset: &Asset) -> String {
    format!(
        "{:<4} {:<22} {:<18} {:<15} {:<11} available {}",
        asset.id,
        asset.name,
        asset.kind,
        asset.service_line,
        asset.status,
        asset.availability_date
    )
}

pub(super) fn format_project_row(project: &Project) -> String {
    format!(
        "{:<4} P{} {:<26} {:<15} {:<10} {} to {}",
        project.id,
        project.priority,
        project.name,
        project.service_line,
        project.phase,
        project.planned_start,
        project.planned_end
    )
}

pub(super) fn format_recommendation(rank: usize, rec: &Recommendation<'_>) -> String {
    format!(
        "{rank:>2}. {:<4} {:<22} score {:>3}  {:>5} km  ETA {} day(s)\n    {}",
        rec.asset.id, rec.asset.name, rec.score, rec.distance_km, rec.eta_days, rec.explanation
    )
}

pub(super) fn format_assignment_row(assignment: &Assignment) -> String {
    format!(
        "{}  [{}]  {} -> {}  ETA {}  checklist {}",
        short_id(assignment.id),
        assignment.status,
        assignment.asset_id,
        assignment.project_id,
        assignment.eta_estimate,
        format_checklist_progress(&assignment.mobilization_checklist)
    )
}

/// Done items over total, e.g. `1/3`.
pub(super) fn format_checklist_progress(items: &[ChecklistItem]) -> String {
    let done = items.iter().filter(|i| i.done).count();
    format!("{done}/{}", items.len())
}

pub(super) fn format_log_row(log: &DailyLog) -> String {
    let tags = if log.downtime_tags.is_empty() {
        "-".to_string()
    } else {
        log.downtime_tags.join(", ")
    };
    format!(
        "{}  {:<4} {:<4} {:>5}h  {} {}  [{tags}]  {}",
        log.date,
        log.project_id,
        log.asset_id,
        log.hours_worked,
        log.progress_value,
        log.progress_unit,
        log.notes
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_id_is_eight_chars() {
        let id: Uuid = "9b2f4d7e-3c1a-4f55-8a0e-0d6c1f2b3a4e".parse().unwrap();
        assert_eq!(short_id(id), "9b2f4d7e");
    }

    #[test]
    fn checklist_progress_counts_done_items() {
        let items = vec![
            ChecklistItem::open("Crane booking"),
            ChecklistItem {
                item: "Site induction".into(),
                done: true,
            },
        ];
        assert_eq!(format_checklist_progress(&items), "1/2");
        assert_eq!(format_checklist_progress(&[]), "0/0");
    }
}
