//! Project report command.

use jiff::civil::Date;

use crate::config::Config;
use crate::recommend::recommend_top;
use crate::report::{REPORT_RECOMMENDATIONS, render_project_report};
use crate::storage::Storage;

pub(super) fn cmd_report(
    config: &Config,
    storage: &Storage,
    project_id: &str,
    as_of: Option<Date>,
) -> Result<(), String> {
    let project = storage
        .get_project(project_id)
        .map_err(|e| format!("failed to load project: {e}"))?;
    let logs = storage
        .list_daily_logs(Some(project.id.as_str()))
        .map_err(|e| format!("failed to list daily logs: {e}"))?;
    let assets = storage
        .list_assets()
        .map_err(|e| format!("failed to list assets: {e}"))?;
    let speeds = storage
        .speed_table()
        .map_err(|e| format!("failed to load speed profiles: {e}"))?;

    let reference = config.reference_date(as_of);
    let ranked = recommend_top(&project, &assets, &speeds, reference, REPORT_RECOMMENDATIONS);

    print!("{}", render_project_report(&project, &logs, &ranked, reference));
    Ok(())
}
