//! Ranked asset recommendations for a project.

use jiff::civil::Date;

use crate::config::Config;
use crate::recommend::recommend_top;
use crate::storage::Storage;

use super::format::format_recommendation;

pub(super) fn cmd_recommend(
    config: &Config,
    storage: &Storage,
    project_id: &str,
    top: Option<usize>,
    as_of: Option<Date>,
    json: bool,
) -> Result<(), String> {
    let project = storage
        .get_project(project_id)
        .map_err(|e| format!("failed to load project: {e}"))?;
    let assets = storage
        .list_assets()
        .map_err(|e| format!("failed to list assets: {e}"))?;
    let speeds = storage
        .speed_table()
        .map_err(|e| format!("failed to load speed profiles: {e}"))?;

    let reference = config.reference_date(as_of);
    let top = top.unwrap_or(config.default_top);
    let ranked = recommend_top(&project, &assets, &speeds, reference, top);

    if json {
        let json = serde_json::to_string_pretty(&ranked)
            .map_err(|e| format!("failed to serialize recommendations: {e}"))?;
        println!("{json}");
        return Ok(());
    }

    eprintln!(
        "{} ({}, {}) as of {reference}",
        project.name, project.service_line, project.phase
    );
    if ranked.is_empty() {
        println!("No candidate assets");
        return Ok(());
    }
    for (idx, rec) in ranked.iter().enumerate() {
        println!("{}", format_recommendation(idx + 1, rec));
    }
    Ok(())
}
