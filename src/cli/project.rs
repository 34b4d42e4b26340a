//! Project commands: list, show.

use clap::Subcommand;

use crate::storage::Storage;

use super::format::{format_assignment_row, format_project_row};

#[derive(Debug, Subcommand)]
pub enum ProjectCommand {
    /// List projects, most urgent first.
    List,

    /// Show one project with its assignments.
    Show {
        /// Project ID (e.g. `p1`).
        id: String,

        /// Print the project as JSON.
        #[arg(long)]
        json: bool,
    },
}

pub(super) fn cmd_list(storage: &Storage) -> Result<(), String> {
    let projects = storage
        .list_projects()
        .map_err(|e| format!("failed to list projects: {e}"))?;

    if projects.is_empty() {
        println!("No projects");
        return Ok(());
    }

    for project in &projects {
        println!("{}", format_project_row(project));
    }
    Ok(())
}

pub(super) fn cmd_show(storage: &Storage, id: &str, json: bool) -> Result<(), String> {
    let project = storage
        .get_project(id)
        .map_err(|e| format!("failed to load project: {e}"))?;

    if json {
        let json = serde_json::to_string_pretty(&project)
            .map_err(|e| format!("failed to serialize project: {e}"))?;
        println!("{json}");
        return Ok(());
    }

    println!("{} ({})", project.name, project.id);
    println!("Client:       {}", project.client_type);
    println!("Service line: {}", project.service_line);
    println!("Phase:        {}", project.phase);
    println!("Priority:     {}", project.priority);
    println!(
        "Planned:      {} to {}",
        project.planned_start, project.planned_end
    );
    println!(
        "Position:     {}, {}",
        project.position.lat, project.position.lng
    );
    if let Some(risks) = &project.risks {
        println!("Risks:        {risks}");
    }
    if let Some(notes) = &project.notes {
        println!("Notes:        {notes}");
    }

    let assignments: Vec<_> = storage
        .list_assignments()
        .map_err(|e| format!("failed to list assignments: {e}"))?
        .into_iter()
        .filter(|a| a.project_id == project.id)
        .collect();
    if !assignments.is_empty() {
        println!();
        println!("Assignments:");
        for assignment in &assignments {
            println!("  {}", format_assignment_row(assignment));
        }
    }
    Ok(())
}
