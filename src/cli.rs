//! CLI interface for fleetdesk.
//!
//! Each subcommand is non-interactive: arguments in, text out. Listings and
//! IDs go to stdout; confirmations and errors go to stderr.
//!
//! - `fleetdesk asset|project` browse the fleet and the project book.
//! - `fleetdesk recommend <project>` ranks assets for a project.
//! - `fleetdesk dispatch` commits assets and tracks assignments.
//! - `fleetdesk log` records daily progress.
//! - `fleetdesk report <project>` prints a project report.
//! - `fleetdesk admin` resets demo data, adds assets and projects, and
//!   tunes transit speeds and ROI assumptions.
//!
//! Assignment IDs take a full UUID or unambiguous prefix.

mod admin;
mod asset;
mod dispatch;
mod format;
mod log;
mod project;
mod recommend;
mod report;

use clap::{Parser, Subcommand};
use jiff::civil::Date;

use crate::config::Config;
use crate::dispatch::{AssignmentUpdate, NewAssignment};
use crate::storage::Storage;

use admin::{AdminAssetCommand, AdminCommand, AdminProjectCommand, RoiCommand, SpeedCommand};
use asset::AssetCommand;
use dispatch::{AssignmentStatusArg, DispatchCommand};
use log::LogCommand;
use project::ProjectCommand;

/// Fleetdesk: match equipment to projects.
#[derive(Debug, Parser)]
#[command(name = "fleetdesk", version, after_long_help = WORKFLOW_HELP)]
pub struct Cli {
    /// Log debug diagnostics to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

const WORKFLOW_HELP: &str = r"Workflow: staffing a project
  1. fleetdesk project list
  2. fleetdesk recommend p3 --top 3
  3. fleetdesk dispatch new --project p3 --asset a8 --check 'Power genset'
     -> prints an assignment ID (e.g. 4f1c09d2-...)
  4. fleetdesk dispatch update 4f1 --status active
  5. fleetdesk log add --project p3 --asset a8 --date 2026-03-02 --hours 9 --progress 4.8
  6. fleetdesk report p3

Scoring uses today's date unless `--as-of` or `reference-date` in
~/.fleetdesk/config.toml says otherwise.";

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse the fleet.
    Asset {
        #[command(subcommand)]
        command: AssetCommand,
    },

    /// Browse projects.
    Project {
        #[command(subcommand)]
        command: ProjectCommand,
    },

    /// Rank assets for a project, best first.
    ///
    /// Each asset scores up to 40 for availability, 40 for transit time,
    /// and 20 for capability.
    Recommend {
        /// Project ID.
        project: String,

        /// How many to show. Defaults to `default-top` from the config.
        #[arg(long)]
        top: Option<usize>,

        /// Score as of this date (YYYY-MM-DD).
        #[arg(long)]
        as_of: Option<Date>,

        /// Print the ranking as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Assign assets to projects and track the assignments.
    Dispatch {
        #[command(subcommand)]
        command: DispatchCommand,
    },

    /// Record and review daily progress.
    Log {
        #[command(subcommand)]
        command: LogCommand,
    },

    /// Print a project report: status, recent progress, best assets.
    Report {
        /// Project ID.
        project: String,

        /// Report as of this date (YYYY-MM-DD).
        #[arg(long)]
        as_of: Option<Date>,
    },

    /// Reset demo data, add records, tune speeds and ROI assumptions.
    Admin {
        #[command(subcommand)]
        command: AdminCommand,
    },
}

/// Run a parsed command, returning an error message on failure.
pub fn run(cli: Cli, config: &Config, storage: &Storage) -> Result<(), String> {
    match cli.command {
        Command::Asset { command } => match command {
            AssetCommand::List => asset::cmd_list(storage),
            AssetCommand::Show { id, json } => asset::cmd_show(storage, &id, json),
        },
        Command::Project { command } => match command {
            ProjectCommand::List => project::cmd_list(storage),
            ProjectCommand::Show { id, json } => project::cmd_show(storage, &id, json),
        },
        Command::Recommend {
            project,
            top,
            as_of,
            json,
        } => recommend::cmd_recommend(config, storage, &project, top, as_of, json),
        Command::Dispatch { command } => match command {
            DispatchCommand::New {
                project,
                asset,
                eta,
                checklist,
                risk_notes,
                status,
                operator,
                as_of,
            } => {
                let new = NewAssignment {
                    project_id: project,
                    asset_id: asset,
                    eta,
                    checklist,
                    risk_notes,
                    status: status.to_domain(),
                    created_by: operator,
                };
                dispatch::cmd_new(config, storage, new, as_of)
            }
            DispatchCommand::List => dispatch::cmd_list(storage),
            DispatchCommand::Update {
                id,
                status,
                eta,
                risk_notes,
                operator,
            } => {
                let update = AssignmentUpdate {
                    status: status.map(AssignmentStatusArg::to_domain),
                    eta,
                    risk_notes,
                };
                dispatch::cmd_update(config, storage, &id, update, operator.as_deref())
            }
        },
        Command::Log { command } => match command {
            LogCommand::Add(args) => log::cmd_add(storage, args),
            LogCommand::List { project } => log::cmd_list(storage, project.as_deref()),
        },
        Command::Report { project, as_of } => {
            report::cmd_report(config, storage, &project, as_of)
        }
        Command::Admin { command } => match command {
            AdminCommand::Reset => admin::cmd_reset(storage),
            AdminCommand::Speed { command } => match command {
                SpeedCommand::List => admin::cmd_speed_list(storage),
                SpeedCommand::Set {
                    kind,
                    speed_km_per_day,
                } => admin::cmd_speed_set(storage, &kind, speed_km_per_day),
            },
            AdminCommand::Asset {
                command: AdminAssetCommand::Add { id, name },
            } => admin::cmd_asset_add(storage, &id, &name),
            AdminCommand::Project {
                command: AdminProjectCommand::Add { id, name },
            } => admin::cmd_project_add(storage, &id, &name),
            AdminCommand::Roi { command } => match command {
                RoiCommand::Show { json } => admin::cmd_roi_show(storage, json),
                RoiCommand::Set(changes) => admin::cmd_roi_set(storage, changes),
            },
        },
    }
}
