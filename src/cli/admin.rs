//! Admin commands: reset the demo data, manage speed profiles, add
//! assets and projects, tune the ROI assumptions.

use clap::{Args, Subcommand};
use jiff::Timestamp;

use crate::model::{Asset, Project, RoiAssumptions, SpeedProfile};
use crate::recommend::FALLBACK_SPEED_KM_PER_DAY;
use crate::seed;
use crate::storage::Storage;

/// Shortest accepted name for a new asset or project, after trimming.
const MIN_NAME_CHARS: usize = 3;

#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Wipe the store and reload the demo data set.
    ///
    /// Discards every change, including assignments and logs.
    Reset,

    /// Manage transit speeds per equipment type.
    Speed {
        #[command(subcommand)]
        command: SpeedCommand,
    },

    /// Add assets to the fleet.
    Asset {
        #[command(subcommand)]
        command: AdminAssetCommand,
    },

    /// Add projects to the book.
    Project {
        #[command(subcommand)]
        command: AdminProjectCommand,
    },

    /// Show or tune the ROI assumptions.
    Roi {
        #[command(subcommand)]
        command: RoiCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum AdminAssetCommand {
    /// Add an asset, or replace one with the same ID.
    ///
    /// Fields other than ID and name start from the first demo asset;
    /// edit them afterwards as the fleet changes.
    Add {
        id: String,

        /// Display name, at least 3 characters.
        name: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum AdminProjectCommand {
    /// Add a project, or replace one with the same ID.
    ///
    /// Fields other than ID and name start from the first demo project.
    Add {
        id: String,

        /// Display name, at least 3 characters.
        name: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum RoiCommand {
    /// Print the assumptions and the annual recovery they imply.
    Show {
        #[arg(long)]
        json: bool,
    },

    /// Change one or more assumptions. Every value must be positive.
    Set(RoiChanges),
}

#[derive(Debug, Default, Args)]
pub struct RoiChanges {
    #[arg(long)]
    pub asset_sets: Option<f64>,

    /// Day rate per set, in IDR.
    #[arg(long)]
    pub idr_per_day: Option<f64>,

    #[arg(long)]
    pub idle_days_baseline: Option<f64>,

    /// In IDR.
    #[arg(long)]
    pub mobilization_cost_per_job: Option<f64>,

    #[arg(long)]
    pub jobs_per_year: Option<f64>,

    /// As a fraction, e.g. 0.22.
    #[arg(long)]
    pub gross_margin_per_project: Option<f64>,
}

impl RoiChanges {
    fn is_empty(&self) -> bool {
        [
            self.asset_sets,
            self.idr_per_day,
            self.idle_days_baseline,
            self.mobilization_cost_per_job,
            self.jobs_per_year,
            self.gross_margin_per_project,
        ]
        .iter()
        .all(Option::is_none)
    }

    fn apply(self, roi: &mut RoiAssumptions) {
        let pairs = [
            (self.asset_sets, &mut roi.asset_sets),
            (self.idr_per_day, &mut roi.idr_per_day),
            (self.idle_days_baseline, &mut roi.idle_days_baseline),
            (
                self.mobilization_cost_per_job,
                &mut roi.mobilization_cost_per_job,
            ),
            (self.jobs_per_year, &mut roi.jobs_per_year),
            (
                self.gross_margin_per_project,
                &mut roi.gross_margin_per_project,
            ),
        ];
        for (change, field) in pairs {
            if let Some(value) = change {
                *field = value;
            }
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum SpeedCommand {
    /// List speed profiles, sorted by type.
    List,

    /// Set the transit speed for an equipment type, adding it if new.
    Set {
        /// Equipment type, matched exactly (e.g. "Pump Set").
        kind: String,

        /// Transit speed in km per day.
        speed_km_per_day: f64,
    },
}

pub(super) fn cmd_reset(storage: &Storage) -> Result<(), String> {
    storage
        .reset()
        .map_err(|e| format!("failed to reset store: {e}"))?;
    eprintln!("Store reset to demo data");
    Ok(())
}

pub(super) fn cmd_speed_list(storage: &Storage) -> Result<(), String> {
    let profiles = storage
        .list_speed_profiles()
        .map_err(|e| format!("failed to list speed profiles: {e}"))?;

    for profile in &profiles {
        println!("{:<20} {:>6} km/day", profile.kind, profile.speed_km_per_day);
    }
    println!("{:<20} {FALLBACK_SPEED_KM_PER_DAY:>6} km/day", "(other types)");
    Ok(())
}

pub(super) fn cmd_speed_set(storage: &Storage, kind: &str, speed: f64) -> Result<(), String> {
    if kind.trim().is_empty() {
        return Err("equipment type must not be empty".to_string());
    }
    if !speed.is_finite() || speed <= 0.0 {
        return Err(format!("speed must be greater than 0, got {speed}"));
    }

    storage
        .upsert_speed_profile(&SpeedProfile::new(kind, speed))
        .map_err(|e| format!("failed to save speed profile: {e}"))?;
    eprintln!("{kind}: {speed} km/day");
    Ok(())
}

/// Trimmed `id` and `name`, or why they are unusable.
fn validate_identity(id: &str, name: &str) -> Result<(String, String), String> {
    let id = id.trim();
    if id.is_empty() {
        return Err("ID must not be empty".to_string());
    }
    let name = name.trim();
    if name.chars().count() < MIN_NAME_CHARS {
        return Err(format!(
            "name must be at least {MIN_NAME_CHARS} characters, got {name:?}"
        ));
    }
    Ok((id.to_string(), name.to_string()))
}

/// A new asset named `name`, other fields copied from the first demo asset.
fn new_asset(id: &str, name: &str, now: Timestamp) -> Result<Asset, String> {
    let (id, name) = validate_identity(id, name)?;
    let mut asset = seed::assets()
        .into_iter()
        .next()
        .ok_or("no template asset in the demo data")?;
    asset.id = id;
    asset.name = name;
    asset.last_update_at = now;
    Ok(asset)
}

/// A new project named `name`, other fields copied from the first demo project.
fn new_project(id: &str, name: &str, now: Timestamp) -> Result<Project, String> {
    let (id, name) = validate_identity(id, name)?;
    let mut project = seed::projects()
        .into_iter()
        .next()
        .ok_or("no template project in the demo data")?;
    project.id = id;
    project.name = name;
    project.last_update_at = now;
    Ok(project)
}

pub(super) fn cmd_asset_add(storage: &Storage, id: &str, name: &str) -> Result<(), String> {
    let asset = new_asset(id, name, Timestamp::now())?;
    storage
        .upsert_asset(&asset)
        .map_err(|e| format!("failed to save asset: {e}"))?;
    tracing::info!(asset = %asset.id, "asset added");
    println!("{}", asset.id);
    eprintln!("Added asset {}", asset.name);
    Ok(())
}

pub(super) fn cmd_project_add(storage: &Storage, id: &str, name: &str) -> Result<(), String> {
    let project = new_project(id, name, Timestamp::now())?;
    storage
        .upsert_project(&project)
        .map_err(|e| format!("failed to save project: {e}"))?;
    tracing::info!(project = %project.id, "project added");
    println!("{}", project.id);
    eprintln!("Added project {}", project.name);
    Ok(())
}

pub(super) fn cmd_roi_show(storage: &Storage, json: bool) -> Result<(), String> {
    let roi = storage
        .roi_assumptions()
        .map_err(|e| format!("failed to load ROI assumptions: {e}"))?;

    if json {
        let out = serde_json::to_string_pretty(&roi)
            .map_err(|e| format!("failed to serialize ROI assumptions: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    for (name, value) in roi.fields() {
        println!("{name:<26} {value}");
    }
    println!("{:<26} {:.0} IDR", "annual-recovery", roi.annual_recovery());
    Ok(())
}

pub(super) fn cmd_roi_set(storage: &Storage, changes: RoiChanges) -> Result<(), String> {
    if changes.is_empty() {
        return Err("nothing to change: pass at least one assumption".to_string());
    }

    let mut roi = storage
        .roi_assumptions()
        .map_err(|e| format!("failed to load ROI assumptions: {e}"))?;
    changes.apply(&mut roi);
    if let Some((name, value)) = roi.first_invalid() {
        return Err(format!("{name} must be greater than 0, got {value}"));
    }

    storage
        .save_roi_assumptions(&roi)
        .map_err(|e| format!("failed to save ROI assumptions: {e}"))?;
    eprintln!(
        "ROI assumptions saved (annual recovery {:.0} IDR)",
        roi.annual_recovery()
    );
    Ok(())
}
