//! Fleet commands: list, show.

use clap::Subcommand;

use crate::storage::Storage;

use super::format::format_asset_row;

#[derive(Debug, Subcommand)]
pub enum AssetCommand {
    /// List the fleet, sorted by name.
    List,

    /// Show one asset in full.
    Show {
        /// Asset ID (e.g. `a3`).
        id: String,

        /// Print the asset as JSON.
        #[arg(long)]
        json: bool,
    },
}

pub(super) fn cmd_list(storage: &Storage) -> Result<(), String> {
    let assets = storage
        .list_assets()
        .map_err(|e| format!("failed to list assets: {e}"))?;

    if assets.is_empty() {
        println!("No assets");
        return Ok(());
    }

    for asset in &assets {
        println!("{}", format_asset_row(asset));
    }
    Ok(())
}

pub(super) fn cmd_show(storage: &Storage, id: &str, json: bool) -> Result<(), String> {
    let asset = storage
        .get_asset(id)
        .map_err(|e| format!("failed to load asset: {e}"))?;

    if json {
        let json = serde_json::to_string_pretty(&asset)
            .map_err(|e| format!("failed to serialize asset: {e}"))?;
        println!("{json}");
        return Ok(());
    }

    println!("{} ({})", asset.name, asset.id);
    println!("Type:         {}", asset.kind);
    println!("Service line: {}", asset.service_line);
    println!("Status:       {}", asset.status);
    println!("Available:    {}", asset.availability_date);
    println!(
        "Position:     {}, {}",
        asset.position.lat, asset.position.lng
    );
    if let Some(home) = &asset.home_base {
        println!(
            "Home base:    {} ({}, {})",
            home.label, home.position.lat, home.position.lng
        );
    }

    let profile = &asset.capability_profile;
    println!("Production:   {}", profile.production_range);
    if !profile.constraints.is_empty() {
        println!("Constraints:  {}", profile.constraints.join(", "));
    }
    for (key, value) in &profile.optional_constraints {
        println!("  {key}: {value}");
    }
    if let Some(notes) = &profile.notes {
        println!("Notes:        {notes}");
    }

    match &asset.last_update_by {
        Some(by) => println!("Updated:      {} by {by}", asset.last_update_at),
        None => println!("Updated:      {}", asset.last_update_at),
    }
    Ok(())
}
