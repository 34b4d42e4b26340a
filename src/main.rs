use std::process;

use clap::Parser;

use fleetdesk::cli::{self, Cli};
use fleetdesk::config::Config;
use fleetdesk::logging;
use fleetdesk::storage::Storage;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let path = config.database.clone().or_else(Storage::default_path);
    let Some(path) = path else {
        eprintln!("Could not determine home directory.");
        process::exit(1);
    };

    let storage = match Storage::open(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to open store: {e}");
            process::exit(1);
        }
    };

    if config.seed_on_empty {
        match storage.seed_if_empty() {
            Ok(true) => eprintln!("Loaded demo data into an empty store"),
            Ok(false) => {}
            Err(e) => {
                eprintln!("Failed to seed store: {e}");
                process::exit(1);
            }
        }
    }

    if let Err(e) = cli::run(cli, &config, &storage) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
