//! Fleetdesk configuration.
//!
//! Loaded from `~/.fleetdesk/config.toml`. Every key is optional; a missing
//! file means defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use jiff::{Zoned, civil::Date};
use serde::{Deserialize, Serialize};

/// Errors that can occur while loading the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Fleetdesk configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// Pins "today" for scoring. When unset, the local date is used.
    pub reference_date: Option<Date>,

    /// How many recommendations `recommend` shows without `--top`.
    pub default_top: usize,

    /// Load the demo data set into an empty store on startup.
    pub seed_on_empty: bool,

    /// Name stamped on records when `--as` is not given.
    pub operator: Option<String>,

    /// Store location. Defaults to `~/.fleetdesk/fleetdesk.sqlite`.
    pub database: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reference_date: None,
            default_top: 5,
            seed_on_empty: true,
            operator: None,
            database: None,
        }
    }
}

impl Config {
    /// Load config from `~/.fleetdesk/config.toml`.
    ///
    /// Falls back to defaults if the home directory or the file is missing.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The config file path: `~/.fleetdesk/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".fleetdesk").join("config.toml"))
    }

    /// The date scoring treats as today: `as_of` if given, then the
    /// configured reference date, then the local date.
    pub fn reference_date(&self, as_of: Option<Date>) -> Date {
        as_of
            .or(self.reference_date)
            .unwrap_or_else(|| Zoned::now().date())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::civil::date;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.default_top, 5);
        assert!(config.seed_on_empty);
    }

    #[test]
    fn reads_kebab_case_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "reference-date = \"2026-02-26\"\n\
             default-top = 3\n\
             seed-on-empty = false\n\
             operator = \"ops-desk\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.reference_date, Some(date(2026, 2, 26)));
        assert_eq!(config.default_top, 3);
        assert!(!config.seed_on_empty);
        assert_eq!(config.operator.as_deref(), Some("ops-desk"));
        assert_eq!(config.database, None);
    }

    #[test]
    fn invalid_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default-top = \"many\"").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn unreadable_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        // A directory can't be read as a file.
        let err = Config::load_from(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn as_of_overrides_configured_date() {
        let config = Config {
            reference_date: Some(date(2026, 2, 26)),
            ..Config::default()
        };
        assert_eq!(config.reference_date(None), date(2026, 2, 26));
        assert_eq!(
            config.reference_date(Some(date(2026, 3, 1))),
            date(2026, 3, 1)
        );
    }
}
