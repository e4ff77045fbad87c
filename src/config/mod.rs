use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use crate::utils::time::parse_timezone;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Zone used for "now" and default export names when none is configured.
/// Fixed at UTC+02:00, no daylight saving.
pub const DEFAULT_TIMEZONE: &str = "Africa/Harare";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the SQLite calendar store.
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_days")]
    pub default_days: u32,
    /// Directory for exports without an explicit file name ("" = cwd).
    #[serde(default)]
    pub export_dir: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}
fn default_days() -> u32 {
    7
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            timezone: default_timezone(),
            default_days: default_days(),
            export_dir: String::new(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("calreport")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".calreport")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("calreport.conf")
    }

    /// Return the default path of the calendar store
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("calendar.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// Fields missing from the file take their defaults.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {e}", path.display()))
        })?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    /// Problems that would make a report fail; empty when the config is usable.
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if let Err(e) = parse_timezone(&self.timezone) {
            problems.push(e.to_string());
        }

        let db = self.database_path();
        if !db.exists() {
            problems.push(format!("calendar store not found: {}", db.display()));
        }

        if !self.export_dir.trim().is_empty() && !expand_tilde(&self.export_dir).is_dir() {
            problems.push(format!("export_dir is not a directory: {}", self.export_dir));
        }

        problems
    }

    /// Initialize the configuration directory and file.
    ///
    /// `custom_db` replaces the default store location (relative names are
    /// placed in the config directory). In test mode the config file is not
    /// written. Returns the resulting configuration.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => {
                let p = expand_tilde(name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::write(Self::config_file(), config.to_yaml()?)?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        Ok(config)
    }
}
