use crate::core::logic::HISTORY_LIMIT;
use crate::db::ACTIVITY_DB;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding `students.json`, `history.json` and the activity log.
    pub data_dir: String,
    /// Address the HTTP server listens on.
    pub bind: String,
    /// How many recent calls the history view returns.
    pub history_limit: usize,
    /// Keep the internal activity log (SQLite).
    pub activity_log: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::default_data_dir().to_string_lossy().to_string(),
            bind: "127.0.0.1:5000".to_string(),
            history_limit: HISTORY_LIMIT,
            activity_log: true,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rollcall")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rollcall")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rollcall.conf")
    }

    pub fn default_data_dir() -> PathBuf {
        Self::config_dir().join("data")
    }

    /// Load configuration from the standard location, or defaults if absent.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from `path`. Missing fields take their defaults.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("invalid {}: {e}", path.display())))
    }

    /// Write the configuration as YAML, creating the parent directory.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("cannot encode configuration: {e}")))?;
        fs::write(path, yaml)?;
        Ok(())
    }

    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    pub fn activity_db(&self) -> PathBuf {
        self.data_path().join(ACTIVITY_DB)
    }
}
