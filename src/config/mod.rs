use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use crate::utils::time::parse_work_duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the per-day timecard files.
    pub data_dir: String,
    /// Daily work target, e.g. "8h" or "7h30m".
    #[serde(default = "default_work_duration")]
    pub work_duration: String,
    /// Timecards older than this many days are swept on startup.
    #[serde(default = "default_retention_days")]
    pub retention_days: i64,
}

fn default_work_duration() -> String {
    "8h".to_string()
}

fn default_retention_days() -> i64 {
    7
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::config_dir().to_string_lossy().to_string(),
            work_duration: default_work_duration(),
            retention_days: default_retention_days(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimecard")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rtimecard")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimecard.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
        } else {
            Ok(Self::default())
        }
    }

    /// Write the configuration back to its standard location.
    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir()).map_err(|_| AppError::ConfigSave)?;
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)
    }

    /// The timecard directory with `~` expanded.
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    /// The daily work target in seconds.
    pub fn work_target_secs(&self) -> AppResult<i64> {
        parse_work_duration(&self.work_duration)
            .and_then(|minutes| minutes.checked_mul(60))
            .ok_or_else(|| {
                AppError::Config(format!(
                    "invalid work_duration '{}' (use e.g. \"8h\" or \"7h30m\")",
                    self.work_duration
                ))
            })
    }
}
