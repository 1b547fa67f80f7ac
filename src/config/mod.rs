use crate::core::Language;
use crate::errors::{AppError, AppResult};
use crate::models::Period;
use crate::auth::mock::DEFAULT_EMAIL_DOMAIN;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// JSON file holding employees and time records.
    #[serde(default = "default_data_file")]
    pub data_file: String,
    /// JSON file holding the active login.
    #[serde(default = "default_session_file")]
    pub session_file: String,
    /// Label set for reports and exports.
    #[serde(default)]
    pub language: Language,
    /// Period used when `--period` is not given.
    #[serde(default)]
    pub default_period: Period,
    #[serde(default = "default_email_domain")]
    pub email_domain: String,
}

fn default_data_file() -> String {
    Config::config_dir()
        .join("timetracker.json")
        .to_string_lossy()
        .to_string()
}
fn default_session_file() -> String {
    Config::config_dir()
        .join("session.json")
        .to_string_lossy()
        .to_string()
}
fn default_email_domain() -> String {
    DEFAULT_EMAIL_DOMAIN.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            session_file: default_session_file(),
            language: Language::default(),
            default_period: Period::default(),
            email_domain: default_email_domain(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("timetracker")
        } else {
            let home = env::var("HOME")
                .map(PathBuf::from)
                .ok()
                .or_else(dirs::home_dir)
                .unwrap_or_else(|| PathBuf::from("."));
            home.join(".timetracker")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timetracker.conf")
    }

    pub fn data_path(&self) -> PathBuf {
        crate::utils::path::expand_tilde(&self.data_file)
    }

    pub fn session_path(&self) -> PathBuf {
        crate::utils::path::expand_tilde(&self.session_file)
    }

    /// Load configuration from file, or return defaults if not found.
    /// Missing keys fall back to their defaults.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Write this configuration to the standard config file.
    pub fn save(&self) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_file();
        fs::write(&path, serde_yaml::to_string(self)?)?;
        Ok(path)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
