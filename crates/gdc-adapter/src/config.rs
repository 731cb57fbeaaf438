/*
[INPUT]:  YAML (or JSON) configuration file
[OUTPUT]: Parsed client identity and logging configuration
[POS]:    Configuration layer - client setup
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::http::{ClientIdentity, DEFAULT_TIMEZONE, GdcError, Result};

/// Top-level configuration for a GDC client
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GdcConfig {
    pub base_url: String,
    pub client_key: String,
    pub private_key_file_path: PathBuf,
    /// IANA timezone for request timestamps
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default)]
    pub log: Option<LogConfig>,
}

/// File logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LogConfig {
    #[serde(default)]
    pub enable: bool,
    #[serde(default)]
    pub level: LogLevel,
    /// Directory the log files are written to
    #[serde(default = "default_log_path")]
    pub path: PathBuf,
    #[serde(default = "default_log_filename")]
    pub filename: String,
    #[serde(default = "default_log_extension")]
    pub extension: String,
    #[serde(default)]
    pub rotation: LogRotation,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Error events only
    #[default]
    Error,
    Debug,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Minutely,
    Hourly,
    #[default]
    Daily,
    Never,
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

fn default_log_path() -> PathBuf {
    PathBuf::from("logs")
}

fn default_log_filename() -> String {
    "gdc".to_string()
}

fn default_log_extension() -> String {
    "log".to_string()
}

impl GdcConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| GdcError::Config(format!("Cannot read {}: {e}", path.display())))?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| GdcError::Config(format!("Invalid config: {e}")))
    }

    pub fn identity(&self) -> ClientIdentity {
        ClientIdentity::new(
            self.base_url.clone(),
            self.client_key.clone(),
            self.private_key_file_path.clone(),
        )
        .with_timezone(self.timezone.clone())
    }
}
