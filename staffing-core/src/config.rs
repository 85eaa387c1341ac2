use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Result, StaffingError};
use crate::models::{RequirementStatus, TIMESTAMP_FORMAT};

/// User preferences for the staffing tool.
///
/// Every field has a default, so a partial file only overrides what it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Status a fresh draft starts with
    pub default_status: RequirementStatus,
    /// Number of requirements shown on the dashboard
    pub recent_limit: usize,
    /// How long the "copied" indicator stays visible, in milliseconds
    pub copy_feedback_ms: u64,
    /// strftime pattern for `submitted_at`
    pub timestamp_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_status: RequirementStatus::Active,
            recent_limit: 5,
            copy_feedback_ms: 2000,
            timestamp_format: TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl Config {
    /// Loads the config from `path`, falling back to defaults when the file is absent
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            StaffingError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        Self::from_yaml(&content).map_err(|e| match e {
            StaffingError::Config(msg) => StaffingError::Config(format!("{:?}: {}", path, msg)),
            other => other,
        })
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content)
            .map_err(|e| StaffingError::Config(format!("Failed to parse config: {}", e)))
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| StaffingError::Config(format!("Failed to serialize config: {}", e)))
    }

    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }
}

/// Gets the path to the config file
pub fn get_config_path() -> Result<PathBuf> {
    // Check if STAFFING_CONFIG_PATH environment variable is set
    if let Ok(path) = std::env::var("STAFFING_CONFIG_PATH") {
        return Ok(PathBuf::from(path));
    }

    // Default to ~/.staffing.config
    let home_dir = dirs::home_dir()
        .ok_or_else(|| StaffingError::Config("Failed to determine home directory".into()))?;

    Ok(home_dir.join(".staffing.config"))
}
