use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, StaffingError};
use crate::models::Requirement;
use crate::stats::Statistics;
use crate::store::RequirementStore;

/// Output formats for a store snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "JSON"),
            ExportFormat::Yaml => write!(f, "YAML"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = StaffingError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "yaml" | "yml" => Ok(ExportFormat::Yaml),
            other => Err(StaffingError::Export(format!("Unknown export format: {}", other))),
        }
    }
}

/// Snapshot written by an export: requirements in insertion order plus totals
#[derive(Debug, Serialize)]
struct ExportDocument<'a> {
    statistics: Statistics,
    requirements: &'a [Requirement],
}

impl<'a> ExportDocument<'a> {
    fn of(store: &'a RequirementStore) -> Self {
        Self {
            statistics: store.statistics(),
            requirements: store.requirements(),
        }
    }
}

/// Export requirements to pretty-printed JSON
pub fn to_json(store: &RequirementStore) -> Result<String> {
    serde_json::to_string_pretty(&ExportDocument::of(store))
        .map_err(|e| StaffingError::Export(e.to_string()))
}

/// Export requirements to YAML
pub fn to_yaml(store: &RequirementStore) -> Result<String> {
    serde_yaml::to_string(&ExportDocument::of(store)).map_err(|e| StaffingError::Export(e.to_string()))
}

pub fn render(store: &RequirementStore, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => to_json(store),
        ExportFormat::Yaml => to_yaml(store),
    }
}
