//! Error types for the staffing core.

use thiserror::Error;
use uuid::Uuid;

use crate::validation::ValidationError;

/// Errors returned by store, editor and session operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StaffingError {
    /// One or more required fields of the draft are empty
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Requirement not found: {0}")]
    NotFound(Uuid),

    #[error("Tech stack entry not found: {0}")]
    EntryNotFound(Uuid),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid status '{0}' (expected Active, Pending or Completed)")]
    InvalidStatus(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export failed: {0}")]
    Export(String),
}

impl StaffingError {
    /// True for failures the user can fix by correcting the draft
    pub fn is_validation(&self) -> bool {
        matches!(self, StaffingError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, StaffingError>;
