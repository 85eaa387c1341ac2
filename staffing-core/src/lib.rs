pub mod config;
pub mod editor;
pub mod error;
pub mod export;
pub mod models;
pub mod palette;
pub mod search;
pub mod session;
pub mod stats;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use config::{get_config_path, Config};
pub use editor::{DraftEditor, EditorMode};
pub use error::{Result, StaffingError};
pub use export::ExportFormat;
pub use models::{
    Draft, DraftField, EntryField, Requirement, RequirementPriority, RequirementStatus,
    TechPreview, TechStackEntry, TIMESTAMP_FORMAT,
};
pub use palette::{color_for, priority_tone, status_tone, TagColor, Tone};
pub use search::Filter;
pub use session::{Session, View};
pub use stats::{Statistics, StatusBreakdown};
pub use store::RequirementStore;
pub use validation::{validate, MissingField, ValidationError};
