use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::StaffingError;

/// Default rendering of `submitted_at`, e.g. "Oct 19, 2026, 02:05 PM"
pub const TIMESTAMP_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

/// Represents the status of a staffing requirement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum RequirementStatus {
    #[default]
    Active,
    Pending,
    Completed,
}

impl RequirementStatus {
    pub const ALL: [RequirementStatus; 3] = [
        RequirementStatus::Active,
        RequirementStatus::Pending,
        RequirementStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RequirementStatus::Active => "Active",
            RequirementStatus::Pending => "Pending",
            RequirementStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for RequirementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RequirementStatus {
    type Err = StaffingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(RequirementStatus::Active),
            "pending" => Ok(RequirementStatus::Pending),
            "completed" => Ok(RequirementStatus::Completed),
            _ => Err(StaffingError::InvalidStatus(s.to_string())),
        }
    }
}

/// Represents the priority of a staffing requirement.
///
/// Every committed requirement starts at `Medium`; the editor has no way to
/// change it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum RequirementPriority {
    High,
    #[default]
    Medium,
    Low,
}

impl fmt::Display for RequirementPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequirementPriority::High => write!(f, "High"),
            RequirementPriority::Medium => write!(f, "Medium"),
            RequirementPriority::Low => write!(f, "Low"),
        }
    }
}

/// Top-level fields of a draft that the editor can set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    ReqId,
    BusinessUnit,
    Platform,
    ClientName,
    Status,
}

impl DraftField {
    pub const ALL: [DraftField; 5] = [
        DraftField::ReqId,
        DraftField::BusinessUnit,
        DraftField::Platform,
        DraftField::ClientName,
        DraftField::Status,
    ];

    /// Human-readable label used by prompts
    pub fn label(&self) -> &'static str {
        match self {
            DraftField::ReqId => "Requirement ID",
            DraftField::BusinessUnit => "Business Unit",
            DraftField::Platform => "Platform",
            DraftField::ClientName => "Client Name",
            DraftField::Status => "Status",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftField::ReqId => write!(f, "reqId"),
            DraftField::BusinessUnit => write!(f, "businessUnit"),
            DraftField::Platform => write!(f, "platform"),
            DraftField::ClientName => write!(f, "clientName"),
            DraftField::Status => write!(f, "status"),
        }
    }
}

impl FromStr for DraftField {
    type Err = StaffingError;

    /// Accepts both the camelCase wire names and snake_case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "reqId" | "req_id" => Ok(DraftField::ReqId),
            "businessUnit" | "business_unit" => Ok(DraftField::BusinessUnit),
            "platform" => Ok(DraftField::Platform),
            "clientName" | "client_name" => Ok(DraftField::ClientName),
            "status" => Ok(DraftField::Status),
            other => Err(StaffingError::UnknownField(other.to_string())),
        }
    }
}

/// Fields of a tech stack entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryField {
    TechStack,
    Experience,
    JobDescription,
    EngineersNeeded,
}

impl EntryField {
    pub const ALL: [EntryField; 4] = [
        EntryField::TechStack,
        EntryField::Experience,
        EntryField::JobDescription,
        EntryField::EngineersNeeded,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EntryField::TechStack => "Tech Stack",
            EntryField::Experience => "Experience",
            EntryField::JobDescription => "Job Description",
            EntryField::EngineersNeeded => "Engineers Needed",
        }
    }
}

impl fmt::Display for EntryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryField::TechStack => write!(f, "techStack"),
            EntryField::Experience => write!(f, "experience"),
            EntryField::JobDescription => write!(f, "jobDescription"),
            EntryField::EngineersNeeded => write!(f, "engineersNeeded"),
        }
    }
}

impl FromStr for EntryField {
    type Err = StaffingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "techStack" | "tech_stack" => Ok(EntryField::TechStack),
            "experience" => Ok(EntryField::Experience),
            "jobDescription" | "job_description" => Ok(EntryField::JobDescription),
            "engineersNeeded" | "engineers_needed" => Ok(EntryField::EngineersNeeded),
            other => Err(StaffingError::UnknownField(other.to_string())),
        }
    }
}

/// One technology line item of a requirement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TechStackEntry {
    /// Unique within the owning requirement
    pub id: Uuid,

    /// Comma-separated technology names, e.g. "React, Node"
    pub tech_stack: String,

    /// Required experience, free text
    pub experience: String,

    pub job_description: String,

    /// Head count as typed by the user; only parsed when aggregating
    pub engineers_needed: String,
}

impl TechStackEntry {
    /// Creates an entry with blank fields and a fresh id
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            tech_stack: String::new(),
            experience: String::new(),
            job_description: String::new(),
            engineers_needed: String::new(),
        }
    }

    pub fn field(&self, field: EntryField) -> &str {
        match field {
            EntryField::TechStack => &self.tech_stack,
            EntryField::Experience => &self.experience,
            EntryField::JobDescription => &self.job_description,
            EntryField::EngineersNeeded => &self.engineers_needed,
        }
    }

    pub fn set_field(&mut self, field: EntryField, value: String) {
        match field {
            EntryField::TechStack => self.tech_stack = value,
            EntryField::Experience => self.experience = value,
            EntryField::JobDescription => self.job_description = value,
            EntryField::EngineersNeeded => self.engineers_needed = value,
        }
    }

    /// Technology names split on commas and trimmed.
    ///
    /// Empty segments (from "React," or a blank field) are kept.
    pub fn technologies(&self) -> impl Iterator<Item = &str> + '_ {
        self.tech_stack.split(',').map(str::trim)
    }

    /// Engineers needed as a number; 0 when the text does not start with a digit
    pub fn engineer_count(&self) -> u64 {
        leading_number(&self.engineers_needed).unwrap_or(0)
    }
}

/// Parses the leading run of ASCII digits after trimming whitespace and one optional `+`
pub(crate) fn leading_number(text: &str) -> Option<u64> {
    let text = text.trim_start();
    let text = text.strip_prefix('+').unwrap_or(text);
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    text[..end].parse().ok()
}

/// A committed staffing requirement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Requirement {
    /// Opaque identity assigned at commit
    pub id: Uuid,

    /// Display sequence number, e.g. "007"
    pub s_no: String,

    /// External requirement identifier supplied by the user
    pub req_id: String,

    pub business_unit: String,

    pub platform: String,

    pub client_name: String,

    pub status: RequirementStatus,

    pub priority: RequirementPriority,

    /// Set at commit and refreshed on every update
    pub submitted_at: DateTime<Local>,

    pub tech_stacks: Vec<TechStackEntry>,
}

/// Compact preview of a requirement's technologies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechPreview<'a> {
    /// First technology of each of the first two entries
    pub chips: Vec<&'a str>,
    /// Number of entries not represented by a chip
    pub remaining: usize,
}

impl Requirement {
    /// Formats `submitted_at` with a strftime pattern
    pub fn submitted_at_display(&self, format: &str) -> String {
        self.submitted_at.format(format).to_string()
    }

    pub fn tech_preview(&self) -> TechPreview<'_> {
        let chips = self
            .tech_stacks
            .iter()
            .take(2)
            .map(|entry| entry.technologies().next().unwrap_or(""))
            .collect();

        TechPreview {
            chips,
            remaining: self.tech_stacks.len().saturating_sub(2),
        }
    }

    /// Engineers needed across all entries
    pub fn engineer_count(&self) -> u64 {
        self.tech_stacks.iter().map(TechStackEntry::engineer_count).sum()
    }

    /// Deep copy of the editable fields
    pub fn to_draft(&self) -> Draft {
        Draft {
            req_id: self.req_id.clone(),
            business_unit: self.business_unit.clone(),
            platform: self.platform.clone(),
            client_name: self.client_name.clone(),
            status: self.status,
            tech_stacks: self.tech_stacks.clone(),
        }
    }
}

/// Working copy of a requirement owned by the draft editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub req_id: String,
    pub business_unit: String,
    pub platform: String,
    pub client_name: String,
    pub status: RequirementStatus,
    /// Never empty
    pub tech_stacks: Vec<TechStackEntry>,
}

impl Draft {
    /// Blank draft with one blank entry
    pub fn new() -> Self {
        Self::with_status(RequirementStatus::default())
    }

    pub fn with_status(status: RequirementStatus) -> Self {
        Self {
            req_id: String::new(),
            business_unit: String::new(),
            platform: String::new(),
            client_name: String::new(),
            status,
            tech_stacks: vec![TechStackEntry::blank()],
        }
    }

    /// Current value of a top-level field as text
    pub fn text(&self, field: DraftField) -> &str {
        match field {
            DraftField::ReqId => &self.req_id,
            DraftField::BusinessUnit => &self.business_unit,
            DraftField::Platform => &self.platform,
            DraftField::ClientName => &self.client_name,
            DraftField::Status => self.status.as_str(),
        }
    }

    /// Sets a top-level field; `Status` must parse as a known status
    pub fn set_field(&mut self, field: DraftField, value: &str) -> Result<(), StaffingError> {
        match field {
            DraftField::ReqId => self.req_id = value.to_string(),
            DraftField::BusinessUnit => self.business_unit = value.to_string(),
            DraftField::Platform => self.platform = value.to_string(),
            DraftField::ClientName => self.client_name = value.to_string(),
            DraftField::Status => self.status = value.parse()?,
        }
        Ok(())
    }

    pub fn entry(&self, entry_id: &Uuid) -> Option<&TechStackEntry> {
        self.tech_stacks.iter().find(|e| e.id == *entry_id)
    }

    pub fn entry_mut(&mut self, entry_id: &Uuid) -> Option<&mut TechStackEntry> {
        self.tech_stacks.iter_mut().find(|e| e.id == *entry_id)
    }
}

impl Default for Draft {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(tech: &str, engineers: &str) -> TechStackEntry {
        TechStackEntry {
            tech_stack: tech.into(),
            engineers_needed: engineers.into(),
            ..TechStackEntry::blank()
        }
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("active".parse::<RequirementStatus>().unwrap(), RequirementStatus::Active);
        assert_eq!(" Pending ".parse::<RequirementStatus>().unwrap(), RequirementStatus::Pending);
        assert_eq!("COMPLETED".parse::<RequirementStatus>().unwrap(), RequirementStatus::Completed);

        let err = "archived".parse::<RequirementStatus>().unwrap_err();
        assert_eq!(err, StaffingError::InvalidStatus("archived".into()));
    }

    #[test]
    fn test_field_names_round_trip_display() {
        for field in DraftField::ALL {
            assert_eq!(field.to_string().parse::<DraftField>().unwrap(), field);
        }
        for field in EntryField::ALL {
            assert_eq!(field.to_string().parse::<EntryField>().unwrap(), field);
        }
        assert_eq!("client_name".parse::<DraftField>().unwrap(), DraftField::ClientName);
        assert!(matches!(
            "priority".parse::<DraftField>(),
            Err(StaffingError::UnknownField(_))
        ));
    }

    #[test]
    fn test_technologies_are_trimmed() {
        let e = entry(" React ,Node,  Go", "1");
        assert_eq!(e.technologies().collect::<Vec<_>>(), vec!["React", "Node", "Go"]);
    }

    #[test]
    fn test_engineer_count_is_lenient() {
        assert_eq!(entry("", "3").engineer_count(), 3);
        assert_eq!(entry("", " 12 ").engineer_count(), 12);
        assert_eq!(entry("", "4 seniors").engineer_count(), 4);
        assert_eq!(entry("", "").engineer_count(), 0);
        assert_eq!(entry("", "abc").engineer_count(), 0);
        assert_eq!(entry("", "-2").engineer_count(), 0);
        assert_eq!(entry("", "+3").engineer_count(), 3);
        assert_eq!(entry("", "++3").engineer_count(), 0);
    }

    #[test]
    fn test_leading_number() {
        assert_eq!(leading_number("007"), Some(7));
        assert_eq!(leading_number("12x"), Some(12));
        assert_eq!(leading_number("x12"), None);
    }

    #[test]
    fn test_draft_starts_with_one_blank_entry() {
        let draft = Draft::new();
        assert_eq!(draft.tech_stacks.len(), 1);
        assert!(draft.tech_stacks[0].tech_stack.is_empty());
        assert_eq!(draft.status, RequirementStatus::Active);
    }

    #[test]
    fn test_draft_set_status_rejects_unknown() {
        let mut draft = Draft::new();
        draft.set_field(DraftField::Status, "Pending").unwrap();
        assert_eq!(draft.status, RequirementStatus::Pending);

        assert!(draft.set_field(DraftField::Status, "Done").is_err());
        assert_eq!(draft.status, RequirementStatus::Pending);
    }

    #[test]
    fn test_tech_preview() {
        let req = Requirement {
            id: Uuid::new_v4(),
            s_no: "001".into(),
            req_id: "REQ-1".into(),
            business_unit: "Retail".into(),
            platform: "Web".into(),
            client_name: "Acme".into(),
            status: RequirementStatus::Active,
            priority: RequirementPriority::Medium,
            submitted_at: Local::now(),
            tech_stacks: vec![
                entry("React, Redux", "2"),
                entry("Node", "1"),
                entry("Go", "1"),
                entry("Rust", "1"),
            ],
        };

        let preview = req.tech_preview();
        assert_eq!(preview.chips, vec!["React", "Node"]);
        assert_eq!(preview.remaining, 2);
        assert_eq!(req.engineer_count(), 5);
    }
}
