//! Commit gate for drafts.
//!
//! Only emptiness is checked. `engineersNeeded` is accepted as free text and
//! is parsed leniently later by the statistics (unparsable values count as 0).

use std::fmt;

use thiserror::Error;
use uuid::Uuid;

use crate::models::{Draft, DraftField, EntryField, TechStackEntry};

/// A single required field left empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingField {
    /// A top-level requirement field
    Requirement(DraftField),
    /// The draft has no tech stack entries at all
    TechStacks,
    /// A field of one tech stack entry; `position` is 1-based
    Entry {
        position: usize,
        entry_id: Uuid,
        field: EntryField,
    },
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingField::Requirement(field) => write!(f, "{}", field),
            MissingField::TechStacks => write!(f, "techStacks"),
            MissingField::Entry {
                position, field, ..
            } => write!(f, "techStacks[{}].{}", position, field),
        }
    }
}

/// Raised when a draft fails the commit gate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Missing required fields: {}", join_fields(.missing))]
pub struct ValidationError {
    pub missing: Vec<MissingField>,
}

fn join_fields(missing: &[MissingField]) -> String {
    missing
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

const REQUIRED_FIELDS: [DraftField; 4] = [
    DraftField::ReqId,
    DraftField::BusinessUnit,
    DraftField::Platform,
    DraftField::ClientName,
];

/// Checks that every required field of the draft is non-empty
pub fn validate(draft: &Draft) -> Result<(), ValidationError> {
    let mut missing: Vec<MissingField> = REQUIRED_FIELDS
        .iter()
        .filter(|field| draft.text(**field).is_empty())
        .map(|field| MissingField::Requirement(*field))
        .collect();

    if draft.tech_stacks.is_empty() {
        missing.push(MissingField::TechStacks);
    }
    for (index, entry) in draft.tech_stacks.iter().enumerate() {
        missing.extend(missing_entry_fields(index + 1, entry));
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { missing })
    }
}

fn missing_entry_fields(
    position: usize,
    entry: &TechStackEntry,
) -> impl Iterator<Item = MissingField> + '_ {
    EntryField::ALL
        .into_iter()
        .filter(move |field| entry.field(*field).is_empty())
        .map(move |field| MissingField::Entry {
            position,
            entry_id: entry.id,
            field,
        })
}
