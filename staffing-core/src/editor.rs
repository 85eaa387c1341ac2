//! The single in-progress requirement draft.
//!
//! The editor is either composing a new requirement or editing a copy of a
//! stored one; [`DraftEditor::commit`] dispatches on that mode. Drafts are
//! always deep copies, so typing into the editor never touches the store
//! until a commit succeeds.

use tracing::debug;
use uuid::Uuid;

use crate::error::{Result, StaffingError};
use crate::models::{Draft, DraftField, EntryField, Requirement, RequirementStatus, TechStackEntry};
use crate::store::RequirementStore;

/// What a commit of the current draft will do
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Commit appends a new requirement
    #[default]
    New,
    /// Commit replaces the stored requirement `target_id`
    Editing { target_id: Uuid, s_no: String },
}

#[derive(Debug, Clone)]
pub struct DraftEditor {
    draft: Draft,
    mode: EditorMode,
    default_status: RequirementStatus,
}

impl DraftEditor {
    pub fn new() -> Self {
        Self::with_default_status(RequirementStatus::default())
    }

    /// Editor whose fresh drafts start with `status`
    pub fn with_default_status(status: RequirementStatus) -> Self {
        Self {
            draft: Draft::with_status(status),
            mode: EditorMode::New,
            default_status: status,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditorMode::Editing { .. })
    }

    /// Id of the stored requirement being edited, if any
    pub fn editing_id(&self) -> Option<Uuid> {
        match &self.mode {
            EditorMode::Editing { target_id, .. } => Some(*target_id),
            EditorMode::New => None,
        }
    }

    /// Sequence number of the requirement being edited, kept even if it was deleted meanwhile
    pub fn editing_s_no(&self) -> Option<&str> {
        match &self.mode {
            EditorMode::Editing { s_no, .. } => Some(s_no),
            EditorMode::New => None,
        }
    }

    /// Discards the working draft and starts a blank one
    pub fn start_new(&mut self) {
        self.draft = Draft::with_status(self.default_status);
        self.mode = EditorMode::New;
    }

    /// Loads a copy of `requirement` for editing
    pub fn start_edit(&mut self, requirement: &Requirement) {
        debug!(id = %requirement.id, s_no = %requirement.s_no, "Editing requirement");
        self.draft = requirement.to_draft();
        self.mode = EditorMode::Editing {
            target_id: requirement.id,
            s_no: requirement.s_no.clone(),
        };
    }

    pub fn set_field(&mut self, field: DraftField, value: &str) -> Result<()> {
        self.draft.set_field(field, value)
    }

    /// Appends a blank entry and returns its id
    pub fn add_entry(&mut self) -> Uuid {
        let entry = TechStackEntry::blank();
        let id = entry.id;
        self.draft.tech_stacks.push(entry);
        debug!(entry = %id, count = self.draft.tech_stacks.len(), "Added tech stack entry");
        id
    }

    /// Removes an entry unless it is the last one; returns whether anything was removed
    pub fn remove_entry(&mut self, entry_id: &Uuid) -> bool {
        if self.draft.tech_stacks.len() <= 1 {
            return false;
        }

        let before = self.draft.tech_stacks.len();
        self.draft.tech_stacks.retain(|e| e.id != *entry_id);
        before != self.draft.tech_stacks.len()
    }

    pub fn set_entry_field(&mut self, entry_id: &Uuid, field: EntryField, value: &str) -> Result<()> {
        let entry = self
            .draft
            .entry_mut(entry_id)
            .ok_or(StaffingError::EntryNotFound(*entry_id))?;
        entry.set_field(field, value.to_string());
        Ok(())
    }

    /// Commits the draft to `store` and resets to a blank draft on success.
    ///
    /// On failure the draft and mode are left as they were so the user can
    /// correct the input.
    pub fn commit(&mut self, store: &mut RequirementStore) -> Result<Requirement> {
        let stored = match &self.mode {
            EditorMode::New => store.commit(&self.draft)?,
            EditorMode::Editing { target_id, .. } => store.update(*target_id, &self.draft)?,
        };

        self.start_new();
        Ok(stored)
    }

    /// Throws away the draft without touching the store
    pub fn cancel(&mut self) {
        debug!(was_editing = self.is_editing(), "Draft cancelled");
        self.start_new();
    }
}

impl Default for DraftEditor {
    fn default() -> Self {
        Self::new()
    }
}
