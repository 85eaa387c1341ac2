//! One user's working session.
//!
//! Bundles the store, the draft editor and the transient view state a front
//! end needs between intents. A multi-threaded host should keep the whole
//! session behind one `Mutex`.

use std::collections::HashSet;
use std::time::Instant;

use tracing::debug;
use uuid::Uuid;

use crate::config::Config;
use crate::editor::DraftEditor;
use crate::error::{Result, StaffingError};
use crate::models::{DraftField, EntryField, Requirement};
use crate::palette::TagColor;
use crate::search::Filter;
use crate::stats::{Statistics, StatusBreakdown};
use crate::store::RequirementStore;

/// Screen the front end is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    /// The add/edit form
    Add,
    /// The searchable requirements list
    List,
}

#[derive(Debug, Clone)]
struct CopiedIndicator {
    text: String,
    at: Instant,
}

#[derive(Debug)]
pub struct Session {
    config: Config,
    store: RequirementStore,
    editor: DraftEditor,
    view: View,
    search_term: String,
    expanded: HashSet<Uuid>,
    copied: Option<CopiedIndicator>,
}

impl Session {
    pub fn new(config: Config) -> Self {
        let editor = DraftEditor::with_default_status(config.default_status);
        Self {
            config,
            store: RequirementStore::new(),
            editor,
            view: View::Dashboard,
            search_term: String::new(),
            expanded: HashSet::new(),
            copied: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &RequirementStore {
        &self.store
    }

    pub fn editor(&self) -> &DraftEditor {
        &self.editor
    }

    pub fn active_view(&self) -> View {
        self.view
    }

    pub fn navigate(&mut self, view: View) {
        debug!(?view, "Navigate");
        self.view = view;
    }

    // =========================================================================
    // Draft editing
    // =========================================================================

    pub fn start_new(&mut self) {
        self.editor.start_new();
        self.navigate(View::Add);
    }

    /// Copies the stored requirement into the editor
    pub fn start_edit(&mut self, id: &Uuid) -> Result<()> {
        let requirement = self.store.get(id).ok_or(StaffingError::NotFound(*id))?;
        self.editor.start_edit(requirement);
        self.navigate(View::Add);
        Ok(())
    }

    pub fn set_field(&mut self, field: DraftField, value: &str) -> Result<()> {
        self.editor.set_field(field, value)
    }

    pub fn add_entry(&mut self) -> Uuid {
        self.editor.add_entry()
    }

    pub fn remove_entry(&mut self, entry_id: &Uuid) -> bool {
        self.editor.remove_entry(entry_id)
    }

    pub fn set_entry_field(&mut self, entry_id: &Uuid, field: EntryField, value: &str) -> Result<()> {
        self.editor.set_entry_field(entry_id, field, value)
    }

    /// Commits the draft; on success the list view is shown
    pub fn commit(&mut self) -> Result<Requirement> {
        let stored = self.editor.commit(&mut self.store)?;
        self.navigate(View::List);
        Ok(stored)
    }

    pub fn cancel(&mut self) {
        self.editor.cancel();
        self.navigate(View::List);
    }

    // =========================================================================
    // List view state
    // =========================================================================

    /// Deletes a requirement and forgets any view state kept for it
    pub fn delete(&mut self, id: &Uuid) -> Result<Requirement> {
        let removed = self.store.delete(id)?;
        self.expanded.remove(id);
        Ok(removed)
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Requirements matching the current search term
    pub fn filtered(&self) -> Filter<'_> {
        self.store.filter(&self.search_term)
    }

    /// Flips the detail row of a requirement; returns the new state
    pub fn toggle_row(&mut self, id: Uuid) -> bool {
        if self.expanded.remove(&id) {
            false
        } else {
            self.expanded.insert(id);
            true
        }
    }

    pub fn is_expanded(&self, id: &Uuid) -> bool {
        self.expanded.contains(id)
    }

    /// Remembers that `text` was just copied
    pub fn copy_req_id(&mut self, text: &str) {
        self.copied = Some(CopiedIndicator {
            text: text.to_string(),
            at: Instant::now(),
        });
    }

    /// The recently copied text while its indicator is still showing
    pub fn copied(&self) -> Option<&str> {
        self.copied_as_of(Instant::now())
    }

    pub fn copied_as_of(&self, now: Instant) -> Option<&str> {
        self.copied
            .as_ref()
            .filter(|c| now.saturating_duration_since(c.at) < self.config.copy_feedback())
            .map(|c| c.text.as_str())
    }

    // =========================================================================
    // Derived views
    // =========================================================================

    pub fn statistics(&self) -> Statistics {
        self.store.statistics()
    }

    pub fn status_breakdown(&self) -> StatusBreakdown {
        self.store.status_breakdown()
    }

    /// Requirements shown on the dashboard
    pub fn recent(&self) -> &[Requirement] {
        self.store.recent(self.config.recent_limit)
    }

    pub fn color_for(&self, label: &str) -> TagColor {
        self.store.color_for(label)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RequirementStatus;
    use std::time::Duration;

    fn add(session: &mut Session, client: &str) -> Requirement {
        session.start_new();
        session.set_field(DraftField::ReqId, "REQ-1").unwrap();
        session.set_field(DraftField::BusinessUnit, "Platform-Team").unwrap();
        session.set_field(DraftField::Platform, "Cloud").unwrap();
        session.set_field(DraftField::ClientName, client).unwrap();
        let entry = session.editor().draft().tech_stacks[0].id;
        for (field, value) in [
            (EntryField::TechStack, "Kotlin"),
            (EntryField::Experience, "4 years"),
            (EntryField::JobDescription, "Android"),
            (EntryField::EngineersNeeded, "2"),
        ] {
            session.set_entry_field(&entry, field, value).unwrap();
        }
        session.commit().unwrap()
    }

    #[test]
    fn test_views_follow_intents() {
        let mut session = Session::default();
        assert_eq!(session.active_view(), View::Dashboard);

        session.start_new();
        assert_eq!(session.active_view(), View::Add);
        session.cancel();
        assert_eq!(session.active_view(), View::List);

        add(&mut session, "Acme");
        assert_eq!(session.active_view(), View::List);
    }

    #[test]
    fn test_failed_commit_stays_on_form() {
        let mut session = Session::default();
        session.start_new();
        assert!(session.commit().unwrap_err().is_validation());
        assert_eq!(session.active_view(), View::Add);
    }

    #[test]
    fn test_start_edit_unknown() {
        let mut session = Session::default();
        let id = Uuid::new_v4();
        assert_eq!(session.start_edit(&id), Err(StaffingError::NotFound(id)));
        assert!(!session.editor().is_editing());
    }

    #[test]
    fn test_edit_through_session() {
        let mut session = Session::default();
        let req = add(&mut session, "Acme");

        session.start_edit(&req.id).unwrap();
        session.set_field(DraftField::Status, "Completed").unwrap();
        let updated = session.commit().unwrap();

        assert_eq!(updated.id, req.id);
        assert_eq!(session.status_breakdown().completed, 1);
        assert_eq!(session.store().len(), 1);
    }

    #[test]
    fn test_delete_evicts_expanded_row() {
        let mut session = Session::default();
        let req = add(&mut session, "Acme");

        assert!(session.toggle_row(req.id));
        assert!(session.is_expanded(&req.id));

        session.delete(&req.id).unwrap();
        assert!(!session.is_expanded(&req.id));
        assert!(session.delete(&req.id).is_err());
    }

    #[test]
    fn test_toggle_row_flips() {
        let mut session = Session::default();
        let id = Uuid::new_v4();
        assert!(session.toggle_row(id));
        assert!(!session.toggle_row(id));
        assert!(!session.is_expanded(&id));
    }

    #[test]
    fn test_search_term_filters() {
        let mut session = Session::default();
        add(&mut session, "Acme");
        add(&mut session, "Beta");

        session.set_search_term("BETA");
        let found: Vec<_> = session.filtered().collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].client_name, "Beta");

        session.set_search_term("");
        assert_eq!(session.filtered().count(), 2);
    }

    #[test]
    fn test_copied_indicator_expires() {
        let mut session = Session::default();
        assert_eq!(session.copied(), None);

        session.copy_req_id("REQ-1");
        assert_eq!(session.copied(), Some("REQ-1"));

        let later = Instant::now() + Duration::from_millis(2500);
        assert_eq!(session.copied_as_of(later), None);
    }

    #[test]
    fn test_config_shapes_session() {
        let config = Config {
            default_status: RequirementStatus::Pending,
            recent_limit: 1,
            ..Config::default()
        };
        let mut session = Session::new(config);
        assert_eq!(session.editor().draft().status, RequirementStatus::Pending);

        add(&mut session, "Acme");
        add(&mut session, "Beta");
        assert_eq!(session.recent().len(), 1);
        assert_eq!(session.statistics().total_engineers, 4);
        assert_eq!(session.color_for("Platform-Team"), session.color_for("Platform-Team"));
    }
}
