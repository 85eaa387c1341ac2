use chrono::Local;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{Result, StaffingError};
use crate::models::{leading_number, Draft, Requirement, RequirementPriority};
use crate::palette::{self, TagColor};
use crate::search::Filter;
use crate::stats::{Statistics, StatusBreakdown};
use crate::validation::validate;

/// Ordered collection of committed requirements.
///
/// Records are kept in insertion order. Every mutation goes through
/// [`commit`](Self::commit), [`update`](Self::update) or
/// [`delete`](Self::delete); the derived views are recomputed on each call.
#[derive(Debug, Clone, Default)]
pub struct RequirementStore {
    requirements: Vec<Requirement>,
}

impl RequirementStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            requirements: Vec::new(),
        }
    }

    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    pub fn get(&self, id: &Uuid) -> Option<&Requirement> {
        self.requirements.iter().find(|r| r.id == *id)
    }

    /// Sequence number the next commit would receive.
    ///
    /// Continues from the last record currently in the store, so deleted
    /// numbers are never reused but gaps may appear.
    pub fn next_sequence_number(&self) -> String {
        match self.requirements.last() {
            None => String::from("001"),
            Some(last) => {
                let last_number = leading_number(&last.s_no).unwrap_or(0);
                format!("{:03}", last_number + 1)
            }
        }
    }

    /// Validates the draft and appends it as a new requirement
    pub fn commit(&mut self, draft: &Draft) -> Result<Requirement> {
        if let Err(err) = validate(draft) {
            warn!(missing = err.missing.len(), "Rejected new requirement: {}", err);
            return Err(err.into());
        }

        let requirement = Requirement {
            id: Uuid::new_v4(),
            s_no: self.next_sequence_number(),
            req_id: draft.req_id.clone(),
            business_unit: draft.business_unit.clone(),
            platform: draft.platform.clone(),
            client_name: draft.client_name.clone(),
            status: draft.status,
            priority: RequirementPriority::Medium,
            submitted_at: Local::now(),
            tech_stacks: draft.tech_stacks.clone(),
        };

        info!(id = %requirement.id, s_no = %requirement.s_no, "Committed requirement");
        self.requirements.push(requirement.clone());
        Ok(requirement)
    }

    /// Replaces the requirement with `id` by the draft's contents.
    ///
    /// Identity, sequence number and priority are kept; `submitted_at` is
    /// refreshed.
    pub fn update(&mut self, id: Uuid, draft: &Draft) -> Result<Requirement> {
        if let Err(err) = validate(draft) {
            warn!(%id, missing = err.missing.len(), "Rejected update: {}", err);
            return Err(err.into());
        }

        let pos = self
            .requirements
            .iter()
            .position(|r| r.id == id)
            .ok_or(StaffingError::NotFound(id))?;

        let existing = &self.requirements[pos];
        let replacement = Requirement {
            id: existing.id,
            s_no: existing.s_no.clone(),
            req_id: draft.req_id.clone(),
            business_unit: draft.business_unit.clone(),
            platform: draft.platform.clone(),
            client_name: draft.client_name.clone(),
            status: draft.status,
            priority: existing.priority,
            submitted_at: Local::now(),
            tech_stacks: draft.tech_stacks.clone(),
        };

        info!(%id, s_no = %replacement.s_no, "Updated requirement");
        self.requirements[pos] = replacement.clone();
        Ok(replacement)
    }

    /// Removes and returns the requirement with `id`
    pub fn delete(&mut self, id: &Uuid) -> Result<Requirement> {
        let pos = self
            .requirements
            .iter()
            .position(|r| r.id == *id)
            .ok_or(StaffingError::NotFound(*id))?;

        let removed = self.requirements.remove(pos);
        info!(%id, s_no = %removed.s_no, "Deleted requirement");
        Ok(removed)
    }

    /// Requirements matching `term`, case-insensitively, in store order
    pub fn filter(&self, term: &str) -> Filter<'_> {
        debug!(term, "Filtering requirements");
        Filter::new(&self.requirements, term)
    }

    pub fn statistics(&self) -> Statistics {
        Statistics::compute(&self.requirements)
    }

    pub fn status_breakdown(&self) -> StatusBreakdown {
        StatusBreakdown::compute(&self.requirements)
    }

    /// The first `limit` requirements in store order
    pub fn recent(&self, limit: usize) -> &[Requirement] {
        &self.requirements[..limit.min(self.requirements.len())]
    }

    /// Tag colour for a category label such as a business unit
    pub fn color_for(&self, label: &str) -> TagColor {
        palette::color_for(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DraftField, RequirementStatus, TechStackEntry};

    fn draft(client: &str) -> Draft {
        let mut draft = Draft::new();
        draft.req_id = format!("REQ-{}", client);
        draft.business_unit = "Retail".into();
        draft.platform = "Web".into();
        draft.client_name = client.into();
        draft.tech_stacks = vec![TechStackEntry {
            tech_stack: "React, Node".into(),
            experience: "5+ years".into(),
            job_description: "Frontend work".into(),
            engineers_needed: "3".into(),
            ..TechStackEntry::blank()
        }];
        draft
    }

    #[test]
    fn test_next_sequence_number_empty() {
        let store = RequirementStore::new();
        assert_eq!(store.next_sequence_number(), "001");
    }

    #[test]
    fn test_sequence_numbers_increase() {
        let mut store = RequirementStore::new();
        let numbers: Vec<String> = ["A", "B", "C"]
            .iter()
            .map(|c| store.commit(&draft(c)).unwrap().s_no)
            .collect();

        assert_eq!(numbers, vec!["001", "002", "003"]);
    }

    #[test]
    fn test_sequence_continues_past_deleted() {
        let mut store = RequirementStore::new();
        let first = store.commit(&draft("Acme")).unwrap();
        assert_eq!(first.s_no, "001");

        store.delete(&first.id).unwrap();
        let second = store.commit(&draft("Beta")).unwrap();

        assert_eq!(second.s_no, "002");
        assert_eq!(store.len(), 1);
        assert_eq!(store.requirements()[0].s_no, "002");
    }

    #[test]
    fn test_sequence_follows_last_present_record() {
        let mut store = RequirementStore::new();
        store.commit(&draft("A")).unwrap();
        let second = store.commit(&draft("B")).unwrap();
        store.delete(&second.id).unwrap();

        // "002" is gone, so the next record continues from "001"
        assert_eq!(store.commit(&draft("C")).unwrap().s_no, "002");
    }

    #[test]
    fn test_sequence_grows_past_three_digits() {
        let mut store = RequirementStore::new();
        let mut req = store.commit(&draft("A")).unwrap();
        req.s_no = "999".into();
        store.requirements[0] = req;

        assert_eq!(store.next_sequence_number(), "1000");
    }

    #[test]
    fn test_commit_assigns_defaults() {
        let mut store = RequirementStore::new();
        let mut d = draft("Acme");
        d.status = RequirementStatus::Pending;

        let req = store.commit(&d).unwrap();
        assert_eq!(req.priority, RequirementPriority::Medium);
        assert_eq!(req.status, RequirementStatus::Pending);
        assert_eq!(req.client_name, "Acme");
        assert_eq!(store.get(&req.id), Some(&req));
    }

    #[test]
    fn test_commit_invalid_leaves_store_unchanged() {
        let mut store = RequirementStore::new();
        let mut d = draft("Acme");
        d.set_field(DraftField::Platform, "").unwrap();

        let err = store.commit(&d).unwrap_err();
        assert!(err.is_validation());
        assert!(store.is_empty());

        let mut d = draft("Acme");
        d.tech_stacks[0].experience.clear();
        assert!(store.commit(&d).unwrap_err().is_validation());
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_preserves_identity() {
        let mut store = RequirementStore::new();
        let original = store.commit(&draft("Acme")).unwrap();

        let mut edited = original.to_draft();
        edited.client_name = "Acme Labs".into();
        let updated = store.update(original.id, &edited).unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.s_no, original.s_no);
        assert_eq!(updated.priority, original.priority);
        assert_eq!(store.get(&original.id).unwrap().client_name, "Acme Labs");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_unknown_id() {
        let mut store = RequirementStore::new();
        let id = Uuid::new_v4();
        assert_eq!(store.update(id, &draft("Acme")), Err(StaffingError::NotFound(id)));
    }

    #[test]
    fn test_update_invalid_draft_keeps_record() {
        let mut store = RequirementStore::new();
        let original = store.commit(&draft("Acme")).unwrap();

        let mut edited = original.to_draft();
        edited.req_id.clear();
        assert!(store.update(original.id, &edited).unwrap_err().is_validation());
        assert_eq!(store.get(&original.id), Some(&original));
    }

    #[test]
    fn test_draft_without_entries_is_rejected() {
        let mut store = RequirementStore::new();
        let mut d = draft("Acme");
        d.tech_stacks.clear();
        assert!(store.commit(&d).unwrap_err().is_validation());
        assert!(store.is_empty());

        let original = store.commit(&draft("Beta")).unwrap();
        let mut edited = original.to_draft();
        edited.tech_stacks.clear();
        assert!(store.update(original.id, &edited).unwrap_err().is_validation());
        assert_eq!(store.get(&original.id), Some(&original));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete() {
        let mut store = RequirementStore::new();
        let req = store.commit(&draft("Acme")).unwrap();

        assert_eq!(store.delete(&req.id).unwrap().id, req.id);
        assert!(store.is_empty());
        assert_eq!(store.delete(&req.id), Err(StaffingError::NotFound(req.id)));
    }

    #[test]
    fn test_filter_by_client() {
        let mut store = RequirementStore::new();
        for client in ["Acme", "Beta", "Acme Labs"] {
            store.commit(&draft(client)).unwrap();
        }

        let clients: Vec<&str> = store
            .filter("acme")
            .map(|r| r.client_name.as_str())
            .collect();
        assert_eq!(clients, vec!["Acme", "Acme Labs"]);
        assert_eq!(store.filter("").count(), 3);
    }

    #[test]
    fn test_statistics_recomputed_after_delete() {
        let mut store = RequirementStore::new();
        let a = store.commit(&draft("Acme")).unwrap();
        store.commit(&draft("Beta")).unwrap();
        assert_eq!(store.statistics().total_engineers, 6);

        store.delete(&a.id).unwrap();
        let stats = store.statistics();
        assert_eq!(stats.total_requirements, 1);
        assert_eq!(stats.total_engineers, 3);
        assert_eq!(stats.active_clients, 1);
    }

    #[test]
    fn test_recent_is_capped() {
        let mut store = RequirementStore::new();
        assert!(store.recent(5).is_empty());
        for client in ["A", "B", "C"] {
            store.commit(&draft(client)).unwrap();
        }
        assert_eq!(store.recent(2).len(), 2);
        assert_eq!(store.recent(5).len(), 3);
        assert_eq!(store.recent(2)[0].client_name, "A");
    }
}
