//! Case-insensitive search over committed requirements.

use std::slice;

use crate::models::Requirement;

/// Whether a requirement matches an already lower-cased search needle.
///
/// Checks the sequence number, requirement id, business unit, platform,
/// client name and every entry's tech stack.
pub fn matches(req: &Requirement, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    let contains = |text: &str| text.to_lowercase().contains(needle);

    contains(&req.s_no)
        || contains(&req.req_id)
        || contains(&req.business_unit)
        || contains(&req.platform)
        || contains(&req.client_name)
        || req.tech_stacks.iter().any(|tech| contains(&tech.tech_stack))
}

/// Lazy view of the requirements matching a search term, in store order.
///
/// Cloning the filter restarts iteration from the clone point.
#[derive(Debug, Clone)]
pub struct Filter<'a> {
    inner: slice::Iter<'a, Requirement>,
    needle: String,
}

impl<'a> Filter<'a> {
    pub(crate) fn new(requirements: &'a [Requirement], term: &str) -> Self {
        Self {
            inner: requirements.iter(),
            needle: term.to_lowercase(),
        }
    }

    /// The lower-cased term this filter matches against
    pub fn needle(&self) -> &str {
        &self.needle
    }
}

impl<'a> Iterator for Filter<'a> {
    type Item = &'a Requirement;

    fn next(&mut self) -> Option<Self::Item> {
        let needle = self.needle.as_str();
        self.inner.find(|req| matches(req, needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RequirementPriority, RequirementStatus, TechStackEntry};
    use chrono::Local;
    use uuid::Uuid;

    fn requirement(s_no: &str, client: &str, tech: &str) -> Requirement {
        Requirement {
            id: Uuid::new_v4(),
            s_no: s_no.into(),
            req_id: format!("REQ-{}", s_no),
            business_unit: "Retail".into(),
            platform: "Web".into(),
            client_name: client.into(),
            status: RequirementStatus::Active,
            priority: RequirementPriority::Medium,
            submitted_at: Local::now(),
            tech_stacks: vec![TechStackEntry {
                tech_stack: tech.into(),
                ..TechStackEntry::blank()
            }],
        }
    }

    #[test]
    fn test_empty_term_matches_everything() {
        let reqs = vec![requirement("001", "Acme", "Go"), requirement("002", "Beta", "Rust")];
        assert_eq!(Filter::new(&reqs, "").count(), 2);
    }

    #[test]
    fn test_client_name_search_is_case_insensitive() {
        let reqs = vec![
            requirement("001", "Acme", "Go"),
            requirement("002", "Beta", "Go"),
            requirement("003", "Acme Labs", "Go"),
        ];

        let found: Vec<_> = Filter::new(&reqs, "acme").map(|r| r.s_no.as_str()).collect();
        assert_eq!(found, vec!["001", "003"]);
    }

    #[test]
    fn test_matches_tech_stack_and_sequence() {
        let reqs = vec![requirement("001", "Acme", "React, Node"), requirement("002", "Beta", "Go")];

        let by_tech: Vec<_> = Filter::new(&reqs, "NODE").collect();
        assert_eq!(by_tech.len(), 1);
        assert_eq!(by_tech[0].client_name, "Acme");

        let by_sno: Vec<_> = Filter::new(&reqs, "002").collect();
        assert_eq!(by_sno.len(), 1);
        assert_eq!(by_sno[0].client_name, "Beta");
    }

    #[test]
    fn test_no_match() {
        let reqs = vec![requirement("001", "Acme", "Go")];
        assert_eq!(Filter::new(&reqs, "cobol").next(), None);
    }

    #[test]
    fn test_filter_is_restartable() {
        let reqs = vec![requirement("001", "Acme", "Go"), requirement("002", "Acme", "Go")];
        let filter = Filter::new(&reqs, "acme");

        let first_pass = filter.clone().count();
        let second_pass = filter.count();
        assert_eq!(first_pass, 2);
        assert_eq!(second_pass, 2);
    }
}
