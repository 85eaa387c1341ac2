//! Aggregate views over the committed requirements.
//!
//! Everything here is recomputed from scratch on each call; nothing is cached.

use serde::Serialize;
use std::collections::HashSet;

use crate::models::{Requirement, RequirementStatus};

/// Dashboard totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_requirements: usize,
    /// Sum of every entry's engineers needed; unparsable values count as 0
    pub total_engineers: u64,
    /// Distinct technologies, compared case-sensitively after trimming
    pub tech_stacks_used: usize,
    /// Distinct client names
    pub active_clients: usize,
    pub total_business_units: usize,
}

impl Statistics {
    pub fn compute(requirements: &[Requirement]) -> Self {
        let technologies: HashSet<&str> = requirements
            .iter()
            .flat_map(|req| req.tech_stacks.iter())
            .flat_map(|tech| tech.technologies())
            .collect();

        let clients: HashSet<&str> = requirements.iter().map(|r| r.client_name.as_str()).collect();
        let units: HashSet<&str> = requirements
            .iter()
            .map(|r| r.business_unit.as_str())
            .collect();

        Self {
            total_requirements: requirements.len(),
            total_engineers: requirements.iter().map(Requirement::engineer_count).sum(),
            tech_stacks_used: technologies.len(),
            active_clients: clients.len(),
            total_business_units: units.len(),
        }
    }
}

/// Requirement counts per status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatusBreakdown {
    pub active: usize,
    pub pending: usize,
    pub completed: usize,
}

impl StatusBreakdown {
    pub fn compute(requirements: &[Requirement]) -> Self {
        requirements
            .iter()
            .fold(Self::default(), |mut counts, req| {
                match req.status {
                    RequirementStatus::Active => counts.active += 1,
                    RequirementStatus::Pending => counts.pending += 1,
                    RequirementStatus::Completed => counts.completed += 1,
                }
                counts
            })
    }

    pub fn count(&self, status: RequirementStatus) -> usize {
        match status {
            RequirementStatus::Active => self.active,
            RequirementStatus::Pending => self.pending,
            RequirementStatus::Completed => self.completed,
        }
    }
}
