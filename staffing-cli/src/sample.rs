use anyhow::{Context, Result};

use staffing_core::{DraftField, EntryField, Session};

struct SampleRequirement {
    req_id: &'static str,
    business_unit: &'static str,
    platform: &'static str,
    client_name: &'static str,
    status: &'static str,
    /// tech stack, experience, job description, engineers needed
    stacks: &'static [[&'static str; 4]],
}

const SAMPLES: &[SampleRequirement] = &[
    SampleRequirement {
        req_id: "REQ-1001",
        business_unit: "Digital Commerce",
        platform: "Web",
        client_name: "Acme Retail",
        status: "Active",
        stacks: &[
            ["React, TypeScript", "3-5 years", "Storefront redesign", "3"],
            ["Node.js, GraphQL", "5+ years", "Checkout API", "2"],
        ],
    },
    SampleRequirement {
        req_id: "REQ-1002",
        business_unit: "Platform-Team",
        platform: "Cloud",
        client_name: "Beta Logistics",
        status: "Pending",
        stacks: &[["Go, Kubernetes", "4+ years", "Routing services", "4"]],
    },
    SampleRequirement {
        req_id: "REQ-1003",
        business_unit: "Mobile",
        platform: "iOS / Android",
        client_name: "Acme Labs",
        status: "Active",
        stacks: &[
            ["Swift", "3 years", "Native iOS app", "2"],
            ["Kotlin", "3 years", "Native Android app", "2"],
            ["React Native", "2 years", "Shared components", "1"],
        ],
    },
    SampleRequirement {
        req_id: "REQ-1004",
        business_unit: "Data",
        platform: "Analytics",
        client_name: "Gamma Health",
        status: "Completed",
        stacks: &[["Python, Spark", "5+ years", "Claims pipeline", "3"]],
    },
];

/// Enters the sample requirements through the regular draft workflow
pub fn load_samples(session: &mut Session) -> Result<()> {
    for sample in SAMPLES {
        session.start_new();
        session.set_field(DraftField::ReqId, sample.req_id)?;
        session.set_field(DraftField::BusinessUnit, sample.business_unit)?;
        session.set_field(DraftField::Platform, sample.platform)?;
        session.set_field(DraftField::ClientName, sample.client_name)?;
        session.set_field(DraftField::Status, sample.status)?;

        for (index, stack) in sample.stacks.iter().enumerate() {
            let entry_id = if index == 0 {
                session.editor().draft().tech_stacks[0].id
            } else {
                session.add_entry()
            };
            for (field, value) in EntryField::ALL.iter().zip(stack.iter()) {
                session.set_entry_field(&entry_id, *field, value)?;
            }
        }

        session
            .commit()
            .with_context(|| format!("Sample {} failed validation", sample.req_id))?;
    }
    Ok(())
}
