use anyhow::Result;
use inquire::{Confirm, Select, Text};
use uuid::Uuid;

use staffing_core::{DraftField, EntryField, RequirementStatus, Session};

/// Prompts for every top-level field of the current draft, pre-filled with its value
pub fn prompt_draft_fields(session: &mut Session) -> Result<()> {
    for field in DraftField::ALL {
        let value = match field {
            DraftField::Status => {
                let current = session.editor().draft().status;
                let cursor = RequirementStatus::ALL
                    .iter()
                    .position(|s| *s == current)
                    .unwrap_or(0);
                Select::new("Status:", RequirementStatus::ALL.to_vec())
                    .with_starting_cursor(cursor)
                    .prompt()?
                    .to_string()
            }
            _ => {
                let current = session.editor().draft().text(field).to_string();
                let prompt = format!("{} *:", field.label());
                Text::new(&prompt).with_initial_value(&current).prompt()?
            }
        };
        session.set_field(field, &value)?;
    }
    Ok(())
}

/// Prompts for every field of one tech stack entry
pub fn prompt_entry(session: &mut Session, entry_id: &Uuid) -> Result<()> {
    for field in EntryField::ALL {
        let current = session
            .editor()
            .draft()
            .entry(entry_id)
            .map(|e| e.field(field).to_string())
            .unwrap_or_default();

        let prompt = format!("{} *:", field.label());
        let mut text = Text::new(&prompt).with_initial_value(&current);
        if field == EntryField::TechStack {
            text = text.with_help_message("Comma separated, e.g. React, Node.js");
        }
        let value = text.prompt()?;
        session.set_entry_field(entry_id, field, &value)?;
    }
    Ok(())
}

/// Prompts the user to pick one of the draft's entries
pub fn prompt_select_entry(session: &Session, message: &str) -> Result<Option<Uuid>> {
    let entries = &session.editor().draft().tech_stacks;
    let options: Vec<String> = entries
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let name = if e.tech_stack.is_empty() {
                "(blank)"
            } else {
                e.tech_stack.as_str()
            };
            format!("#{} {}", i + 1, name)
        })
        .collect();

    let selection = Select::new(message, options.clone()).prompt_skippable()?;
    Ok(selection
        .and_then(|s| options.iter().position(|o| *o == s))
        .map(|index| entries[index].id))
}

/// Prompts the user to select a requirement from the current search results
pub fn prompt_select_requirement(session: &Session, message: &str) -> Result<Option<Uuid>> {
    let candidates: Vec<(Uuid, String)> = session
        .filtered()
        .map(|r| {
            (
                r.id,
                format!("{}  {}  {} ({})", r.s_no, r.req_id, r.client_name, r.business_unit),
            )
        })
        .collect();

    if candidates.is_empty() {
        println!("No requirements to choose from.");
        return Ok(None);
    }

    let options: Vec<String> = candidates.iter().map(|(_, label)| label.clone()).collect();
    let selection = Select::new(message, options).prompt_skippable()?;

    Ok(selection.and_then(|s| {
        candidates
            .iter()
            .find(|(_, label)| *label == s)
            .map(|(id, _)| *id)
    }))
}

pub fn confirm(message: &str) -> Result<bool> {
    Ok(Confirm::new(message).with_default(false).prompt()?)
}
