use anyhow::{Context, Result};
use colored::Colorize;
use inquire::{InquireError, Select, Text};
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::{debug, warn};

use staffing_core::{export, ExportFormat, Session, StaffingError, View};

use crate::prompts;
use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Dashboard,
    List,
    Search,
    Add,
    Edit,
    Delete,
    ToggleDetails,
    CopyReqId,
    Statistics,
    ColorLookup,
    Export,
    Quit,
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuAction::Dashboard => "Dashboard",
            MenuAction::List => "View requirements",
            MenuAction::Search => "Search",
            MenuAction::Add => "Add requirement",
            MenuAction::Edit => "Edit requirement",
            MenuAction::Delete => "Delete requirement",
            MenuAction::ToggleDetails => "Show/hide details",
            MenuAction::CopyReqId => "Copy requirement ID",
            MenuAction::Statistics => "Statistics",
            MenuAction::ColorLookup => "Tag colour for a label",
            MenuAction::Export => "Export",
            MenuAction::Quit => "Quit",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormAction {
    EditDetails,
    EditEntry,
    AddEntry,
    RemoveEntry,
    Submit,
    Cancel,
}

impl fmt::Display for FormAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormAction::EditDetails => write!(f, "Edit project details"),
            FormAction::EditEntry => write!(f, "Edit a tech stack"),
            FormAction::AddEntry => write!(f, "Add tech stack"),
            FormAction::RemoveEntry => write!(f, "Remove tech stack"),
            FormAction::Submit => write!(f, "Submit"),
            FormAction::Cancel => write!(f, "Cancel"),
        }
    }
}

/// Runs the interactive shell until the user quits
pub fn run(mut session: Session) -> Result<()> {
    render::dashboard(&session);

    loop {
        println!();
        let actions = vec![
            MenuAction::Dashboard,
            MenuAction::List,
            MenuAction::Search,
            MenuAction::Add,
            MenuAction::Edit,
            MenuAction::Delete,
            MenuAction::ToggleDetails,
            MenuAction::CopyReqId,
            MenuAction::Statistics,
            MenuAction::ColorLookup,
            MenuAction::Export,
            MenuAction::Quit,
        ];

        let action = match Select::new("What next?", actions).prompt_skippable() {
            Ok(Some(action)) => action,
            Ok(None) => continue,
            Err(InquireError::OperationInterrupted) => MenuAction::Quit,
            Err(err) => return Err(err.into()),
        };
        debug!(?action, "Menu selection");

        if action == MenuAction::Quit {
            break;
        }
        if let Err(err) = dispatch(&mut session, action) {
            recover(&mut session, err)?;
        }
    }

    Ok(())
}

fn dispatch(session: &mut Session, action: MenuAction) -> Result<()> {
    match action {
        MenuAction::Dashboard => {
            session.navigate(View::Dashboard);
            render::dashboard(session);
        }
        MenuAction::List => show_list(session),
        MenuAction::Search => {
            let term = Text::new("Search requirements:")
                .with_initial_value(session.search_term())
                .with_help_message("Matches S.No, Req ID, business unit, platform, client or tech stack; empty clears")
                .prompt()?;
            session.set_search_term(term);
            show_list(session);
        }
        MenuAction::Add => {
            session.start_new();
            run_form(session)?;
        }
        MenuAction::Edit => {
            if let Some(id) = prompts::prompt_select_requirement(session, "Edit which requirement?")? {
                session.start_edit(&id)?;
                run_form(session)?;
            }
        }
        MenuAction::Delete => delete(session)?,
        MenuAction::ToggleDetails => {
            if let Some(id) = prompts::prompt_select_requirement(session, "Toggle details for?")? {
                session.toggle_row(id);
                show_list(session);
            }
        }
        MenuAction::CopyReqId => {
            if let Some(id) = prompts::prompt_select_requirement(session, "Copy which Req ID?")? {
                if let Some(req) = session.store().get(&id) {
                    let req_id = req.req_id.clone();
                    println!("{}", req_id);
                    session.copy_req_id(&req_id);
                }
            }
        }
        MenuAction::Statistics => render::statistics(&session.statistics()),
        MenuAction::ColorLookup => {
            let label = Text::new("Label:").prompt()?;
            println!("{} → {}", render::tag(session, &label), session.color_for(&label));
        }
        MenuAction::Export => export_interactive(session)?,
        MenuAction::Quit => {}
    }
    Ok(())
}

/// Handles an error from a menu action.
///
/// A cancelled prompt abandons the action and any open draft. Store errors
/// and failed file writes are reported. Anything else (a broken terminal)
/// ends the shell.
fn recover(session: &mut Session, err: anyhow::Error) -> Result<()> {
    if is_cancelled(&err) {
        if session.active_view() == View::Add {
            session.cancel();
            println!("{}", "Changes discarded.".yellow());
        } else {
            println!("{}", "Cancelled.".yellow());
        }
        return Ok(());
    }

    if err.downcast_ref::<StaffingError>().is_some() || err.downcast_ref::<io::Error>().is_some() {
        warn!(error = %err, "Menu action failed");
        println!("{} {:#}", "Error:".red(), err);
        if session.active_view() == View::Add {
            session.cancel();
        }
        return Ok(());
    }

    Err(err)
}

fn is_cancelled(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<InquireError>(),
        Some(InquireError::OperationCanceled | InquireError::OperationInterrupted)
    )
}

fn show_list(session: &mut Session) {
    session.navigate(View::List);
    render::requirement_list(session);
}

/// The add/edit form. Returns once the draft is committed or cancelled.
fn run_form(session: &mut Session) -> Result<()> {
    if !session.editor().is_editing() {
        prompts::prompt_draft_fields(session)?;
        let first = session.editor().draft().tech_stacks[0].id;
        prompts::prompt_entry(session, &first)?;
    }

    loop {
        print_draft(session);

        let actions = vec![
            FormAction::Submit,
            FormAction::EditDetails,
            FormAction::EditEntry,
            FormAction::AddEntry,
            FormAction::RemoveEntry,
            FormAction::Cancel,
        ];
        let action = Select::new("Form:", actions)
            .prompt_skippable()?
            .unwrap_or(FormAction::Cancel);

        match action {
            FormAction::EditDetails => prompts::prompt_draft_fields(session)?,
            FormAction::EditEntry => {
                if let Some(id) = prompts::prompt_select_entry(session, "Edit which tech stack?")? {
                    prompts::prompt_entry(session, &id)?;
                }
            }
            FormAction::AddEntry => {
                let id = session.add_entry();
                prompts::prompt_entry(session, &id)?;
            }
            FormAction::RemoveEntry => {
                if session.editor().draft().tech_stacks.len() <= 1 {
                    println!("{}", "At least one tech stack is required.".yellow());
                } else if let Some(id) = prompts::prompt_select_entry(session, "Remove which tech stack?")? {
                    session.remove_entry(&id);
                }
            }
            FormAction::Submit => {
                let editing = session.editor().is_editing();
                match session.commit() {
                    Ok(req) => {
                        let verb = if editing { "updated" } else { "submitted" };
                        println!(
                            "{} Requirement {} ({}) {} successfully!",
                            "✓".green(),
                            req.s_no.green(),
                            req.req_id,
                            verb
                        );
                        render::requirement_list(session);
                        return Ok(());
                    }
                    Err(StaffingError::Validation(err)) => render::validation_error(&err),
                    Err(err) => {
                        println!("{} {}", "Error:".red(), err);
                        session.cancel();
                        return Ok(());
                    }
                }
            }
            FormAction::Cancel => {
                session.cancel();
                println!("{}", "Changes discarded.".yellow());
                return Ok(());
            }
        }
    }
}

fn print_draft(session: &Session) {
    let editor = session.editor();
    let draft = editor.draft();
    let heading = match editor.editing_s_no() {
        Some(s_no) => format!("Edit Requirement {}", s_no),
        None => "Add New Requirement".to_string(),
    };

    println!("\n{}", heading.bold().underline());
    println!("  Requirement ID: {}", draft.req_id);
    println!("  Business Unit:  {}", draft.business_unit);
    println!("  Platform:       {}", draft.platform);
    println!("  Client Name:    {}", draft.client_name);
    println!("  Status:         {}", render::status(draft.status));
    for (index, tech) in draft.tech_stacks.iter().enumerate() {
        println!(
            "  Tech stack #{}: {} | {} | {} engineers | {}",
            index + 1,
            tech.tech_stack,
            tech.experience,
            tech.engineers_needed,
            tech.job_description
        );
    }
}

fn delete(session: &mut Session) -> Result<()> {
    let Some(id) = prompts::prompt_select_requirement(session, "Delete which requirement?")? else {
        return Ok(());
    };

    if let Some(req) = session.store().get(&id) {
        println!("{}", "Requirement to delete:".yellow());
        render::details(session, req);
    }

    if !prompts::confirm("Are you sure you want to delete this requirement?")? {
        println!("{}", "Deletion cancelled.".yellow());
        return Ok(());
    }

    let removed = session.delete(&id)?;
    println!("{} Requirement {} deleted successfully!", "✓".green(), removed.s_no);
    Ok(())
}

fn export_interactive(session: &Session) -> Result<()> {
    let format = Select::new("Format:", vec![ExportFormat::Json, ExportFormat::Yaml]).prompt()?;
    let default_path = format!("requirements.{}", format.extension());
    let path = PathBuf::from(Text::new("Output file:").with_initial_value(&default_path).prompt()?);

    let content = export::render(session.store(), format)?;
    fs::write(&path, content).with_context(|| format!("Failed to write export to {:?}", path))?;

    println!("Exported to {}: {}", format, path.display());
    println!("  Total requirements: {}", session.store().len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use staffing_core::DraftField;
    use uuid::Uuid;

    use crate::sample;

    fn session_with_samples() -> Session {
        let mut session = Session::default();
        sample::load_samples(&mut session).unwrap();
        session
    }

    #[test]
    fn test_cancelled_form_discards_draft_and_keeps_store() {
        let mut session = session_with_samples();
        session.start_new();
        session.set_field(DraftField::ClientName, "Half typed").unwrap();

        recover(&mut session, InquireError::OperationCanceled.into()).unwrap();

        assert_eq!(session.active_view(), View::List);
        assert!(session.editor().draft().client_name.is_empty());
        assert_eq!(session.store().len(), 4);
    }

    #[test]
    fn test_cancelled_edit_leaves_record_untouched() {
        let mut session = session_with_samples();
        let original = session.store().requirements()[0].clone();
        session.start_edit(&original.id).unwrap();
        session.set_field(DraftField::Platform, "Changed").unwrap();

        let err = anyhow::Error::from(InquireError::OperationInterrupted).context("Editing entry");
        recover(&mut session, err).unwrap();

        assert!(!session.editor().is_editing());
        assert_eq!(session.store().get(&original.id), Some(&original));
    }

    #[test]
    fn test_store_and_write_errors_are_not_fatal() {
        let mut session = session_with_samples();
        let missing = StaffingError::NotFound(Uuid::new_v4());
        assert!(recover(&mut session, missing.into()).is_ok());

        let write = anyhow::Error::from(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
            .context("Failed to write export");
        assert!(recover(&mut session, write).is_ok());
        assert_eq!(session.store().len(), 4);
    }

    #[test]
    fn test_terminal_errors_end_the_shell() {
        let mut session = session_with_samples();
        assert!(recover(&mut session, InquireError::NotTTY.into()).is_err());
    }
}
