use colored::{Color, ColoredString, Colorize};

use staffing_core::{
    priority_tone, status_tone, MissingField, Requirement, RequirementPriority, RequirementStatus,
    Session, Statistics, TagColor, Tone, ValidationError,
};

fn tag_color(color: TagColor) -> Color {
    match color {
        TagColor::Blue => Color::Blue,
        TagColor::Green => Color::Green,
        TagColor::Purple => Color::Magenta,
        TagColor::Orange => Color::TrueColor {
            r: 255,
            g: 140,
            b: 0,
        },
        TagColor::Pink => Color::BrightMagenta,
        TagColor::Indigo => Color::TrueColor {
            r: 99,
            g: 102,
            b: 241,
        },
        TagColor::Teal => Color::Cyan,
        TagColor::Cyan => Color::BrightCyan,
    }
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Green => Color::Green,
        Tone::Yellow => Color::Yellow,
        Tone::Blue => Color::Blue,
        Tone::Red => Color::Red,
    }
}

/// Label rendered in its palette colour
pub fn tag(session: &Session, label: &str) -> ColoredString {
    label.color(tag_color(session.color_for(label))).bold()
}

pub fn status(status: RequirementStatus) -> ColoredString {
    status.to_string().color(tone_color(status_tone(status)))
}

pub fn priority(priority: RequirementPriority) -> ColoredString {
    priority.to_string().color(tone_color(priority_tone(priority)))
}

fn tech_chips(req: &Requirement) -> String {
    let preview = req.tech_preview();
    let mut chips: Vec<String> = preview.chips.iter().map(|c| format!("[{}]", c)).collect();
    if preview.remaining > 0 {
        chips.push(format!("+{} more", preview.remaining));
    }
    chips.join(" ")
}

pub fn statistics(stats: &Statistics) {
    println!("{}", "Overview".bold().underline());
    println!("  Requirements:    {}", stats.total_requirements.to_string().bold());
    println!("  Engineers:       {}", stats.total_engineers.to_string().bold());
    println!("  Tech stacks:     {}", stats.tech_stacks_used.to_string().bold());
    println!("  Clients:         {}", stats.active_clients.to_string().bold());
    println!("  Business units:  {}", stats.total_business_units.to_string().bold());
}

pub fn dashboard(session: &Session) {
    statistics(&session.statistics());
    println!();

    let total = session.store().len();
    if total == 0 {
        println!("{}", "No requirements yet. Choose \"Add requirement\" to create one.".yellow());
        return;
    }

    println!("{}", "Recent requirements".bold().underline());
    for req in session.recent() {
        println!(
            "  {}  {:<12} {:<20} {}  {}  {}",
            req.s_no.dimmed(),
            req.req_id,
            req.client_name,
            tag(session, &req.business_unit),
            tech_chips(req),
            status(req.status)
        );
    }

    let breakdown = session.status_breakdown();
    println!(
        "\nShowing {} of {} requirements  •  Active: {}  Pending: {}",
        session.recent().len(),
        total,
        breakdown.active,
        breakdown.pending
    );
}

pub fn requirement_list(session: &Session) {
    let matching: Vec<&Requirement> = session.filtered().collect();

    println!(
        "{} requirements • {} engineers needed",
        matching.len(),
        session.statistics().total_engineers
    );
    if !session.search_term().is_empty() {
        println!("Search: {}", session.search_term().cyan());
    }

    if matching.is_empty() {
        println!("{}", "No requirements found.".yellow());
        return;
    }

    println!(
        "{}",
        format!(
            "{:<5} {:<12} {:<16} {:<14} {:<20} {:<10} {:<10}",
            "S.No", "Req ID", "Business Unit", "Platform", "Client", "Status", "Priority"
        )
        .bold()
    );

    for req in matching {
        let copied = if session.copied() == Some(req.req_id.as_str()) {
            " ✓ copied".green().to_string()
        } else {
            String::new()
        };

        println!(
            "{:<5} {:<12} {:<16} {:<14} {:<20} {:<10} {:<10}{}",
            req.s_no,
            req.req_id,
            tag(session, &req.business_unit),
            req.platform,
            req.client_name,
            status(req.status),
            priority(req.priority),
            copied
        );

        if session.is_expanded(&req.id) {
            details(session, req);
        }
    }
}

pub fn details(session: &Session, req: &Requirement) {
    println!(
        "      Submitted {}  •  {} engineers",
        req.submitted_at_display(&session.config().timestamp_format).dimmed(),
        req.engineer_count()
    );
    for (index, tech) in req.tech_stacks.iter().enumerate() {
        println!("      {}. {}", index + 1, tech.tech_stack.bold());
        println!("         Experience:  {}", tech.experience);
        println!("         Engineers:   {}", tech.engineers_needed);
        println!("         Description: {}", tech.job_description);
    }
}

pub fn validation_error(err: &ValidationError) {
    println!("{}", "Please fill all required fields:".red());
    for missing in &err.missing {
        match missing {
            MissingField::Requirement(field) => println!("  {} {}", "✗".red(), field.label()),
            MissingField::TechStacks => println!("  {} At least one tech stack", "✗".red()),
            MissingField::Entry {
                position, field, ..
            } => println!("  {} Tech stack #{}: {}", "✗".red(), position, field.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use staffing_core::{DraftField, EntryField};

    #[test]
    fn test_tech_chips_summarise_extra_entries() {
        let mut session = Session::default();
        session.start_new();
        for (field, value) in [
            (DraftField::ReqId, "REQ-1"),
            (DraftField::BusinessUnit, "Retail"),
            (DraftField::Platform, "Web"),
            (DraftField::ClientName, "Acme"),
        ] {
            session.set_field(field, value).unwrap();
        }
        let mut ids = vec![session.editor().draft().tech_stacks[0].id];
        ids.push(session.add_entry());
        ids.push(session.add_entry());
        for (id, tech) in ids.iter().zip(["React, Node", "Go", "Rust"]) {
            for field in EntryField::ALL {
                session.set_entry_field(id, field, "1").unwrap();
            }
            session.set_entry_field(id, EntryField::TechStack, tech).unwrap();
        }
        let req = session.commit().unwrap();

        assert_eq!(tech_chips(&req), "[React] [Go] +1 more");
    }
}
