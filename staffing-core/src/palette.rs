//! Colour assignment for tags and badges.
//!
//! Business-unit tags get a palette entry derived from the label text alone,
//! so the same label always renders in the same colour without keeping any
//! mapping around.

use std::fmt;

use crate::models::{RequirementPriority, RequirementStatus};

/// Palette used for category tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagColor {
    Blue,
    Green,
    Purple,
    Orange,
    Pink,
    Indigo,
    Teal,
    Cyan,
}

pub const PALETTE: [TagColor; 8] = [
    TagColor::Blue,
    TagColor::Green,
    TagColor::Purple,
    TagColor::Orange,
    TagColor::Pink,
    TagColor::Indigo,
    TagColor::Teal,
    TagColor::Cyan,
];

impl TagColor {
    pub fn name(&self) -> &'static str {
        match self {
            TagColor::Blue => "blue",
            TagColor::Green => "green",
            TagColor::Purple => "purple",
            TagColor::Orange => "orange",
            TagColor::Pink => "pink",
            TagColor::Indigo => "indigo",
            TagColor::Teal => "teal",
            TagColor::Cyan => "cyan",
        }
    }
}

impl fmt::Display for TagColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Palette entry for a label: sum of its UTF-16 code units modulo the palette size
pub fn color_for(label: &str) -> TagColor {
    let hash: u64 = label.encode_utf16().map(u64::from).sum();
    PALETTE[(hash % PALETTE.len() as u64) as usize]
}

/// Badge tone for statuses and priorities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Green,
    Yellow,
    Blue,
    Red,
}

pub fn status_tone(status: RequirementStatus) -> Tone {
    match status {
        RequirementStatus::Active => Tone::Green,
        RequirementStatus::Pending => Tone::Yellow,
        RequirementStatus::Completed => Tone::Blue,
    }
}

pub fn priority_tone(priority: RequirementPriority) -> Tone {
    match priority {
        RequirementPriority::High => Tone::Red,
        RequirementPriority::Medium => Tone::Yellow,
        RequirementPriority::Low => Tone::Green,
    }
}
