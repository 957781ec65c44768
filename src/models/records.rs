//! Static record types for the case-study content
//!
//! All records borrow `'static` data so the content module can declare them
//! as plain constants.

use ratatui::style::Color;

/// Business rule shown in the requirements table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessRule {
    pub id: &'static str,
    pub rule: &'static str,
    pub description: &'static str,
}

/// Backlog story shown as a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserStory {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub points: u32,
    pub criteria: &'static [&'static str],
}

/// Average days to resolve a dispute for one process variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisputeTimeDatum {
    pub name: &'static str,
    pub days: u64,
    /// Bar colour
    pub fill: Color,
}

/// Monthly support ticket count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketVolumeDatum {
    pub month: &'static str,
    pub tickets: u64,
}

/// Demo milestone shown on the approval widget card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MilestoneDetails {
    pub id: &'static str,
    pub title: &'static str,
    pub submitted_by: &'static str,
    pub amount: &'static str,
    pub transaction_id: &'static str,
}

/// Headline figure for the executive summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kpi {
    pub value: &'static str,
    pub label: &'static str,
}

/// Titled block of prose
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub heading: &'static str,
    pub body: &'static str,
}

impl UserStory {
    /// Story number without its project prefix (e.g. GF-1024 -> 1024)
    pub fn number(&self) -> &'static str {
        self.id.trim_start_matches(|c: char| !c.is_ascii_digit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_story_number() {
        let story = UserStory {
            id: "GF-1024",
            title: "t",
            description: "d",
            points: 1,
            criteria: &[],
        };
        assert_eq!(story.number(), "1024");
    }
}
