//! Enums used throughout the case-study presentation
//!
//! This module contains the navigation enum that drives the tab shell.

/// Section of the presentation selected in the tab bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NavigationTab {
    #[default]
    ExecutiveSummary,
    ProcessModelling,
    Requirements,
    DataAnalysis,
    Prototype,
    FullCaseStudy,
}

impl NavigationTab {
    /// All tabs in display order
    pub const ALL: [NavigationTab; 6] = [
        NavigationTab::ExecutiveSummary,
        NavigationTab::ProcessModelling,
        NavigationTab::Requirements,
        NavigationTab::DataAnalysis,
        NavigationTab::Prototype,
        NavigationTab::FullCaseStudy,
    ];

    /// Stable identifier, as used on the command line and in config files
    pub fn id(&self) -> &'static str {
        match self {
            NavigationTab::ExecutiveSummary => "executive-summary",
            NavigationTab::ProcessModelling => "process-modelling",
            NavigationTab::Requirements => "requirements",
            NavigationTab::DataAnalysis => "data-analysis",
            NavigationTab::Prototype => "prototype",
            NavigationTab::FullCaseStudy => "full-case-study",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavigationTab::ExecutiveSummary => "Executive Summary",
            NavigationTab::ProcessModelling => "Process Modelling",
            NavigationTab::Requirements => "Requirements",
            NavigationTab::DataAnalysis => "Data Analysis",
            NavigationTab::Prototype => "Prototype",
            NavigationTab::FullCaseStudy => "Full Case Study",
        }
    }

    /// Resolve an identifier; unknown ids have no tab
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|tab| tab.id() == id)
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|tab| tab == self).unwrap_or(0)
    }

    /// Tab bound to a digit key ('1'..='6')
    pub fn from_shortcut(c: char) -> Option<Self> {
        let digit = c.to_digit(10)? as usize;
        if digit == 0 {
            return None;
        }
        Self::ALL.get(digit - 1).copied()
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Whether this section hosts the approval widget
    pub fn mounts_prototype(&self) -> bool {
        matches!(self, NavigationTab::Prototype)
    }

    /// Whether this section shows the process diagrams
    pub fn shows_diagrams(&self) -> bool {
        matches!(
            self,
            NavigationTab::ProcessModelling | NavigationTab::FullCaseStudy
        )
    }
}

impl std::fmt::Display for NavigationTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for NavigationTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| {
            let known: Vec<&str> = Self::ALL.iter().map(|t| t.id()).collect();
            format!("unknown tab '{}' (expected one of: {})", s, known.join(", "))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_tab_default() {
        assert_eq!(NavigationTab::default(), NavigationTab::ExecutiveSummary);
    }

    #[test]
    fn test_from_id_round_trips_every_tab() {
        for tab in NavigationTab::ALL {
            assert_eq!(NavigationTab::from_id(tab.id()), Some(tab));
        }
    }

    #[test]
    fn test_from_id_unknown() {
        assert_eq!(NavigationTab::from_id("roadmap"), None);
        assert_eq!(NavigationTab::from_id(""), None);
    }

    #[test]
    fn test_from_str_error_lists_known_ids() {
        let err = "nope".parse::<NavigationTab>().unwrap_err();
        assert!(err.contains("data-analysis"));
    }

    #[test]
    fn test_next_and_previous_wrap() {
        assert_eq!(
            NavigationTab::FullCaseStudy.next(),
            NavigationTab::ExecutiveSummary
        );
        assert_eq!(
            NavigationTab::ExecutiveSummary.previous(),
            NavigationTab::FullCaseStudy
        );
        assert_eq!(
            NavigationTab::Requirements.next(),
            NavigationTab::DataAnalysis
        );
    }

    #[test]
    fn test_from_shortcut() {
        assert_eq!(
            NavigationTab::from_shortcut('1'),
            Some(NavigationTab::ExecutiveSummary)
        );
        assert_eq!(
            NavigationTab::from_shortcut('5'),
            Some(NavigationTab::Prototype)
        );
        assert_eq!(NavigationTab::from_shortcut('0'), None);
        assert_eq!(NavigationTab::from_shortcut('7'), None);
        assert_eq!(NavigationTab::from_shortcut('a'), None);
    }

    #[test]
    fn test_only_prototype_mounts_widget() {
        let mounting: Vec<_> = NavigationTab::ALL
            .iter()
            .filter(|t| t.mounts_prototype())
            .collect();
        assert_eq!(mounting, vec![&NavigationTab::Prototype]);
    }
}
