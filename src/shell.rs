//! Tab navigation shell.

use crate::models::NavigationTab;

/// Holds the active section; owned by the root `App`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Shell {
    active: NavigationTab,
}

impl Shell {
    pub fn new(active: NavigationTab) -> Self {
        Self { active }
    }

    pub fn active(&self) -> NavigationTab {
        self.active
    }

    /// Replace the active tab unconditionally
    pub fn select(&mut self, tab: NavigationTab) {
        self.active = tab;
    }

    pub fn next(&mut self) {
        self.active = self.active.next();
    }

    pub fn previous(&mut self) {
        self.active = self.active.previous();
    }
}
