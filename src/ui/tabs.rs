//! Tab bar rendering

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Tabs},
};

use crate::models::NavigationTab;
use crate::theme::{BG_PRIMARY, BORDER_SUBTLE, INDIGO_PRIMARY, ROUNDED_BORDERS, TEXT_SECONDARY};

/// Title shown for a tab, prefixed with its digit shortcut
pub fn tab_title(tab: NavigationTab) -> String {
    format!("{} {}", tab.index() + 1, tab.label())
}

pub fn render_tab_bar(area: Rect, active: NavigationTab, frame: &mut Frame) {
    let titles: Vec<Line> = NavigationTab::ALL
        .iter()
        .map(|tab| Line::from(tab_title(*tab)))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_set(ROUNDED_BORDERS)
                .border_style(Style::default().fg(BORDER_SUBTLE)),
        )
        .style(Style::default().fg(TEXT_SECONDARY).bg(BG_PRIMARY))
        .highlight_style(
            Style::default()
                .fg(INDIGO_PRIMARY)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .select(active.index())
        .divider("│");

    frame.render_widget(tabs, area);
}
