//! UI module for the case-study presentation
//!
//! This module contains the frame layout (header, tab bar, section, key
//! hints) and one view per navigation tab.

mod analysis;
mod case_study;
mod helpers;
mod process;
mod prototype;
mod requirements;
mod stats;
mod stories;
mod summary;
mod tabs;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::App;
use crate::content::{CASE_STUDY_TITLE, PRODUCT_NAME};
use crate::models::NavigationTab;
use crate::prototype::{WidgetState, WidgetStatus};
use crate::theme::{BG_PRIMARY, INDIGO_PRIMARY, TEXT_MUTED, TEXT_PRIMARY};

/// Draw the whole screen for the current app state
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(BG_PRIMARY)), area);

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Tab bar
            Constraint::Min(3),    // Section content
            Constraint::Length(1), // Bottom bar (single line)
        ])
        .split(area);

    render_header(main_layout[0], frame);
    tabs::render_tab_bar(main_layout[1], app.active_tab(), frame);
    render_section(main_layout[2], app, frame);

    let widget_state = app.prototype.as_ref().map(|session| session.current_state());
    render_key_hints(main_layout[3], app.active_tab(), widget_state, frame);
}

fn render_header(area: Rect, frame: &mut Frame) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} ", PRODUCT_NAME),
            Style::default()
                .fg(BG_PRIMARY)
                .bg(INDIGO_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", CASE_STUDY_TITLE),
            Style::default().fg(TEXT_PRIMARY),
        ),
    ]));
    frame.render_widget(header, area);
}

/// Dispatch to the view of the active tab
pub fn render_section(area: Rect, app: &App, frame: &mut Frame) {
    let scroll = app.scroll_offset();
    match app.active_tab() {
        NavigationTab::ExecutiveSummary => summary::render_summary(area, scroll, frame),
        NavigationTab::ProcessModelling => {
            process::render_process(area, &app.diagrams, scroll, frame)
        }
        NavigationTab::Requirements => requirements::render_requirements(area, scroll, frame),
        NavigationTab::DataAnalysis => analysis::render_analysis(area, frame),
        NavigationTab::Prototype => {
            if let Some(session) = app.prototype.as_ref() {
                prototype::render_prototype(area, session, frame);
            }
        }
        NavigationTab::FullCaseStudy => {
            case_study::render_case_study(area, &app.diagrams, scroll, frame)
        }
    }
}

/// Key hints for the bottom bar
pub fn key_hints(tab: NavigationTab, widget: Option<&WidgetState>) -> String {
    let navigation = "1-6/Tab: Section | q: Quit";
    let section = match (tab, widget) {
        (NavigationTab::Prototype, Some(state)) => match state.status {
            WidgetStatus::Pending if state.show_reject_form => {
                "↑↓: Reason | Enter: Confirm | Esc: Cancel"
            }
            WidgetStatus::Pending => "a: Approve | r: Reject",
            WidgetStatus::Approved | WidgetStatus::Rejected => "x: Reset",
        },
        (NavigationTab::DataAnalysis, _) | (NavigationTab::Prototype, None) => "",
        _ => "↑↓/PgUp/PgDn: Scroll | Home: Top",
    };
    if section.is_empty() {
        format!(" {} ", navigation)
    } else {
        format!(" {} | {} ", section, navigation)
    }
}

fn render_key_hints(
    area: Rect,
    tab: NavigationTab,
    widget: Option<&WidgetState>,
    frame: &mut Frame,
) {
    let keybindings = Paragraph::new(key_hints(tab, widget))
        .style(Style::default().fg(BG_PRIMARY).bg(TEXT_MUTED));
    frame.render_widget(keybindings, area);
}
