//! Requirements view: business rules table and user story backlog

use ratatui::{
    prelude::*,
    widgets::{Cell, Paragraph, Row, Table},
};

use super::helpers::{card_block, wrap_text};
use super::stories::render_story_cards;
use crate::content::{total_story_points, BUSINESS_RULES, USER_STORIES};
use crate::models::BusinessRule;
use crate::theme::{AMBER_WARNING, INDIGO_PRIMARY, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY};

const ID_WIDTH: u16 = 7;
const RULE_WIDTH: u16 = 28;

/// Width left for the description column inside a bordered table
fn description_width(table_width: u16) -> usize {
    // borders + two column gaps
    table_width.saturating_sub(2 + ID_WIDTH + RULE_WIDTH + 2) as usize
}

/// Rows needed by the rules table: header, header gap, wrapped rows, borders
pub fn rules_table_height(rules: &[BusinessRule], width: u16) -> u16 {
    let desc_width = description_width(width);
    let body: usize = rules
        .iter()
        .map(|rule| wrap_text(rule.description, desc_width).len())
        .sum();
    (body + 4) as u16
}

pub fn render_rules_table(area: Rect, rules: &[BusinessRule], frame: &mut Frame) {
    let desc_width = description_width(area.width);

    let header = Row::new(vec!["ID", "Rule", "Description"])
        .style(
            Style::default()
                .fg(TEXT_MUTED)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows: Vec<Row> = rules
        .iter()
        .map(|rule| {
            let description = wrap_text(rule.description, desc_width);
            let height = description.len() as u16;
            Row::new(vec![
                Cell::from(rule.id).style(Style::default().fg(INDIGO_PRIMARY)),
                Cell::from(rule.rule).style(
                    Style::default()
                        .fg(TEXT_PRIMARY)
                        .add_modifier(Modifier::BOLD),
                ),
                Cell::from(Text::from(
                    description.into_iter().map(Line::from).collect::<Vec<_>>(),
                ))
                .style(Style::default().fg(TEXT_SECONDARY)),
            ])
            .height(height)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(ID_WIDTH),
            Constraint::Length(RULE_WIDTH),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .column_spacing(1)
    .block(card_block("Business Rules"));

    frame.render_widget(table, area);
}

/// The scroll offset skips whole story cards; the rules table stays pinned
pub fn render_requirements(area: Rect, scroll: u16, frame: &mut Frame) {
    let table_height = rules_table_height(BUSINESS_RULES, area.width);
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(table_height),
            Constraint::Length(1), // Backlog heading
            Constraint::Min(3),    // Story cards
        ])
        .split(area);

    render_rules_table(layout[0], BUSINESS_RULES, frame);

    let heading = Paragraph::new(Line::from(vec![
        Span::styled(
            "User Stories",
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {} story points", total_story_points()),
            Style::default().fg(AMBER_WARNING),
        ),
    ]));
    frame.render_widget(heading, layout[1]);

    let skip = (scroll as usize).min(USER_STORIES.len().saturating_sub(1));
    render_story_cards(layout[2], USER_STORIES, skip, frame);
}
