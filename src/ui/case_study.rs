//! Full case study: the whole write-up as one scrollable document

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use super::helpers::card_block;
use super::process::{pane_lines, CURRENT_STATE_TITLE, FUTURE_STATE_TITLE};
use super::summary::section_lines;
use crate::content::{
    ticket_reduction_percent, total_story_points, BUSINESS_RULES, CASE_STUDY_SECTIONS,
    CASE_STUDY_TITLE, DIAGRAM_CURRENT_STATE_ID, DIAGRAM_FUTURE_STATE_ID, DISPUTE_TIME_DATA,
    SUMMARY_KPIS, USER_STORIES,
};
use crate::diagram::DiagramRenderer;
use crate::theme::{AMBER_WARNING, INDIGO_PRIMARY, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY};

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(INDIGO_PRIMARY)
            .add_modifier(Modifier::BOLD),
    ))
}

fn bullet(text: String) -> Line<'static> {
    Line::from(vec![
        Span::styled("• ", Style::default().fg(TEXT_MUTED)),
        Span::styled(text, Style::default().fg(TEXT_SECONDARY)),
    ])
}

/// Every line of the document, diagrams included
pub fn document_lines(diagrams: &DiagramRenderer) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            CASE_STUDY_TITLE,
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    let kpis: Vec<String> = SUMMARY_KPIS
        .iter()
        .map(|kpi| format!("{} {}", kpi.value, kpi.label.to_lowercase()))
        .collect();
    lines.push(Line::from(Span::styled(
        kpis.join("  ·  "),
        Style::default().fg(AMBER_WARNING),
    )));
    lines.push(Line::default());

    lines.extend(section_lines(CASE_STUDY_SECTIONS));
    lines.push(Line::default());

    lines.push(heading(CURRENT_STATE_TITLE));
    lines.extend(pane_lines(diagrams.output(DIAGRAM_CURRENT_STATE_ID)));
    lines.push(Line::default());

    lines.push(heading(FUTURE_STATE_TITLE));
    lines.extend(pane_lines(diagrams.output(DIAGRAM_FUTURE_STATE_ID)));
    lines.push(Line::default());

    lines.push(heading("Business Rules"));
    for rule in BUSINESS_RULES {
        lines.push(bullet(format!(
            "{} {}: {}",
            rule.id, rule.rule, rule.description
        )));
    }
    lines.push(Line::default());

    lines.push(heading("Backlog"));
    for story in USER_STORIES {
        lines.push(bullet(format!(
            "{} {} ({} pts)",
            story.id, story.title, story.points
        )));
    }
    lines.push(bullet(format!("Total: {} story points", total_story_points())));
    lines.push(Line::default());

    lines.push(heading("Results"));
    for datum in DISPUTE_TIME_DATA {
        lines.push(bullet(format!(
            "{}: {} days to resolve",
            datum.name, datum.days
        )));
    }
    lines.push(bullet(format!(
        "Monthly dispute tickets down {}% across the pilot",
        ticket_reduction_percent()
    )));

    lines
}

pub fn render_case_study(area: Rect, diagrams: &DiagramRenderer, scroll: u16, frame: &mut Frame) {
    let paragraph = Paragraph::new(document_lines(diagrams))
        .block(card_block("Full Case Study"))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}
