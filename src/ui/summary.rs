//! Executive summary view

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use super::helpers::card_block;
use super::stats::render_kpi_cards;
use crate::content::{CASE_STUDY_TITLE, SUMMARY_KPIS, SUMMARY_SECTIONS};
use crate::models::Section;
use crate::theme::{INDIGO_PRIMARY, TEXT_PRIMARY, TEXT_SECONDARY};

/// Heading followed by body, one blank line between sections
pub fn section_lines(sections: &[Section]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            section.heading,
            Style::default()
                .fg(INDIGO_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            section.body,
            Style::default().fg(TEXT_SECONDARY),
        )));
    }
    lines
}

pub fn render_summary(area: Rect, scroll: u16, frame: &mut Frame) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(4), // KPI cards
            Constraint::Min(3),    // Narrative
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        CASE_STUDY_TITLE,
        Style::default()
            .fg(TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, layout[0]);

    render_kpi_cards(layout[1], SUMMARY_KPIS, frame);

    let narrative = Paragraph::new(section_lines(SUMMARY_SECTIONS))
        .block(card_block("Overview"))
        .wrap(Wrap { trim: true })
        .scroll((scroll, 0));
    frame.render_widget(narrative, layout[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::helpers::buffer_lines;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_section_lines_separate_sections() {
        let lines = section_lines(SUMMARY_SECTIONS);
        // heading + body per section, blank between
        assert_eq!(lines.len(), SUMMARY_SECTIONS.len() * 3 - 1);
        assert_eq!(lines[0].spans[0].content, "Problem");
    }

    #[test]
    fn test_summary_renders_kpis_and_sections() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal.draw(|f| render_summary(f.area(), 0, f)).unwrap();

        let text = buffer_lines(terminal.backend().buffer()).join("\n");
        assert!(text.contains(CASE_STUDY_TITLE));
        assert!(text.contains("FASTER RESOLUTION"));
        assert!(text.contains("Problem"));
        assert!(text.contains("Impact"));
    }

    #[test]
    fn test_summary_scroll_hides_top_of_narrative() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal.draw(|f| render_summary(f.area(), 1, f)).unwrap();

        let text = buffer_lines(terminal.backend().buffer()).join("\n");
        assert!(!text.contains("Problem"));
    }
}
