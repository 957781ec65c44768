//! Stat card rendering functions

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::models::Kpi;
use crate::theme::{BG_SECONDARY, BORDER_SUBTLE, INDIGO_PRIMARY, ROUNDED_BORDERS, TEXT_MUTED};

/// Render a row of equally sized headline cards
pub fn render_kpi_cards(area: Rect, kpis: &[Kpi], frame: &mut Frame) {
    if kpis.is_empty() {
        return;
    }

    let constraints: Vec<Constraint> = kpis
        .iter()
        .map(|_| Constraint::Ratio(1, kpis.len() as u32))
        .collect();
    let card_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (kpi, card_area) in kpis.iter().zip(card_layout.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(ROUNDED_BORDERS)
            .border_style(Style::default().fg(BORDER_SUBTLE))
            .style(Style::default().bg(BG_SECONDARY));

        let content = vec![
            Line::from(Span::styled(
                kpi.value,
                Style::default()
                    .fg(INDIGO_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(kpi.label, Style::default().fg(TEXT_MUTED))),
        ];

        let paragraph = Paragraph::new(content)
            .block(block)
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, *card_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SUMMARY_KPIS;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_kpi_cards_render_values_and_labels() {
        let backend = TestBackend::new(90, 4);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| render_kpi_cards(f.area(), SUMMARY_KPIS, f))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let content: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("86%"));
        assert!(content.contains("FEWER TICKETS"));
        assert!(content.contains("7 DAYS"));
    }

    #[test]
    fn test_no_kpis_renders_nothing() {
        let backend = TestBackend::new(20, 4);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal.draw(|f| render_kpi_cards(f.area(), &[], f)).unwrap();

        let buffer = terminal.backend().buffer();
        assert!(buffer.content().iter().all(|c| c.symbol() == " "));
    }
}
