//! Data analysis view: resolution-time bars, ticket-volume trend and the source query

use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{
        Axis, Bar, BarChart, BarGroup, Chart, Dataset, GraphType, LegendPosition, Paragraph,
    },
};

use super::helpers::card_block;
use crate::content::{ticket_reduction_percent, DISPUTE_TIME_DATA, SQL_QUERY, TICKET_VOLUME_DATA};
use crate::models::{DisputeTimeDatum, TicketVolumeDatum};
use crate::theme::{GREEN_SUCCESS, INDIGO_PRIMARY, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY};

/// Points of the ticket-volume series, x = month index
pub fn ticket_volume_points(data: &[TicketVolumeDatum]) -> Vec<(f64, f64)> {
    data.iter()
        .enumerate()
        .map(|(i, datum)| (i as f64, datum.tickets as f64))
        .collect()
}

/// Upper y bound rounded up to the next hundred
fn y_bound(data: &[TicketVolumeDatum]) -> f64 {
    let max = data.iter().map(|d| d.tickets).max().unwrap_or(0);
    (max.div_ceil(100).max(1) * 100) as f64
}

pub fn render_dispute_time_chart(area: Rect, data: &[DisputeTimeDatum], frame: &mut Frame) {
    let bars: Vec<Bar> = data
        .iter()
        .map(|datum| {
            let color = datum.fill;
            Bar::default()
                .value(datum.days)
                .text_value(format!("{}d", datum.days))
                .label(Line::from(datum.name))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(TEXT_PRIMARY)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(card_block("Avg. Dispute Resolution Time (Days)"))
        .data(BarGroup::default().bars(&bars))
        .bar_width(18)
        .bar_gap(4)
        .label_style(Style::default().fg(TEXT_SECONDARY));

    frame.render_widget(chart, area);
}

pub fn render_ticket_volume_chart(area: Rect, data: &[TicketVolumeDatum], frame: &mut Frame) {
    let points = ticket_volume_points(data);
    let y_max = y_bound(data);
    let x_max = data.len().saturating_sub(1).max(1) as f64;

    let dataset = Dataset::default()
        .name("Tickets")
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(INDIGO_PRIMARY))
        .data(&points);

    let x_labels: Vec<Span> = data
        .iter()
        .map(|d| Span::styled(d.month, Style::default().fg(TEXT_MUTED)))
        .collect();
    let y_labels = vec![
        Span::styled("0", Style::default().fg(TEXT_MUTED)),
        Span::styled(format!("{}", y_max / 2.0), Style::default().fg(TEXT_MUTED)),
        Span::styled(format!("{}", y_max), Style::default().fg(TEXT_MUTED)),
    ];

    let chart = Chart::new(vec![dataset])
        .block(card_block("Monthly Dispute Ticket Volume"))
        .x_axis(
            Axis::default()
                .bounds([0.0, x_max])
                .labels(x_labels)
                .style(Style::default().fg(TEXT_MUTED)),
        )
        .y_axis(
            Axis::default()
                .bounds([0.0, y_max])
                .labels(y_labels)
                .style(Style::default().fg(TEXT_MUTED)),
        )
        .legend_position(Some(LegendPosition::TopRight))
        .hidden_legend_constraints((Constraint::Ratio(1, 1), Constraint::Ratio(1, 1)));

    frame.render_widget(chart, area);
}

pub fn render_sql(area: Rect, frame: &mut Frame) {
    let lines: Vec<Line> = SQL_QUERY
        .trim()
        .lines()
        .map(|line| Line::from(Span::styled(line, Style::default().fg(GREEN_SUCCESS))))
        .collect();

    let paragraph = Paragraph::new(lines).block(card_block("Source Query"));
    frame.render_widget(paragraph, area);
}

pub fn render_analysis(area: Rect, frame: &mut Frame) {
    let sql_height = SQL_QUERY.trim().lines().count() as u16 + 2;
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),            // Charts
            Constraint::Length(1),          // Headline
            Constraint::Length(sql_height), // Query
        ])
        .split(area);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(layout[0]);

    render_dispute_time_chart(charts[0], DISPUTE_TIME_DATA, frame);
    render_ticket_volume_chart(charts[1], TICKET_VOLUME_DATA, frame);

    let headline = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {}% ", ticket_reduction_percent()),
            Style::default()
                .fg(GREEN_SUCCESS)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "reduction in monthly tickets over the pilot",
            Style::default().fg(TEXT_SECONDARY),
        ),
    ]));
    frame.render_widget(headline, layout[1]);

    render_sql(layout[2], frame);
}
