//! Process modelling view and diagram pane rendering

use ratatui::{prelude::*, widgets::Paragraph};

use super::helpers::card_block;
use crate::content::{DIAGRAM_CURRENT_STATE_ID, DIAGRAM_FUTURE_STATE_ID};
use crate::diagram::{DiagramLine, DiagramRenderer, PaneOutput, SegmentKind, RENDER_ERROR_TEXT};
use crate::theme::{
    AMBER_WARNING, BLUE_INFO, GREEN_SUCCESS, INDIGO_PRIMARY, RED_ERROR, TEXT_MUTED, TEXT_PRIMARY,
    TEXT_SECONDARY,
};

pub const CURRENT_STATE_TITLE: &str = "Current State: Manual Dispute Handling";
pub const FUTURE_STATE_TITLE: &str = "Future State: Auto-Approval Workflow";

fn segment_style(kind: SegmentKind) -> Style {
    match kind {
        SegmentKind::Node => Style::default()
            .fg(TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
        SegmentKind::Participant => Style::default()
            .fg(INDIGO_PRIMARY)
            .add_modifier(Modifier::BOLD),
        SegmentKind::Connector => Style::default().fg(TEXT_MUTED),
        SegmentKind::EdgeLabel => Style::default().fg(AMBER_WARNING),
        SegmentKind::Message => Style::default().fg(TEXT_PRIMARY),
        SegmentKind::Block => Style::default().fg(BLUE_INFO),
        SegmentKind::Note => Style::default().fg(GREEN_SUCCESS),
        SegmentKind::Text => Style::default().fg(TEXT_SECONDARY),
    }
}

/// Style a rendered diagram line; `style` directives override the palette
pub fn diagram_line(line: &DiagramLine) -> Line<'static> {
    let mut spans = Vec::with_capacity(line.segments.len() + 1);
    if line.indent > 0 {
        spans.push(Span::raw(" ".repeat(line.indent * 2)));
    }
    for segment in &line.segments {
        let mut style = segment_style(segment.kind);
        if let Some((r, g, b)) = segment.stroke {
            style = style.fg(Color::Rgb(r, g, b));
        }
        spans.push(Span::styled(segment.text.clone(), style));
    }
    Line::from(spans)
}

/// Lines a diagram container shows for its current output
pub fn pane_lines(output: &PaneOutput) -> Vec<Line<'static>> {
    match output {
        PaneOutput::Empty => Vec::new(),
        PaneOutput::Rendering => vec![Line::from(Span::styled(
            "Rendering…",
            Style::default()
                .fg(TEXT_MUTED)
                .add_modifier(Modifier::ITALIC),
        ))],
        PaneOutput::Rendered(diagram) => diagram.lines.iter().map(diagram_line).collect(),
        PaneOutput::Failed => vec![Line::from(Span::styled(
            RENDER_ERROR_TEXT,
            Style::default().fg(RED_ERROR),
        ))],
    }
}

pub fn render_diagram_pane(
    area: Rect,
    title: &str,
    output: &PaneOutput,
    scroll: u16,
    frame: &mut Frame,
) {
    let paragraph = Paragraph::new(pane_lines(output))
        .block(card_block(title))
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

pub fn render_process(area: Rect, diagrams: &DiagramRenderer, scroll: u16, frame: &mut Frame) {
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_diagram_pane(
        panes[0],
        CURRENT_STATE_TITLE,
        diagrams.output(DIAGRAM_CURRENT_STATE_ID),
        scroll,
        frame,
    );
    render_diagram_pane(
        panes[1],
        FUTURE_STATE_TITLE,
        diagrams.output(DIAGRAM_FUTURE_STATE_ID),
        scroll,
        frame,
    );
}
