//! Prototype view: the mock milestone approval card

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::content::{DEMO_MILESTONE, PRODUCT_NAME, PROTOTYPE_INTRO};
use crate::models::MilestoneDetails;
use crate::prototype::{PrototypeSession, RejectReason, TimerPolicy, WidgetState, WidgetStatus};
use crate::theme::{
    AMBER_WARNING, BG_SECONDARY, BG_TERTIARY, BLUE_INFO, BORDER_SUBTLE, GREEN_SUCCESS,
    INDIGO_PRIMARY, RED_ERROR, ROUNDED_BORDERS, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::utils::format_time_left;

const CARD_WIDTH: u16 = 60;

/// Placeholder shown in the reason menu when nothing is selected
pub const REASON_PLACEHOLDER: &str = "Select a reason code...";

fn key_hint(key: &'static str, label: &'static str, enabled: bool) -> Vec<Span<'static>> {
    let (key_style, label_style) = if enabled {
        (
            Style::default()
                .fg(INDIGO_PRIMARY)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(TEXT_PRIMARY),
        )
    } else {
        (
            Style::default().fg(TEXT_MUTED).add_modifier(Modifier::DIM),
            Style::default().fg(TEXT_MUTED).add_modifier(Modifier::DIM),
        )
    };
    vec![
        Span::styled(format!("[{}] ", key), key_style),
        Span::styled(label, label_style),
    ]
}

fn reason_option(label: &'static str, selected: bool) -> Line<'static> {
    if selected {
        Line::from(vec![
            Span::styled("▸ ", Style::default().fg(INDIGO_PRIMARY)),
            Span::styled(
                label,
                Style::default()
                    .fg(TEXT_PRIMARY)
                    .bg(BG_TERTIARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(label, Style::default().fg(TEXT_SECONDARY)),
        ])
    }
}

fn milestone_lines(milestone: &MilestoneDetails) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            milestone.title,
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Submitted by: {}", milestone.submitted_by),
            Style::default().fg(TEXT_SECONDARY),
        )),
        Line::from(vec![
            Span::styled(
                milestone.amount,
                Style::default()
                    .fg(TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ESCROW", Style::default().fg(TEXT_MUTED)),
        ])
        .right_aligned(),
        Line::default(),
    ]
}

/// Body of the approval card for a given widget state
pub fn widget_lines(
    state: &WidgetState,
    policy: TimerPolicy,
    milestone: &MilestoneDetails,
) -> Vec<Line<'static>> {
    let mut lines = milestone_lines(milestone);

    match state.status {
        WidgetStatus::Pending => {
            let mut timer_title = vec![Span::styled(
                "AUTO-APPROVAL TIMER",
                Style::default().fg(BLUE_INFO).add_modifier(Modifier::BOLD),
            )];
            if !state.timer_running(policy) {
                timer_title.push(Span::styled(
                    "  paused",
                    Style::default().fg(AMBER_WARNING),
                ));
            }
            lines.push(Line::from(timer_title));
            lines.push(Line::from(Span::styled(
                format!("{} remaining", format_time_left(state.time_left_seconds)),
                Style::default().fg(TEXT_PRIMARY),
            )));
            lines.push(Line::default());

            if state.show_reject_form {
                lines.push(Line::from(vec![
                    Span::styled(
                        "Reason for Rejection ",
                        Style::default()
                            .fg(TEXT_PRIMARY)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled("*", Style::default().fg(RED_ERROR)),
                ]));
                lines.push(reason_option(
                    REASON_PLACEHOLDER,
                    state.reject_reason.is_none(),
                ));
                for reason in RejectReason::ALL {
                    lines.push(reason_option(
                        reason.label(),
                        state.reject_reason == Some(reason),
                    ));
                }
                lines.push(Line::default());

                let mut buttons = key_hint("Esc", "Cancel", true);
                buttons.push(Span::raw("    "));
                buttons.extend(key_hint("Enter", "Confirm Reject", state.can_confirm_reject()));
                lines.push(Line::from(buttons));
            } else {
                let mut buttons = key_hint("r", "Reject", true);
                buttons.push(Span::raw("    "));
                buttons.extend(key_hint("a", "Approve & Release", true));
                lines.push(Line::from(buttons));
            }
        }
        WidgetStatus::Approved => {
            lines.push(
                Line::from(Span::styled("✓", Style::default().fg(GREEN_SUCCESS))).centered(),
            );
            lines.push(
                Line::from(Span::styled(
                    "Funds Released!",
                    Style::default()
                        .fg(GREEN_SUCCESS)
                        .add_modifier(Modifier::BOLD),
                ))
                .centered(),
            );
            lines.push(
                Line::from(Span::styled(
                    format!("Transaction ID: {}", milestone.transaction_id),
                    Style::default().fg(TEXT_SECONDARY),
                ))
                .centered(),
            );
            lines.push(Line::default());
            lines.push(Line::from(key_hint("x", "Reset Prototype", true)).centered());
        }
        WidgetStatus::Rejected => {
            let reason = state.reject_reason.map(|r| r.code()).unwrap_or_default();
            lines.push(Line::from(Span::styled("✗", Style::default().fg(RED_ERROR))).centered());
            lines.push(
                Line::from(Span::styled(
                    "Milestone Rejected",
                    Style::default().fg(RED_ERROR).add_modifier(Modifier::BOLD),
                ))
                .centered(),
            );
            lines.push(
                Line::from(Span::styled(
                    format!("Reason: {}", reason),
                    Style::default().fg(TEXT_SECONDARY),
                ))
                .centered(),
            );
            lines.push(Line::default());
            lines.push(Line::from(key_hint("x", "Reset Prototype", true)).centered());
        }
    }

    lines
}

pub fn render_widget_card(
    area: Rect,
    state: &WidgetState,
    policy: TimerPolicy,
    frame: &mut Frame,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY))
        .title(
            Line::from(Span::styled(
                format!(" ■ {} Milestone ", PRODUCT_NAME),
                Style::default()
                    .fg(TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ))
            .left_aligned(),
        )
        .title(
            Line::from(Span::styled(
                format!(" ID: {} ", DEMO_MILESTONE.id),
                Style::default().fg(TEXT_MUTED),
            ))
            .right_aligned(),
        );

    let paragraph = Paragraph::new(widget_lines(state, policy, &DEMO_MILESTONE))
        .block(block.padding(Padding::horizontal(1)));
    frame.render_widget(paragraph, area);
}

pub fn render_prototype(area: Rect, session: &PrototypeSession, frame: &mut Frame) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Intro
            Constraint::Min(10),   // Card
        ])
        .split(area);

    let intro = Paragraph::new(Span::styled(
        PROTOTYPE_INTRO,
        Style::default()
            .fg(TEXT_SECONDARY)
            .add_modifier(Modifier::ITALIC),
    ))
    .wrap(Wrap { trim: true });
    frame.render_widget(intro, layout[0]);

    let width = CARD_WIDTH.min(layout[1].width);
    let card_area = Rect {
        x: layout[1].x + (layout[1].width - width) / 2,
        y: layout[1].y,
        width,
        height: layout[1].height.min(20),
    };
    render_widget_card(card_area, session.current_state(), session.config().policy, frame);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prototype::{Action, TimerConfig};
    use crate::ui::helpers::buffer_lines;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(state: &WidgetState, policy: TimerPolicy) -> String {
        let backend = TestBackend::new(70, 22);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render_widget_card(f.area(), state, policy, f))
            .unwrap();
        buffer_lines(terminal.backend().buffer()).join("\n")
    }

    fn after(actions: &[Action]) -> WidgetState {
        actions
            .iter()
            .fold(WidgetState::default(), |state, action| state.reduce(*action))
    }

    #[test]
    fn test_pending_card_shows_countdown_and_actions() {
        let text = draw(&WidgetState::default(), TimerPolicy::Literal);
        assert!(text.contains("GigFlow Milestone"));
        assert!(text.contains("ID: #8821"));
        assert!(text.contains("Website Redesign Phase 1"));
        assert!(text.contains("Submitted by: Alex Dev"));
        assert!(text.contains("$1,500.00"));
        assert!(text.contains("7d 0h 0m remaining"));
        assert!(text.contains("Approve & Release"));
        assert!(!text.contains("paused"));
    }

    #[test]
    fn test_reject_form_lists_reason_labels() {
        let state = after(&[Action::RequestReject]);
        let text = draw(&state, TimerPolicy::Literal);
        assert!(text.contains("Reason for Rejection"));
        assert!(text.contains(REASON_PLACEHOLDER));
        assert!(text.contains("Wrong Files Attached"));
        assert!(text.contains("Confirm Reject"));
    }

    #[test]
    fn test_confirm_is_dimmed_until_reason_selected() {
        let lines = widget_lines(
            &after(&[Action::RequestReject]),
            TimerPolicy::Literal,
            &DEMO_MILESTONE,
        );
        let confirm = lines
            .iter()
            .flat_map(|line| line.spans.iter())
            .find(|span| span.content == "Confirm Reject")
            .unwrap();
        assert!(confirm.style.add_modifier.contains(Modifier::DIM));

        let lines = widget_lines(
            &after(&[
                Action::RequestReject,
                Action::SelectReason(Some(RejectReason::QualityIssues)),
            ]),
            TimerPolicy::Literal,
            &DEMO_MILESTONE,
        );
        let confirm = lines
            .iter()
            .flat_map(|line| line.spans.iter())
            .find(|span| span.content == "Confirm Reject")
            .unwrap();
        assert!(!confirm.style.add_modifier.contains(Modifier::DIM));
    }

    #[test]
    fn test_paused_marker_under_pause_policy() {
        let state = after(&[Action::RequestReject]);
        assert!(draw(&state, TimerPolicy::PauseOnReject).contains("paused"));
        assert!(!draw(&state, TimerPolicy::Literal).contains("paused"));
    }

    #[test]
    fn test_approved_card() {
        let text = draw(&after(&[Action::Approve]), TimerPolicy::Literal);
        assert!(text.contains("Funds Released!"));
        assert!(text.contains("Transaction ID: tx_992831"));
        assert!(text.contains("Reset Prototype"));
        assert!(!text.contains("remaining"));
    }

    #[test]
    fn test_rejected_card_shows_stored_code() {
        let state = after(&[
            Action::RequestReject,
            Action::SelectReason(Some(RejectReason::WrongFiles)),
            Action::ConfirmReject,
        ]);
        let text = draw(&state, TimerPolicy::Literal);
        assert!(text.contains("Milestone Rejected"));
        assert!(text.contains("Reason: Wrong Files"));
        assert!(!text.contains("Wrong Files Attached"));
    }

    #[test]
    fn test_render_prototype_uses_session_state() {
        let mut session = PrototypeSession::detached(1, TimerConfig::default());
        session.tick();

        let backend = TestBackend::new(80, 26);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render_prototype(f.area(), &session, f))
            .unwrap();

        let text = buffer_lines(terminal.backend().buffer()).join("\n");
        assert!(text.contains("6d 23h 59m remaining"));
        assert!(text.contains("60x speed"));
    }
}
