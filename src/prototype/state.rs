//! Approval widget state and its reducer.
//!
//! The widget is a closed state machine over [`WidgetStatus`]. Every action is
//! total: combinations that have no transition return the state unchanged.

use serde::{Deserialize, Serialize};

/// Seven days, the auto-approval window
pub const INITIAL_TIME_LEFT_SECONDS: u64 = 168 * 3600;

/// Milestone approval status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl WidgetStatus {
    pub fn label(&self) -> &'static str {
        match self {
            WidgetStatus::Pending => "pending",
            WidgetStatus::Approved => "approved",
            WidgetStatus::Rejected => "rejected",
        }
    }
}

/// Standardized rejection reason code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    IncompleteWork,
    QualityIssues,
    WrongFiles,
}

impl RejectReason {
    /// Menu order
    pub const ALL: [RejectReason; 3] = [
        RejectReason::IncompleteWork,
        RejectReason::QualityIssues,
        RejectReason::WrongFiles,
    ];

    /// Text shown in the selection menu
    pub fn label(&self) -> &'static str {
        match self {
            RejectReason::IncompleteWork => "Incomplete Work",
            RejectReason::QualityIssues => "Quality Issues",
            RejectReason::WrongFiles => "Wrong Files Attached",
        }
    }

    /// Value recorded against the rejection
    pub fn code(&self) -> &'static str {
        match self {
            RejectReason::IncompleteWork => "Incomplete Work",
            RejectReason::QualityIssues => "Quality Issues",
            RejectReason::WrongFiles => "Wrong Files",
        }
    }

    /// Step through the menu, including the empty "no reason" slot
    pub fn cycle(current: Option<Self>, forward: bool) -> Option<Self> {
        // Slot 0 is the placeholder, 1..=3 the codes
        let slots = Self::ALL.len() + 1;
        let idx = match current {
            None => 0,
            Some(reason) => Self::ALL.iter().position(|r| *r == reason).unwrap_or(0) + 1,
        };
        let next = if forward {
            (idx + 1) % slots
        } else {
            (idx + slots - 1) % slots
        };
        if next == 0 {
            None
        } else {
            Some(Self::ALL[next - 1])
        }
    }
}

/// User action on the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Approve,
    RequestReject,
    CancelReject,
    SelectReason(Option<RejectReason>),
    ConfirmReject,
    ResetFromApproved,
    ResetFromRejected,
}

/// Whether the countdown keeps running while a rejection is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimerPolicy {
    /// Count down regardless of status or the reject form
    #[default]
    Literal,
    /// Count down only while pending with the reject form closed
    PauseOnReject,
}

impl std::str::FromStr for TimerPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "literal" => Ok(TimerPolicy::Literal),
            "pause-on-reject" => Ok(TimerPolicy::PauseOnReject),
            other => Err(format!(
                "unknown timer policy '{}' (expected literal or pause-on-reject)",
                other
            )),
        }
    }
}

/// Session-local widget state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetState {
    pub status: WidgetStatus,
    pub time_left_seconds: u64,
    pub show_reject_form: bool,
    pub reject_reason: Option<RejectReason>,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self {
            status: WidgetStatus::Pending,
            time_left_seconds: INITIAL_TIME_LEFT_SECONDS,
            show_reject_form: false,
            reject_reason: None,
        }
    }
}

impl WidgetState {
    /// Apply an action, returning the next state
    pub fn reduce(&self, action: Action) -> WidgetState {
        match (self.status, action) {
            (WidgetStatus::Pending, Action::Approve) => WidgetState {
                status: WidgetStatus::Approved,
                show_reject_form: false,
                ..self.clone()
            },
            (WidgetStatus::Pending, Action::RequestReject) => WidgetState {
                show_reject_form: true,
                ..self.clone()
            },
            (WidgetStatus::Pending, Action::CancelReject) if self.show_reject_form => {
                WidgetState {
                    show_reject_form: false,
                    ..self.clone()
                }
            }
            (WidgetStatus::Pending, Action::SelectReason(reason)) if self.show_reject_form => {
                WidgetState {
                    reject_reason: reason,
                    ..self.clone()
                }
            }
            (WidgetStatus::Pending, Action::ConfirmReject)
                if self.show_reject_form && self.reject_reason.is_some() =>
            {
                WidgetState {
                    status: WidgetStatus::Rejected,
                    show_reject_form: false,
                    ..self.clone()
                }
            }
            (WidgetStatus::Approved, Action::ResetFromApproved)
            | (WidgetStatus::Rejected, Action::ResetFromRejected) => WidgetState::default(),
            _ => self.clone(),
        }
    }

    /// Advance the simulated clock by one tick, floored at zero
    pub fn tick(&self, policy: TimerPolicy, step_seconds: u64) -> WidgetState {
        if !self.timer_running(policy) {
            return self.clone();
        }
        WidgetState {
            time_left_seconds: self.time_left_seconds.saturating_sub(step_seconds),
            ..self.clone()
        }
    }

    pub fn timer_running(&self, policy: TimerPolicy) -> bool {
        match policy {
            TimerPolicy::Literal => true,
            TimerPolicy::PauseOnReject => {
                self.status == WidgetStatus::Pending && !self.show_reject_form
            }
        }
    }

    /// Confirm control is enabled only with a reason selected
    pub fn can_confirm_reject(&self) -> bool {
        self.status == WidgetStatus::Pending
            && self.show_reject_form
            && self.reject_reason.is_some()
    }

    pub fn is_expired(&self) -> bool {
        self.time_left_seconds == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: &WidgetState, actions: &[Action]) -> WidgetState {
        actions.iter().fold(state.clone(), |s, a| s.reduce(*a))
    }

    fn all_actions() -> Vec<Action> {
        let mut actions = vec![
            Action::Approve,
            Action::RequestReject,
            Action::CancelReject,
            Action::ConfirmReject,
            Action::ResetFromApproved,
            Action::ResetFromRejected,
            Action::SelectReason(None),
        ];
        actions.extend(RejectReason::ALL.iter().map(|r| Action::SelectReason(Some(*r))));
        actions
    }

    #[test]
    fn test_initial_state() {
        let state = WidgetState::default();
        assert_eq!(state.status, WidgetStatus::Pending);
        assert_eq!(state.time_left_seconds, 604_800);
        assert!(!state.show_reject_form);
        assert_eq!(state.reject_reason, None);
    }

    #[test]
    fn test_reject_scenario() {
        let start = WidgetState::default();

        let form_open = start.reduce(Action::RequestReject);
        assert!(form_open.show_reject_form);
        assert_eq!(form_open.status, WidgetStatus::Pending);

        // Confirm without a reason does nothing
        let unchanged = form_open.reduce(Action::ConfirmReject);
        assert_eq!(unchanged, form_open);

        let selected = unchanged.reduce(Action::SelectReason(Some(RejectReason::QualityIssues)));
        let rejected = selected.reduce(Action::ConfirmReject);
        assert_eq!(rejected.status, WidgetStatus::Rejected);
        assert_eq!(rejected.reject_reason, Some(RejectReason::QualityIssues));
        assert_eq!(rejected.reject_reason.map(|r| r.code()), Some("Quality Issues"));
        assert!(!rejected.show_reject_form);
    }

    #[test]
    fn test_approve_then_reset_scenario() {
        let approved = WidgetState::default().reduce(Action::Approve);
        assert_eq!(approved.status, WidgetStatus::Approved);

        let reset = approved.reduce(Action::ResetFromApproved);
        assert_eq!(reset, WidgetState::default());
    }

    #[test]
    fn test_approve_closes_reject_form() {
        let state = apply(
            &WidgetState::default(),
            &[
                Action::RequestReject,
                Action::SelectReason(Some(RejectReason::IncompleteWork)),
                Action::Approve,
            ],
        );
        assert_eq!(state.status, WidgetStatus::Approved);
        assert!(!state.show_reject_form);
    }

    #[test]
    fn test_reset_from_rejected_restores_initial_state() {
        let mut state = apply(
            &WidgetState::default(),
            &[
                Action::RequestReject,
                Action::SelectReason(Some(RejectReason::WrongFiles)),
                Action::ConfirmReject,
            ],
        );
        state = state.tick(TimerPolicy::Literal, 60);
        assert_eq!(state.status, WidgetStatus::Rejected);

        assert_eq!(state.reduce(Action::ResetFromRejected), WidgetState::default());
    }

    #[test]
    fn test_reset_only_from_matching_state() {
        let approved = WidgetState::default().reduce(Action::Approve);
        assert_eq!(approved.reduce(Action::ResetFromRejected), approved);

        let pending = WidgetState::default().tick(TimerPolicy::Literal, 60);
        assert_eq!(pending.reduce(Action::ResetFromApproved), pending);
    }

    #[test]
    fn test_cancel_reject_keeps_selection_and_status() {
        let state = apply(
            &WidgetState::default(),
            &[
                Action::RequestReject,
                Action::SelectReason(Some(RejectReason::QualityIssues)),
                Action::CancelReject,
            ],
        );
        assert_eq!(state.status, WidgetStatus::Pending);
        assert!(!state.show_reject_form);
    }

    #[test]
    fn test_select_reason_ignored_without_form() {
        let state = WidgetState::default()
            .reduce(Action::SelectReason(Some(RejectReason::QualityIssues)));
        assert_eq!(state, WidgetState::default());
    }

    #[test]
    fn test_confirm_after_clearing_reason_is_noop() {
        let state = apply(
            &WidgetState::default(),
            &[
                Action::RequestReject,
                Action::SelectReason(Some(RejectReason::QualityIssues)),
                Action::SelectReason(None),
                Action::ConfirmReject,
            ],
        );
        assert_eq!(state.status, WidgetStatus::Pending);
        assert!(state.show_reject_form);
        assert!(!state.can_confirm_reject());
    }

    #[test]
    fn test_invariants_hold_for_all_short_sequences() {
        let actions = all_actions();
        // Exhaustive over every sequence of length 4
        let mut frontier = vec![WidgetState::default()];
        for _ in 0..4 {
            let mut next = Vec::new();
            for state in &frontier {
                for action in &actions {
                    let s = state.reduce(*action);
                    if s.status == WidgetStatus::Rejected {
                        assert!(s.reject_reason.is_some());
                    }
                    if s.show_reject_form {
                        assert_eq!(s.status, WidgetStatus::Pending);
                    }
                    if *action == Action::Approve && state.status == WidgetStatus::Pending {
                        assert_eq!(s.status, WidgetStatus::Approved);
                        assert!(!s.show_reject_form);
                    }
                    next.push(s);
                }
            }
            next.dedup();
            frontier = next;
        }
    }

    #[test]
    fn test_tick_after_n_ticks() {
        let mut state = WidgetState::default();
        for _ in 0..100 {
            state = state.tick(TimerPolicy::Literal, 60);
        }
        assert_eq!(state.time_left_seconds, 604_800 - 6_000);
    }

    #[test]
    fn test_tick_floors_at_zero_without_transition() {
        let mut state = WidgetState {
            time_left_seconds: 90,
            ..WidgetState::default()
        };
        state = state.tick(TimerPolicy::Literal, 60);
        assert_eq!(state.time_left_seconds, 30);
        state = state.tick(TimerPolicy::Literal, 60);
        assert_eq!(state.time_left_seconds, 0);
        state = state.tick(TimerPolicy::Literal, 60);
        assert_eq!(state.time_left_seconds, 0);
        assert!(state.is_expired());
        assert_eq!(state.status, WidgetStatus::Pending);
    }

    #[test]
    fn test_literal_policy_ticks_with_form_open() {
        let state = WidgetState::default().reduce(Action::RequestReject);
        assert_eq!(
            state.tick(TimerPolicy::Literal, 60).time_left_seconds,
            604_740
        );
    }

    #[test]
    fn test_pause_on_reject_policy() {
        let form_open = WidgetState::default().reduce(Action::RequestReject);
        assert_eq!(form_open.tick(TimerPolicy::PauseOnReject, 60), form_open);

        let approved = WidgetState::default().reduce(Action::Approve);
        assert_eq!(approved.tick(TimerPolicy::PauseOnReject, 60), approved);

        let pending = WidgetState::default();
        assert_eq!(
            pending.tick(TimerPolicy::PauseOnReject, 60).time_left_seconds,
            604_740
        );
    }

    #[test]
    fn test_reject_reason_codes() {
        assert_eq!(RejectReason::WrongFiles.label(), "Wrong Files Attached");
        assert_eq!(RejectReason::WrongFiles.code(), "Wrong Files");
        assert_eq!(RejectReason::IncompleteWork.code(), "Incomplete Work");
    }

    #[test]
    fn test_reject_reason_cycle() {
        assert_eq!(
            RejectReason::cycle(None, true),
            Some(RejectReason::IncompleteWork)
        );
        assert_eq!(RejectReason::cycle(Some(RejectReason::WrongFiles), true), None);
        assert_eq!(
            RejectReason::cycle(None, false),
            Some(RejectReason::WrongFiles)
        );
        assert_eq!(
            RejectReason::cycle(Some(RejectReason::IncompleteWork), false),
            None
        );
    }

    #[test]
    fn test_timer_policy_from_str() {
        assert_eq!("literal".parse::<TimerPolicy>(), Ok(TimerPolicy::Literal));
        assert_eq!(
            "pause-on-reject".parse::<TimerPolicy>(),
            Ok(TimerPolicy::PauseOnReject)
        );
        assert!("sometimes".parse::<TimerPolicy>().is_err());
    }
}
