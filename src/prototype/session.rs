//! A mounted approval widget: state, timer and key bindings.

use crossterm::event::KeyCode;
use tokio::sync::mpsc::UnboundedSender;

use super::state::{Action, RejectReason, WidgetState, WidgetStatus};
use super::timer::{TimerConfig, TimerHandle};
use crate::event::AppEvent;

/// Approval widget instance owned by the app while its tab is shown
#[derive(Debug)]
pub struct PrototypeSession {
    id: u64,
    state: WidgetState,
    config: TimerConfig,
    expiry_logged: bool,
    // Aborts the countdown task when the session is dropped
    _timer: Option<TimerHandle>,
}

impl PrototypeSession {
    /// Mount a fresh widget and start its countdown
    pub fn mount(id: u64, config: TimerConfig, tx: UnboundedSender<AppEvent>) -> Self {
        tracing::debug!("Mounting prototype session {}", id);
        let timer = TimerHandle::spawn(id, config.interval, tx);
        Self {
            id,
            state: WidgetState::default(),
            config,
            expiry_logged: false,
            _timer: Some(timer),
        }
    }

    /// Widget without a scheduled countdown; ticks must be driven by hand
    #[cfg(test)]
    pub fn detached(id: u64, config: TimerConfig) -> Self {
        Self {
            id,
            state: WidgetState::default(),
            config,
            expiry_logged: false,
            _timer: None,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn current_state(&self) -> &WidgetState {
        &self.state
    }

    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    pub fn dispatch(&mut self, action: Action) -> &WidgetState {
        let next = self.state.reduce(action);
        if next.status != self.state.status {
            tracing::info!(
                "Milestone {} -> {} (reason: {})",
                self.state.status.label(),
                next.status.label(),
                next.reject_reason.map(|r| r.code()).unwrap_or("-")
            );
        }
        if next.status == WidgetStatus::Pending && self.state.status != WidgetStatus::Pending {
            self.expiry_logged = false;
        }
        self.state = next;
        &self.state
    }

    pub fn tick(&mut self) -> &WidgetState {
        self.state = self.state.tick(self.config.policy, self.config.seconds_per_tick);
        if self.state.is_expired() && !self.expiry_logged {
            // Expiry has no automatic transition
            tracing::debug!(
                "Auto-approval timer reached zero in session {} (status: {})",
                self.id,
                self.state.status.label()
            );
            self.expiry_logged = true;
        }
        &self.state
    }

    /// Map a key press to a widget action for the current state
    pub fn action_for_key(&self, code: KeyCode) -> Option<Action> {
        let state = &self.state;
        match state.status {
            WidgetStatus::Approved => match code {
                KeyCode::Char('x') => Some(Action::ResetFromApproved),
                _ => None,
            },
            WidgetStatus::Rejected => match code {
                KeyCode::Char('x') => Some(Action::ResetFromRejected),
                _ => None,
            },
            WidgetStatus::Pending if state.show_reject_form => match code {
                KeyCode::Esc => Some(Action::CancelReject),
                KeyCode::Enter => Some(Action::ConfirmReject),
                KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectReason(
                    RejectReason::cycle(state.reject_reason, true),
                )),
                KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectReason(
                    RejectReason::cycle(state.reject_reason, false),
                )),
                KeyCode::Char('a') => Some(Action::Approve),
                _ => None,
            },
            WidgetStatus::Pending => match code {
                KeyCode::Char('a') => Some(Action::Approve),
                KeyCode::Char('r') => Some(Action::RequestReject),
                _ => None,
            },
        }
    }
}
