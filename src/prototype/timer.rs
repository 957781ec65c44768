//! Countdown scheduling for a mounted approval widget.
//!
//! Each mounted widget owns one interval task. The task is aborted when the
//! [`TimerHandle`] is dropped, so an unmounted widget never receives ticks
//! from its own timer again.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::state::TimerPolicy;
use crate::event::AppEvent;

/// Real-time interval between ticks
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Simulated seconds removed per tick (60x speed)
pub const DEFAULT_SECONDS_PER_TICK: u64 = 60;

/// Timer settings for a widget session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    pub policy: TimerPolicy,
    pub interval: Duration,
    pub seconds_per_tick: u64,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            policy: TimerPolicy::default(),
            interval: DEFAULT_TICK_INTERVAL,
            seconds_per_tick: DEFAULT_SECONDS_PER_TICK,
        }
    }
}

/// Owns the interval task for one widget session
#[derive(Debug)]
pub struct TimerHandle {
    task: JoinHandle<()>,
}

impl TimerHandle {
    /// Start ticking for `session_id` on the current tokio runtime
    pub fn spawn(session_id: u64, interval: Duration, tx: UnboundedSender<AppEvent>) -> Self {
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // First tick completes immediately
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if tx.send(AppEvent::Tick { session_id }).is_err() {
                    tracing::debug!(
                        "Event channel closed, stopping timer for session {}",
                        session_id
                    );
                    break;
                }
            }
        });
        Self { task }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
