//! Approval widget prototype.
//!
//! This module encapsulates the mock milestone approval card:
//! - `state`: the widget state machine and reducer
//! - `timer`: countdown scheduling tied to the widget's lifetime
//! - `session`: a mounted widget with key bindings

mod session;
mod state;
mod timer;

pub use session::PrototypeSession;
pub use state::{Action, RejectReason, TimerPolicy, WidgetState, WidgetStatus};
pub use timer::{TimerConfig, DEFAULT_SECONDS_PER_TICK, DEFAULT_TICK_INTERVAL};
