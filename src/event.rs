//! Events feeding the UI loop.
//!
//! Terminal input, widget timer ticks and diagram render completions all
//! arrive on a single unbounded channel.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tokio::sync::mpsc::UnboundedSender;

use crate::diagram::{DiagramError, RenderedDiagram};

/// Input poll timeout
const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug)]
pub enum AppEvent {
    /// Key press from the terminal
    Key(KeyEvent),
    /// Terminal was resized
    Resize,
    /// Countdown tick for a mounted prototype session
    Tick { session_id: u64 },
    /// A diagram render finished
    DiagramRendered {
        container: String,
        token: u64,
        outcome: Result<RenderedDiagram, DiagramError>,
    },
}

/// Poll crossterm on a dedicated thread until the channel closes
pub fn spawn_input_reader(tx: UnboundedSender<AppEvent>) -> std::thread::JoinHandle<()> {
    std::thread::spawn(move || {
        loop {
            if tx.is_closed() {
                break;
            }
            match event::poll(POLL_INTERVAL) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(e) => {
                    tracing::error!("Terminal poll failed: {}", e);
                    break;
                }
            }
            let forwarded = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    tx.send(AppEvent::Key(key))
                }
                Ok(Event::Resize(_, _)) => tx.send(AppEvent::Resize),
                Ok(_) => Ok(()),
                Err(e) => {
                    tracing::error!("Terminal read failed: {}", e);
                    break;
                }
            };
            if forwarded.is_err() {
                break;
            }
        }
        tracing::debug!("Input reader stopped");
    })
}
