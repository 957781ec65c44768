//! Terminal setup and restoration

use ratatui::DefaultTerminal;

use crate::error::{Error, Result};

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Enter raw mode and the alternate screen
pub fn init() -> Result<DefaultTerminal> {
    ratatui::try_init().map_err(|e| Error::terminal(e.to_string()))
}

/// Leave raw mode and the alternate screen
pub fn restore() {
    if let Err(e) = ratatui::try_restore() {
        tracing::warn!("Failed to restore terminal: {}", e);
    }
}
