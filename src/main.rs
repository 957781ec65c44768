mod app;
mod cli;
mod config;
mod content;
mod diagram;
mod error;
mod event;
mod logging;
mod models;
mod prototype;
mod shell;
mod terminal;
mod theme;
mod ui;
mod utils;

use clap::Parser;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;

use app::App;
use cli::CliArgs;
use config::Settings;
use error::{Error, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    logging::init()?;

    let mut settings = config::load_settings(args.config.as_deref())?;
    settings.apply_overrides(args.tab, args.timer_policy);
    tracing::info!(
        "Starting on {} with {:?} timer policy",
        settings.start_tab(),
        settings.timer_config().policy
    );

    terminal::install_panic_hook();
    let mut term = terminal::init()?;

    let result = run(&mut term, &settings).await;

    terminal::restore();

    if let Err(e) = &result {
        tracing::error!("Exited with error: {}", e);
    } else {
        tracing::info!("Exited cleanly");
    }
    result
}

async fn run(terminal: &mut DefaultTerminal, settings: &Settings) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let _input = event::spawn_input_reader(tx.clone());
    let mut app = App::new(settings, tx);

    while !app.should_quit {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        let event = rx.recv().await.ok_or(Error::ChannelClosed)?;
        app.handle_event(event);

        // Apply everything already queued before the next redraw
        while let Ok(event) = rx.try_recv() {
            app.handle_event(event);
        }
    }

    Ok(())
}
