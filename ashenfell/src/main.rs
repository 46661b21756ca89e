//! Ashenfell terminal client.
//!
//! A menu-driven TUI over the `ashenfell-core` engine: pick or create a
//! hero, choose a level, and fight its enemy one round at a time.

mod app;
mod config;
mod events;
mod ui;

use std::io::{self, stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use ashenfell_core::GameSession;

use app::App;
use config::Config;
use events::{handle_event, EventResult};
use ui::render::render;

fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let config = Config::from_env();
    setup_logging(&config).context("failed to initialize logging")?;

    let mut session = GameSession::new();
    match session.load_from(&config.save_file) {
        Ok(true) => tracing::info!(path = %config.save_file.display(), "loaded saved game"),
        Ok(false) => tracing::info!("no saved game, starting fresh"),
        Err(e) => tracing::warn!("ignoring unreadable save: {e}"),
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(out);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal before reporting anything
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    // Persist even if the loop bailed out with an error.
    if let Some(parent) = config.save_file.parent() {
        std::fs::create_dir_all(parent).ok();
    }
    if let Err(e) = app.session.save_to(&config.save_file) {
        tracing::error!("failed to write save: {e}");
        eprintln!("warning: could not write save file: {e}");
    } else {
        tracing::info!(path = %config.save_file.display(), "saved game");
    }

    result?;
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            let ev = event::read()?;
            if handle_event(app, ev) == EventResult::Quit {
                return Ok(());
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Log to a file only; stdout and stderr belong to the TUI.
fn setup_logging(config: &Config) -> Result<()> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    std::fs::create_dir_all(&config.log_dir)?;
    let appender = tracing_appender::rolling::never(&config.log_dir, "ashenfell.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    // Keep the writer alive for the rest of the process.
    std::mem::forget(guard);

    Ok(())
}
