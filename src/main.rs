//! Club Forms TUI - terminal client for the club's registration forms
//!
//! Fills in, validates and submits the registration, membership, event and
//! web team forms to the club's REST backend or spreadsheet webhook.

mod app;
mod config;
mod state;
mod submit;
mod ui;

use anyhow::Result;
use app::App;
use config::AppConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use state::InMemorySubmissions;
use std::io;
use std::time::{Duration, Instant};
use submit::HttpSubmitter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// How long to wait for input before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clubforms_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => {
            tracing::warn!("Failed to load config: {e:#}");
            let mut config = AppConfig::default();
            config.apply_overrides(|key| std::env::var(key).ok());
            (config, Some(format!("Could not read config file: {e}")))
        }
    };
    tracing::info!(
        api_base = config.api_base(),
        webhook = config.webhook_url().is_some(),
        "Starting club forms client"
    );

    let submitter = HttpSubmitter::from_config(&config);
    let mut app = App::new(
        config,
        Box::new(submitter),
        Box::new(InMemorySubmissions::new()),
    );
    if let Some(message) = config_error {
        app.push_error(message);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.tick(Instant::now());

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // The "Submitting…" frame is on screen; now send
        if app.has_pending_submit() {
            app.process_pending_submit().await;
            continue;
        }

        // Handle crossterm events
        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key)?;
                }
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
