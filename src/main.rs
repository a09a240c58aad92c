// folio - a single-page portfolio for the terminal
//
// A fixed set of content sections (Home, About, Education, Skills,
// Projects, Contact) rendered from static data as one scrollable page.
// Sections fade in as they scroll into view, driven by a per-section
// visibility tracker; the contact form validates locally and simulates
// submission with a fixed delay.
//
// Architecture:
// - visibility: viewport observer + per-section fade trackers (the core)
// - content: read-only portfolio data, bundled or loaded from TOML
// - form: contact form state machine and validation
// - tui (ratatui): scrollable page, nav scroll spy, overlays
// - events: mpsc channel connecting background tasks to the UI loop

mod cli;
mod config;
mod content;
mod demo;
mod events;
mod form;
mod headless;
mod logging;
mod tui;
mod visibility;

use anyhow::{Context, Result};
use config::{Config, LogRotation};
use content::Portfolio;
use logging::{LogBuffer, TuiLogLayer};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tui::theme::ThemeKind;

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config/content management)
    // If a command was handled, exit early
    if cli::handle_cli() {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    // Initialize tracing with conditional sinks:
    // - TUI mode: capture to the in-memory buffer (keeps the screen clean)
    // - headless mode: stderr, so the rendered page owns stdout
    // - file logging: optional rotating JSON files on top of either
    //
    // Precedence: RUST_LOG env var > config file > default "info"
    let log_buffer = LogBuffer::new();
    let default_filter = format!("folio={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let tui_layer = config
        .enable_tui
        .then(|| TuiLogLayer::new(log_buffer.clone()));
    let stderr_layer = (!config.enable_tui)
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    // The guard must live until exit so buffered file logs flush
    let mut _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> = None;
    let file_layer = if config.logging.file_enabled {
        match std::fs::create_dir_all(&config.logging.file_dir) {
            Ok(()) => {
                let appender = match config.logging.file_rotation {
                    LogRotation::Hourly => tracing_appender::rolling::hourly(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Daily => tracing_appender::rolling::daily(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Never => tracing_appender::rolling::never(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                };
                let (non_blocking, guard) = tracing_appender::non_blocking(appender);
                _file_guard = Some(guard);
                Some(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(non_blocking)
                        .with_ansi(false),
                )
            }
            Err(e) => {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                None
            }
        }
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tui_layer)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    // Load the portfolio content (bundled sample unless configured)
    let portfolio = Portfolio::load(config.content_file.as_deref())
        .context("Failed to load portfolio content")?;
    tracing::info!(
        "Portfolio loaded: {} ({} projects, {} skill groups)",
        portfolio.personal.name,
        portfolio.projects.len(),
        portfolio.skills.len()
    );

    // Headless mode: no viewport, no intersection primitive - render the
    // whole page once with every section visible
    if !config.enable_tui {
        tracing::info!("TUI disabled, rendering page to stdout");
        let theme = ThemeKind::parse(&config.theme).theme();
        return headless::run(&portfolio, &theme);
    }

    // Event channel: background tasks (simulated submission, demo tour)
    // deliver results to the UI loop here
    let (event_tx, event_rx) = mpsc::channel(64);

    if config.demo_mode {
        tracing::info!("Demo mode: starting scripted tour");
        let demo_tx = event_tx.clone();
        tokio::spawn(async move {
            demo::run_demo(demo_tx).await;
        });
    }

    tracing::info!("Starting TUI");
    tui::run_tui(config, portfolio, log_buffer, event_tx, event_rx).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
