// TUI module - terminal user interface
//
// Handles terminal setup/teardown, the event loop, input routing, and
// rendering. The loop multiplexes three sources with tokio::select!:
// keyboard/mouse input, a redraw tick, and app events from background
// tasks (simulated submission, demo tour).

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod layout;
pub mod scroll;
pub mod sections;
pub mod theme;
pub mod ui;
pub mod wrap;

use crate::config::Config;
use crate::content::Portfolio;
use crate::events::AppEvent;
use crate::form::SubmitState;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use sections::SectionId;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop until the user quits, and
/// restores the terminal even when the loop errors.
pub async fn run_tui(
    config: Config,
    portfolio: Portfolio,
    log_buffer: LogBuffer,
    event_tx: mpsc::Sender<AppEvent>,
    mut event_rx: mpsc::Receiver<AppEvent>,
) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(&config, portfolio, log_buffer, event_tx);

    let result = run_event_loop(&mut terminal, &mut app, &mut event_rx).await;

    // Tear down visibility subscriptions before leaving the screen
    app.release_trackers();
    tracing::debug!("Visibility subscriptions released");

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// tokio::select! waits on keyboard/mouse input, the redraw tick, and the
/// app event channel simultaneously, responding to whichever completes
/// first. Nothing here blocks the thread.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_rx: &mut mpsc::Receiver<AppEvent>,
) -> Result<()> {
    // Redraw tick (5 fps is plenty for fades and spinners)
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            // Periodic tick for animations and timers
            _ = tick_interval.tick() => {
                app.on_tick();
            }

            // Background events (submission completion, demo tour)
            Some(event) = event_rx.recv() => {
                app.apply_event(event);
            }
        }

        if app.should_quit {
            tracing::info!("Quit requested");
            return Ok(());
        }
    }
}

/// Route a key event to the form or the global handlers
fn handle_key_event(app: &mut App, key: KeyEvent) {
    match key.kind {
        KeyEventKind::Release => {
            app.handle_key_release(key.code);
            return;
        }
        KeyEventKind::Press | KeyEventKind::Repeat => {}
    }

    if app.form_active {
        handle_form_key(app, key);
    } else {
        handle_global_key(app, key);
    }
}

/// Keys while the contact form captures input
///
/// Typing bypasses the press/repeat gating so fast double letters land;
/// action keys keep it so held Enter doesn't re-submit.
fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) => app.form.insert_char(c),
        KeyCode::Backspace => app.form.backspace(),
        KeyCode::Tab | KeyCode::Down => app.form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.form.focus_prev(),
        KeyCode::Enter => {
            if app.handle_key_press(key.code) {
                match app.form.state() {
                    SubmitState::Editing => app.submit_form(),
                    SubmitState::Submitted => app.form.dismiss_success(),
                    SubmitState::Submitting => {}
                }
            }
        }
        KeyCode::Esc => {
            if app.handle_key_press(key.code) {
                app.form_active = false;
            }
        }
        _ => {}
    }
}

/// Global keys while browsing the page
fn handle_global_key(app: &mut App, key: KeyEvent) {
    if !app.handle_key_press(key.code) {
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Esc => {
            if app.show_logs {
                app.show_logs = false;
            } else {
                app.should_quit = true;
            }
        }

        // Scrolling
        KeyCode::Up | KeyCode::Char('k') => app.scroll.scroll_by(-1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll.scroll_by(1),
        KeyCode::PageUp => app.scroll.page_up(),
        KeyCode::PageDown => app.scroll.page_down(),
        KeyCode::Home => app.scroll.scroll_to_top(),
        KeyCode::End => app.scroll.scroll_to_bottom(),

        // Section jumps
        KeyCode::Tab => app.jump_next_section(),
        KeyCode::BackTab => app.jump_prev_section(),
        KeyCode::Char(c @ '1'..='6') => {
            if let Some(section) = SectionId::from_digit(c) {
                app.jump_to(section);
            }
        }

        // Contact section actions
        KeyCode::Enter => {
            if app.active_section == SectionId::Contact {
                match app.form.state() {
                    SubmitState::Editing => app.form_active = true,
                    SubmitState::Submitted => app.form.dismiss_success(),
                    SubmitState::Submitting => {}
                }
            }
        }
        KeyCode::Char('y') => {
            if app.active_section == SectionId::Contact {
                app.copy_contact_email();
            }
        }

        // Chrome
        KeyCode::Char('t') => app.next_theme(),
        KeyCode::Char('T') => app.prev_theme(),
        KeyCode::Char('l') => app.show_logs = !app.show_logs,

        _ => {}
    }
}

/// Mouse wheel scrolls the page
fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollUp => app.scroll.scroll_by(-3),
        MouseEventKind::ScrollDown => app.scroll.scroll_by(3),
        _ => {}
    }
}
