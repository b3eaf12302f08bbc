//! folio-tui: Terminal UI for the folio portfolio timeline
//!
//! This crate provides the TUI layer for folio, including:
//! - [`TerminalSurface`], the terminal host for the timeline controller
//! - Divider, timeline and navigation rendering
//! - Headless mode for checks and automation

mod app;
mod event;
pub mod headless;
mod layout;
mod surface;
#[cfg(test)]
pub mod test_utils;
mod theme;
mod widgets;

pub use app::App;
pub use event::{key_to_action, Action, Event, EventHandler, TICK_RATE};
pub use folio_engine;
pub use layout::ScreenLayout;
pub use surface::{DividerVisual, MilestoneBlock, TerminalSurface};
pub use theme::Theme;

use crossterm::{
    cursor::Show as ShowCursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use folio_engine::{Config, Portfolio, SystemClock};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use tracing::info;

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the TUI application.
///
/// Sets up the terminal, binds the controller to a [`TerminalSurface`],
/// runs the event loop, and restores the terminal on exit. Fails without
/// touching the terminal when the controller cannot start.
pub async fn run_tui(
    portfolio: Portfolio,
    config: Config,
    theme: Theme,
) -> Result<(), Box<dyn std::error::Error>> {
    let (width, height) = crossterm::terminal::size()?;
    let surface = TerminalSurface::new(portfolio, width, height);
    let mut app = App::new(surface, SystemClock::new(), config, theme)?;

    // Setup terminal with RAII guard for cleanup
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut events = EventHandler::new(TICK_RATE);
    info!(width, height, "tui started");

    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    // Restore cursor before guard drops
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        match events.next().await {
            Some(Event::Key(key)) => app.handle_action(key_to_action(key)),
            Some(Event::Mouse(mouse)) => app.handle_mouse(mouse),
            Some(Event::Tick) => app.tick(),
            Some(Event::Resize(width, height)) => app.handle_resize(width, height),
            None => app.quit(),
        }

        if app.should_quit {
            info!("tui exiting");
            return Ok(());
        }
    }
}

/// Returns the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
