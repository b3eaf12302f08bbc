//! Test utilities for folio-tui rendering and interaction tests.

use crate::app::App;
use crate::surface::TerminalSurface;
use crate::theme::Theme;
use crossterm::event::{KeyModifiers, MouseEvent, MouseEventKind};
use folio_engine::{Config, ManualClock, Portfolio};
use ratatui::{backend::TestBackend, Terminal};

pub use crate::headless::buffer_to_string;

/// Default terminal width for tests.
pub const TEST_WIDTH: u16 = 80;

/// Default terminal height for tests.
pub const TEST_HEIGHT: u16 = 24;

/// Create a test terminal with custom dimensions.
pub fn create_test_terminal_sized(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// Create an 80x24 app over the sample portfolio, with a clock the test
/// can advance.
pub fn create_test_app() -> (App<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let surface = TerminalSurface::new(Portfolio::sample(), TEST_WIDTH, TEST_HEIGHT);
    let app = App::new(surface, clock.clone(), Config::default(), Theme::default())
        .expect("sample portfolio fits 80x24");
    (app, clock)
}

/// A mouse event at `(column, row)` with no modifiers.
pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_terminal() {
        let terminal = create_test_terminal_sized(TEST_WIDTH, TEST_HEIGHT);
        let size = terminal.size().expect("size");
        assert_eq!(size.width, 80);
        assert_eq!(size.height, 24);
    }

    #[test]
    fn test_create_test_app_shares_clock() {
        let (app, clock) = create_test_app();
        clock.advance_ms(10);
        assert_eq!(app.state().current_milestone, 0);
    }
}
