//! Headless mode for the folio TUI.
//!
//! Drives the same [`App`] against an in-memory terminal so the screen
//! can be inspected without a tty, for `folio check` and for tests.

use crate::app::App;
use crate::event::Action;
use crate::surface::TerminalSurface;
use crate::theme::Theme;
use folio_engine::{Clock, Config, InteractionState, Portfolio};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

/// Default terminal dimensions for headless mode.
pub const DEFAULT_WIDTH: u16 = 80;
pub const DEFAULT_HEIGHT: u16 = 24;

/// State captured after a headless render.
#[derive(Debug, Clone)]
pub struct HeadlessState {
    /// Controller interaction state.
    pub state: InteractionState,
    /// Text contents of the terminal buffer.
    pub screen_contents: String,
    /// Whether the app asked to quit.
    pub should_quit: bool,
}

/// A TUI instance rendering into a [`TestBackend`].
pub struct Headless<C: Clock> {
    app: App<C>,
    terminal: Terminal<TestBackend>,
}

impl<C: Clock> Headless<C> {
    /// Start a headless session of `width` x `height`.
    pub fn new(
        portfolio: Portfolio,
        config: Config,
        clock: C,
        width: u16,
        height: u16,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let surface = TerminalSurface::new(portfolio, width, height);
        let app = App::new(surface, clock, config, Theme::default())?;
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        Ok(Self { app, terminal })
    }

    pub fn app(&self) -> &App<C> {
        &self.app
    }

    pub fn send_action(&mut self, action: Action) {
        self.app.handle_action(action);
    }

    pub fn tick(&mut self) {
        self.app.tick();
    }

    /// Resize both the app and the in-memory terminal.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.terminal.backend_mut().resize(width, height);
        self.app.handle_resize(width, height);
    }

    /// Draw one frame and capture it.
    pub fn render(&mut self) -> Result<HeadlessState, Box<dyn std::error::Error>> {
        let app = &self.app;
        self.terminal.draw(|frame| app.render(frame))?;
        Ok(HeadlessState {
            state: self.app.state(),
            screen_contents: buffer_to_string(self.terminal.backend().buffer()),
            should_quit: self.app.should_quit,
        })
    }
}

/// Convert a buffer to a string, trimming trailing spaces on each line.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        while result.ends_with(' ') {
            result.pop();
        }
        result.push('\n');
    }

    if result.ends_with('\n') {
        result.pop();
    }

    result
}
