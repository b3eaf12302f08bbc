//! Application state and update logic for the folio TUI.

use crate::event::Action;
use crate::layout::render_shell;
use crate::surface::TerminalSurface;
use crate::theme::Theme;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use folio_engine::{
    Clock, Config, Controller, ControllerError, InputEvent, InteractionState, SystemClock,
};
use ratatui::Frame;
use tracing::debug;

/// Lines scrolled per mouse wheel notch.
pub const WHEEL_LINES: i32 = 3;

/// Main application state.
pub struct App<C: Clock = SystemClock> {
    controller: Controller<TerminalSurface, C>,
    /// Color theme.
    pub theme: Theme,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl<C: Clock> App<C> {
    /// Bind a controller to `surface` and signal that content is ready.
    pub fn new(
        surface: TerminalSurface,
        clock: C,
        config: Config,
        theme: Theme,
    ) -> Result<Self, ControllerError> {
        let mut controller = Controller::new(surface, clock, config)?;
        controller.dispatch(InputEvent::Ready);
        Ok(Self {
            controller,
            theme,
            should_quit: false,
        })
    }

    pub fn controller(&self) -> &Controller<TerminalSurface, C> {
        &self.controller
    }

    pub fn surface(&self) -> &TerminalSurface {
        self.controller.surface()
    }

    pub fn state(&self) -> InteractionState {
        self.controller.state()
    }

    /// Handle a key action.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.quit(),
            Action::Controller(key) => {
                let propagation = self.controller.dispatch(InputEvent::Key(key));
                debug!(?key, ?propagation, "key dispatched");
            }
            Action::PageUp => self.scroll_page(-1),
            Action::PageDown => self.scroll_page(1),
            Action::None => {}
        }
    }

    /// Translate a terminal mouse event into controller input.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (column, row) = (mouse.column, mouse.row);
        let layout = *self.surface().layout();
        let position = self.state().divider_position;
        let x = f64::from(column);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if layout.grabs_handle(column, row, position) {
                    self.controller.dispatch(InputEvent::PointerDown { x });
                } else if let Some(index) =
                    layout.nav_dot_at(column, row, self.surface().portfolio().len())
                {
                    self.controller.dispatch(InputEvent::NavDot(index));
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.controller.dispatch(InputEvent::PointerMove { x });
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.controller.dispatch(InputEvent::PointerUp);
            }
            MouseEventKind::Down(MouseButton::Right) if layout.grabs_handle(column, row, position) => {
                let propagation = self.controller.dispatch(InputEvent::ContextMenu);
                debug!(?propagation, "context menu on divider handle");
            }
            MouseEventKind::ScrollUp if layout.over_timeline(column, row) => {
                self.scroll_timeline(-WHEEL_LINES);
            }
            MouseEventKind::ScrollDown if layout.over_timeline(column, row) => {
                self.scroll_timeline(WHEEL_LINES);
            }
            _ => {}
        }
    }

    /// Relayout for a new terminal size and notify the controller.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.controller.surface_mut().resize(width, height);
        self.controller.dispatch(InputEvent::Resize);
    }

    /// Advance controller timers.
    pub fn tick(&mut self) {
        self.controller.tick();
    }

    /// Draw the current state.
    pub fn render(&self, frame: &mut Frame<'_>) {
        render_shell(frame, self.surface(), &self.state(), &self.theme);
    }

    /// Tear down the controller and request exit.
    pub fn quit(&mut self) {
        self.controller.destroy();
        self.should_quit = true;
    }

    /// Host scroll: move the timeline, then report it like a page scroll.
    fn scroll_timeline(&mut self, lines: i32) {
        if self.controller.surface_mut().scroll_by(lines) {
            self.controller.dispatch(InputEvent::Scroll);
        }
    }

    fn scroll_page(&mut self, direction: i32) {
        let page = i32::from(self.surface().viewport_height().saturating_sub(1).max(1));
        self.scroll_timeline(direction * page);
    }
}
