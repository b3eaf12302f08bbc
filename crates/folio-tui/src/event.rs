//! Event handling for the folio TUI.

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use folio_engine::Key;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Frame interval for the controller tick.
pub const TICK_RATE: Duration = Duration::from_millis(16);

/// Events that can occur in the TUI.
#[derive(Debug, Clone)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// A mouse event occurred.
    Mouse(MouseEvent),
    /// A frame tick.
    Tick,
    /// Terminal was resized.
    Resize(u16, u16),
}

/// Event handler that polls crossterm on a background thread.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    _tx: mpsc::UnboundedSender<Event>,
}

impl EventHandler {
    /// Create a new event handler ticking every `tick_rate`.
    ///
    /// Ticks keep their cadence while input is flowing, so drags and
    /// animations advance even under a stream of mouse moves.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let tx_clone = tx.clone();

        // crossterm polling is blocking I/O
        std::thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());
                if event::poll(timeout).unwrap_or(false) {
                    if let Ok(evt) = event::read() {
                        let event = match evt {
                            CrosstermEvent::Key(key) => Some(Event::Key(key)),
                            CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
                            CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
                            _ => None,
                        };
                        if let Some(e) = event {
                            if tx_clone.send(e).is_err() {
                                break;
                            }
                        }
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if tx_clone.send(Event::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, _tx: tx }
    }

    /// Get the next event, waiting until one is available.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

/// Key action that can be performed in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// A key routed to the controller.
    Controller(Key),
    /// Host page scroll; not a controller key.
    PageUp,
    PageDown,
    None,
}

/// Convert a key event to an action.
pub fn key_to_action(key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Up | KeyCode::Char('k') => Action::Controller(Key::ArrowUp),
        KeyCode::Down | KeyCode::Char('j') => Action::Controller(Key::ArrowDown),
        KeyCode::Left | KeyCode::Char('h') => Action::Controller(Key::ArrowLeft),
        KeyCode::Right | KeyCode::Char('l') => Action::Controller(Key::ArrowRight),
        KeyCode::Char(' ') => Action::Controller(Key::Space),
        KeyCode::Home | KeyCode::Char('g') => Action::Controller(Key::Home),
        KeyCode::End | KeyCode::Char('G') => Action::Controller(Key::End),
        KeyCode::PageUp => Action::PageUp,
        KeyCode::PageDown => Action::PageDown,
        _ => Action::None,
    }
}
