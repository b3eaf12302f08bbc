//! Host-independent input events.

use crate::surface::InputSource;

/// Keys the controller understands. Anything else is [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Space,
    Home,
    End,
    Other,
}

/// An inbound event from the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed on the divider handle.
    PointerDown { x: f64 },
    PointerMove { x: f64 },
    PointerUp,
    /// First touch on the divider handle.
    TouchStart { x: f64 },
    TouchMove { x: f64 },
    TouchEnd,
    Key(Key),
    /// The timeline scrolled. The new offset is read from the layout.
    Scroll,
    /// The viewport changed size.
    Resize,
    /// A navigation dot was activated.
    NavDot(usize),
    /// Context menu requested on the divider handle.
    ContextMenu,
    /// Page content is ready.
    Ready,
}

impl InputEvent {
    /// The listener source this event is delivered through, or `None` for
    /// lifecycle signals that need no registration.
    pub fn source(&self) -> Option<InputSource> {
        match self {
            Self::PointerDown { .. } => Some(InputSource::PointerDown),
            Self::PointerMove { .. } => Some(InputSource::PointerMove),
            Self::PointerUp => Some(InputSource::PointerUp),
            Self::TouchStart { .. } => Some(InputSource::TouchStart),
            Self::TouchMove { .. } => Some(InputSource::TouchMove),
            Self::TouchEnd => Some(InputSource::TouchEnd),
            Self::Key(_) => Some(InputSource::KeyDown),
            Self::Scroll => Some(InputSource::Scroll),
            Self::Resize => Some(InputSource::Resize),
            Self::NavDot(_) => Some(InputSource::NavDot),
            Self::ContextMenu => Some(InputSource::ContextMenu),
            Self::Ready => None,
        }
    }
}

/// Whether the host should run its default action for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// The controller consumed the event; suppress the default action.
    Handled,
    /// Leave the event to the host.
    PassThrough,
}

impl Propagation {
    pub fn is_handled(self) -> bool {
        self == Self::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_sources() {
        assert_eq!(
            InputEvent::TouchMove { x: 1.0 }.source(),
            Some(InputSource::TouchMove)
        );
        assert_eq!(
            InputEvent::Key(Key::Home).source(),
            Some(InputSource::KeyDown)
        );
        assert_eq!(InputEvent::Ready.source(), None);
    }

    #[test]
    fn test_propagation() {
        assert!(Propagation::Handled.is_handled());
        assert!(!Propagation::PassThrough.is_handled());
    }
}
