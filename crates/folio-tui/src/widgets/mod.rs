//! UI widgets for the TUI.
//!
//! This module provides:
//! - [`StatusBar`] - Top status bar with title, milestone and divider readout
//! - [`DividerBar`] - Crossfaded layers split by the draggable handle
//! - [`TimelineView`] - Scrollable milestone list
//! - [`FooterHints`] - Bottom keybinding hints

mod divider_bar;
mod footer_hints;
mod status_bar;
mod timeline_view;

pub use divider_bar::DividerBar;
pub use footer_hints::{FooterHints, KeyHint};
pub use status_bar::{StatusBar, StatusBarContent};
pub use timeline_view::TimelineView;
