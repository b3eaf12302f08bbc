//! Theme components for the TUI.
//!
//! This module provides:
//! - [`Theme`] - Color palette (Catppuccin Mocha/Latte) with layer accents
//! - [`blend`] - Opacity blending toward the background

mod colors;

pub use colors::{blend, Theme};
