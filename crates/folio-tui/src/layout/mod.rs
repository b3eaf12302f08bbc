//! Layout components for the TUI.
//!
//! This module provides:
//! - [`ScreenLayout`] - Region geometry shared by rendering and input mapping
//! - [`render_shell`] - Main shell renderer

mod regions;
mod shell;

pub use regions::{handle_offset, ScreenLayout, MIN_HEIGHT, MIN_WIDTH};
pub use shell::render_shell;
