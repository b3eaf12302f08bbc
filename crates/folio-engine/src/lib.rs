//! folio-engine: Headless controller for a divider-driven portfolio timeline
//!
//! This crate provides the interaction logic behind folio, including:
//! - The divider/milestone [`Controller`] state machine
//! - Dual-layer crossfade, snap policy and eased animation
//! - Debounce and per-frame scheduling driven by an injectable [`Clock`]
//! - Host [`Surface`] seams, configuration and portfolio content

pub mod animation;
pub mod clock;
pub mod config;
pub mod controller;
pub mod crossfade;
pub mod input;
pub mod navigation;
pub mod portfolio;
pub mod schedule;
pub mod snap;
pub mod surface;
#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use animation::{ease_out_cubic, Animation, Step};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{Config, ConfigError};
pub use controller::{Controller, ControllerError, InteractionState};
pub use crossfade::{fade_in_opacity, fade_out_opacity, Crossfade, Layer, LayerVisual};
pub use input::{InputEvent, Key, Propagation};
pub use navigation::current_from_scroll;
pub use portfolio::{Milestone, Portfolio, PortfolioError};
pub use schedule::{Debouncer, FrameSlot};
pub use snap::{snap, snap_target};
pub use surface::{
    Anchor, ContainerRect, InputSource, InputSources, Layout, MilestoneLayout, Surface, Viewport,
    VisualSink,
};

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
