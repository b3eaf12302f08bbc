//! Host surface seams.
//!
//! The controller reads layout from a [`Layout`], writes visual state to a
//! [`VisualSink`] and registers for input on [`InputSources`]. A browser
//! page, a terminal, or a test recorder can all play the host.

use crate::crossfade::{Layer, LayerVisual};

/// Required visual anchors checked at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// The scrollable timeline container.
    Timeline,
    /// The divider container whose width maps to 0–100%.
    DividerContainer,
    /// The vertical divider line.
    DividerLine,
    /// The draggable handle.
    DividerHandle,
}

impl Anchor {
    pub const REQUIRED: [Anchor; 4] = [
        Anchor::Timeline,
        Anchor::DividerContainer,
        Anchor::DividerLine,
        Anchor::DividerHandle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Timeline => "timeline",
            Self::DividerContainer => "dividerContainer",
            Self::DividerLine => "dividerLine",
            Self::DividerHandle => "dividerHandle",
        }
    }
}

impl std::fmt::Display for Anchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Input sources the controller listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    PointerDown,
    PointerMove,
    PointerUp,
    TouchStart,
    TouchMove,
    TouchEnd,
    KeyDown,
    Scroll,
    Resize,
    NavDot,
    ContextMenu,
}

impl InputSource {
    /// Every source, in registration order.
    pub const ALL: [InputSource; 11] = [
        InputSource::PointerDown,
        InputSource::PointerMove,
        InputSource::PointerUp,
        InputSource::TouchStart,
        InputSource::TouchMove,
        InputSource::TouchEnd,
        InputSource::Scroll,
        InputSource::NavDot,
        InputSource::KeyDown,
        InputSource::Resize,
        InputSource::ContextMenu,
    ];
}

/// Vertical placement of one milestone inside the timeline content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MilestoneLayout {
    pub top: f64,
    pub height: f64,
}

impl MilestoneLayout {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn center(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Horizontal extent of the divider container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerRect {
    pub left: f64,
    pub width: f64,
}

/// Scroll position and visible height of the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub scroll_top: f64,
    pub height: f64,
}

impl Viewport {
    pub fn center(&self) -> f64 {
        self.scroll_top + self.height / 2.0
    }
}

/// Read side of the host.
pub trait Layout {
    /// Whether a required anchor exists.
    fn has_anchor(&self, anchor: Anchor) -> bool;

    /// Milestones in document order.
    fn milestones(&self) -> Vec<MilestoneLayout>;

    /// Number of milestones. Override when the layouts are costly to build.
    fn milestone_count(&self) -> usize {
        self.milestones().len()
    }

    /// Number of navigation dots (may be zero).
    fn nav_dot_count(&self) -> usize;

    fn container(&self) -> ContainerRect;

    fn viewport(&self) -> Viewport;
}

/// Write side of the host.
pub trait VisualSink {
    fn set_divider_position(&mut self, percentage: f64);

    fn set_layer(&mut self, layer: Layer, visual: LayerVisual);

    /// Toggle a layer label. Hosts without labels ignore this.
    fn set_label_active(&mut self, layer: Layer, active: bool);

    fn set_milestone_active(&mut self, index: usize, active: bool);

    fn set_nav_dot_active(&mut self, index: usize, active: bool);

    /// Container-level dragging state (cursor and selection styling).
    fn set_dragging(&mut self, dragging: bool);

    /// Scroll the timeline so `top` is at the top of the viewport.
    fn scroll_to(&mut self, top: f64);
}

/// Listener registration on the host.
pub trait InputSources {
    fn listen(&mut self, source: InputSource);

    fn unlisten(&mut self, source: InputSource);
}

/// A complete host.
pub trait Surface: Layout + VisualSink + InputSources {}

impl<T: Layout + VisualSink + InputSources> Surface for T {}
