//! Terminal host surface.
//!
//! [`TerminalSurface`] plays the page for the controller: it lays out the
//! portfolio into line-height milestone blocks, reports that geometry
//! through [`Layout`], and keeps every visual write for the renderer.

use std::collections::HashSet;

use folio_engine::{
    Anchor, ContainerRect, InputSource, InputSources, Layer, LayerVisual, Layout, MilestoneLayout,
    Portfolio, Viewport, VisualSink,
};
use ratatui::layout::Rect;

use crate::layout::ScreenLayout;

/// Columns reserved inside the timeline pane when wrapping bodies.
const WRAP_PADDING: u16 = 4;

/// A milestone laid out into terminal lines.
///
/// Each block is a full-viewport section, so the viewport center crosses
/// a block's center exactly when the block reaches the top of the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MilestoneBlock {
    /// First line of the block in timeline content coordinates.
    pub top: u16,
    /// Lines the block occupies, padding included.
    pub height: u16,
    /// Heading followed by the wrapped body lines.
    pub lines: Vec<String>,
}

/// Divider-derived state written by the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerVisual {
    pub position: f64,
    pub dna: LayerVisual,
    pub star: LayerVisual,
    pub dna_label: bool,
    pub star_label: bool,
    pub dragging: bool,
}

impl Default for DividerVisual {
    fn default() -> Self {
        Self {
            position: 0.0,
            dna: LayerVisual::from_opacity(1.0),
            star: LayerVisual::from_opacity(1.0),
            dna_label: false,
            star_label: false,
            dragging: false,
        }
    }
}

/// Terminal implementation of the controller's host surface.
#[derive(Debug, Clone)]
pub struct TerminalSurface {
    portfolio: Portfolio,
    layout: ScreenLayout,
    blocks: Vec<MilestoneBlock>,
    scroll_top: u16,
    divider: DividerVisual,
    milestone_active: Vec<bool>,
    nav_dot_active: Vec<bool>,
    listening: HashSet<InputSource>,
}

impl TerminalSurface {
    /// Lay out `portfolio` for a terminal of `width` x `height`.
    pub fn new(portfolio: Portfolio, width: u16, height: u16) -> Self {
        let count = portfolio.len();
        let mut surface = Self {
            portfolio,
            layout: ScreenLayout::default(),
            blocks: Vec::new(),
            scroll_top: 0,
            divider: DividerVisual::default(),
            milestone_active: vec![false; count],
            nav_dot_active: vec![false; count],
            listening: HashSet::new(),
        };
        surface.resize(width, height);
        surface
    }

    /// Recompute geometry for a new terminal size.
    ///
    /// The scroll offset is clamped to the new content height; the
    /// controller is told separately through a resize event.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.layout = ScreenLayout::compute(Rect::new(0, 0, width, height));
        self.blocks = layout_blocks(
            &self.portfolio,
            self.layout.timeline_inner.width.saturating_sub(WRAP_PADDING),
            self.layout.timeline_inner.height,
        );
        self.scroll_top = self.scroll_top.min(self.max_scroll());
    }

    /// Scroll the timeline by `lines` (negative scrolls up). Returns
    /// whether the offset changed.
    pub fn scroll_by(&mut self, lines: i32) -> bool {
        let target = (i32::from(self.scroll_top) + lines).clamp(0, i32::from(self.max_scroll()));
        let target = u16::try_from(target).unwrap_or(0);
        let changed = target != self.scroll_top;
        self.scroll_top = target;
        changed
    }

    /// Largest scroll offset: the last milestone at the top of the view.
    pub fn max_scroll(&self) -> u16 {
        self.blocks.last().map_or(0, |b| b.top)
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn layout(&self) -> &ScreenLayout {
        &self.layout
    }

    pub fn blocks(&self) -> &[MilestoneBlock] {
        &self.blocks
    }

    pub fn scroll_top(&self) -> u16 {
        self.scroll_top
    }

    pub fn divider(&self) -> &DividerVisual {
        &self.divider
    }

    pub fn is_milestone_active(&self, index: usize) -> bool {
        self.milestone_active.get(index).copied().unwrap_or(false)
    }

    pub fn is_nav_dot_active(&self, index: usize) -> bool {
        self.nav_dot_active.get(index).copied().unwrap_or(false)
    }

    pub fn is_listening(&self, source: InputSource) -> bool {
        self.listening.contains(&source)
    }

    /// Viewport height in lines.
    pub fn viewport_height(&self) -> u16 {
        self.layout.timeline_inner.height
    }
}

/// Wrap every milestone to `width` columns and stack the blocks, each at
/// least `min_height` lines tall with one blank line after its content.
fn layout_blocks(portfolio: &Portfolio, width: u16, min_height: u16) -> Vec<MilestoneBlock> {
    let width = usize::from(width.max(1));
    let mut top = 0u16;
    portfolio
        .milestones
        .iter()
        .map(|milestone| {
            let heading = if milestone.year.is_empty() {
                milestone.title.clone()
            } else {
                format!("{}  {}", milestone.year, milestone.title)
            };
            let mut lines = vec![heading];
            if !milestone.body.is_empty() {
                lines.extend(
                    textwrap::wrap(&milestone.body, width)
                        .into_iter()
                        .map(|line| line.into_owned()),
                );
            }

            let content = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(1);
            let block = MilestoneBlock {
                top,
                height: content.max(min_height),
                lines,
            };
            top = top.saturating_add(block.height);
            block
        })
        .collect()
}

impl Layout for TerminalSurface {
    fn has_anchor(&self, anchor: Anchor) -> bool {
        match anchor {
            Anchor::Timeline => !self.layout.timeline_inner.is_empty(),
            Anchor::DividerContainer | Anchor::DividerLine | Anchor::DividerHandle => {
                !self.layout.divider_inner.is_empty()
            }
        }
    }

    fn milestones(&self) -> Vec<MilestoneLayout> {
        self.blocks
            .iter()
            .map(|b| MilestoneLayout::new(f64::from(b.top), f64::from(b.height)))
            .collect()
    }

    fn milestone_count(&self) -> usize {
        self.blocks.len()
    }

    fn nav_dot_count(&self) -> usize {
        self.nav_dot_active.len()
    }

    fn container(&self) -> ContainerRect {
        ContainerRect {
            left: f64::from(self.layout.divider_inner.x),
            width: self.layout.divider_span(),
        }
    }

    fn viewport(&self) -> Viewport {
        Viewport {
            scroll_top: f64::from(self.scroll_top),
            height: f64::from(self.viewport_height()),
        }
    }
}

impl VisualSink for TerminalSurface {
    fn set_divider_position(&mut self, percentage: f64) {
        self.divider.position = percentage;
    }

    fn set_layer(&mut self, layer: Layer, visual: LayerVisual) {
        match layer {
            Layer::Dna => self.divider.dna = visual,
            Layer::Star => self.divider.star = visual,
        }
    }

    fn set_label_active(&mut self, layer: Layer, active: bool) {
        match layer {
            Layer::Dna => self.divider.dna_label = active,
            Layer::Star => self.divider.star_label = active,
        }
    }

    fn set_milestone_active(&mut self, index: usize, active: bool) {
        if let Some(slot) = self.milestone_active.get_mut(index) {
            *slot = active;
        }
    }

    fn set_nav_dot_active(&mut self, index: usize, active: bool) {
        if let Some(slot) = self.nav_dot_active.get_mut(index) {
            *slot = active;
        }
    }

    fn set_dragging(&mut self, dragging: bool) {
        self.divider.dragging = dragging;
    }

    fn scroll_to(&mut self, top: f64) {
        let top = top.max(0.0).round() as u16;
        self.scroll_top = top.min(self.max_scroll());
    }
}

impl InputSources for TerminalSurface {
    fn listen(&mut self, source: InputSource) {
        self.listening.insert(source);
    }

    fn unlisten(&mut self, source: InputSource) {
        self.listening.remove(&source);
    }
}
