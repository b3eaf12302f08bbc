//! Recording surface for controller tests.

use std::cell::Cell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::crossfade::{Layer, LayerVisual};
use crate::surface::{
    Anchor, ContainerRect, InputSource, InputSources, Layout, MilestoneLayout, Viewport,
    VisualSink,
};

/// Height of each milestone built by [`RecordingSurface::with_milestones`].
pub const MILESTONE_HEIGHT: f64 = 200.0;

/// A surface that records every write.
///
/// Defaults: all anchors present, a 1000px container at x=0, a 400px
/// viewport, and one nav dot per milestone.
#[derive(Debug)]
pub struct RecordingSurface {
    pub anchors: HashSet<Anchor>,
    pub milestones: Vec<MilestoneLayout>,
    pub container: ContainerRect,
    pub viewport: Viewport,
    pub viewport_reads: Cell<usize>,

    pub divider_position: Option<f64>,
    pub divider_writes: usize,
    pub layers: HashMap<Layer, LayerVisual>,
    pub labels: HashMap<Layer, bool>,
    pub milestone_active: Vec<bool>,
    pub milestone_writes: usize,
    pub nav_dot_active: Vec<bool>,
    pub dragging: bool,
    pub scroll_calls: Vec<f64>,

    pub listening: HashSet<InputSource>,
    pub listen_calls: Rc<Cell<usize>>,
    pub unlisten_calls: usize,
}

impl RecordingSurface {
    pub fn with_milestones(count: usize) -> Self {
        let milestones = (0..count)
            .map(|i| MilestoneLayout::new(i as f64 * MILESTONE_HEIGHT, MILESTONE_HEIGHT))
            .collect();

        Self {
            anchors: Anchor::REQUIRED.into_iter().collect(),
            milestones,
            container: ContainerRect {
                left: 0.0,
                width: 1000.0,
            },
            viewport: Viewport {
                scroll_top: 0.0,
                height: 400.0,
            },
            viewport_reads: Cell::new(0),
            divider_position: None,
            divider_writes: 0,
            layers: HashMap::new(),
            labels: HashMap::new(),
            milestone_active: vec![false; count],
            milestone_writes: 0,
            nav_dot_active: vec![false; count],
            dragging: false,
            scroll_calls: Vec::new(),
            listening: HashSet::new(),
            listen_calls: Rc::new(Cell::new(0)),
            unlisten_calls: 0,
        }
    }
}

impl Layout for RecordingSurface {
    fn has_anchor(&self, anchor: Anchor) -> bool {
        self.anchors.contains(&anchor)
    }

    fn milestones(&self) -> Vec<MilestoneLayout> {
        self.milestones.clone()
    }

    fn nav_dot_count(&self) -> usize {
        self.nav_dot_active.len()
    }

    fn container(&self) -> ContainerRect {
        self.container
    }

    fn viewport(&self) -> Viewport {
        self.viewport_reads.set(self.viewport_reads.get() + 1);
        self.viewport
    }
}

impl VisualSink for RecordingSurface {
    fn set_divider_position(&mut self, percentage: f64) {
        self.divider_position = Some(percentage);
        self.divider_writes += 1;
    }

    fn set_layer(&mut self, layer: Layer, visual: LayerVisual) {
        self.layers.insert(layer, visual);
    }

    fn set_label_active(&mut self, layer: Layer, active: bool) {
        self.labels.insert(layer, active);
    }

    fn set_milestone_active(&mut self, index: usize, active: bool) {
        if let Some(slot) = self.milestone_active.get_mut(index) {
            *slot = active;
            self.milestone_writes += 1;
        }
    }

    fn set_nav_dot_active(&mut self, index: usize, active: bool) {
        if let Some(slot) = self.nav_dot_active.get_mut(index) {
            *slot = active;
        }
    }

    fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    fn scroll_to(&mut self, top: f64) {
        self.viewport.scroll_top = top;
        self.scroll_calls.push(top);
    }
}

impl InputSources for RecordingSurface {
    fn listen(&mut self, source: InputSource) {
        self.listening.insert(source);
        self.listen_calls.set(self.listen_calls.get() + 1);
    }

    fn unlisten(&mut self, source: InputSource) {
        self.listening.remove(&source);
        self.unlisten_calls += 1;
    }
}
