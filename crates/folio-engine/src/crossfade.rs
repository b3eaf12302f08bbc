//! Dual-layer crossfade driven by a single 0–100 control value.
//!
//! One layer fades out as the value rises past the midpoint, the other
//! fades in as it rises from zero. Both are fully opaque at 50.

use serde::{Deserialize, Serialize};

use crate::surface::VisualSink;

/// Midpoint of the control range, where both layers are opaque.
pub const MIDPOINT: f64 = 50.0;

/// Layers at or below this opacity are hidden entirely.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

/// A background layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    /// Left-hand layer, visible while the divider sits low.
    Dna,
    /// Right-hand layer, visible while the divider sits high.
    Star,
}

impl Layer {
    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dna => "DNA",
            Self::Star => "STAR",
        }
    }
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dna => write!(f, "dna"),
            Self::Star => write!(f, "star"),
        }
    }
}

/// Derived appearance of one layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayerVisual {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Whether the layer should be drawn at all.
    pub visible: bool,
}

impl LayerVisual {
    pub fn from_opacity(opacity: f64) -> Self {
        Self {
            opacity,
            visible: opacity > VISIBILITY_THRESHOLD,
        }
    }
}

/// Opacity of the layer that fades out as `value` rises.
pub fn fade_out_opacity(value: f64) -> f64 {
    ((100.0 - value) / MIDPOINT).clamp(0.0, 1.0)
}

/// Opacity of the layer that fades in as `value` rises.
pub fn fade_in_opacity(value: f64) -> f64 {
    (value / MIDPOINT).clamp(0.0, 1.0)
}

/// A pair of layers crossfaded by one control value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crossfade {
    pub fade_out: Layer,
    pub fade_in: Layer,
}

impl Default for Crossfade {
    fn default() -> Self {
        Self {
            fade_out: Layer::Dna,
            fade_in: Layer::Star,
        }
    }
}

impl Crossfade {
    pub fn new(fade_out: Layer, fade_in: Layer) -> Self {
        Self { fade_out, fade_in }
    }

    /// Visuals for both layers at `value`, `fade_out` first.
    pub fn visuals(&self, value: f64) -> [(Layer, LayerVisual); 2] {
        [
            (self.fade_out, LayerVisual::from_opacity(fade_out_opacity(value))),
            (self.fade_in, LayerVisual::from_opacity(fade_in_opacity(value))),
        ]
    }

    /// Opacity of `layer` at `value`. Layers outside the pair stay opaque.
    pub fn opacity(&self, layer: Layer, value: f64) -> f64 {
        if layer == self.fade_out {
            fade_out_opacity(value)
        } else if layer == self.fade_in {
            fade_in_opacity(value)
        } else {
            1.0
        }
    }

    /// Write both layer visuals to `sink`.
    pub fn apply<S: VisualSink + ?Sized>(&self, value: f64, sink: &mut S) {
        for (layer, visual) in self.visuals(value) {
            sink.set_layer(layer, visual);
        }
    }

    /// Write both label states to `sink`. Exactly at the midpoint neither
    /// label is active.
    pub fn apply_labels<S: VisualSink + ?Sized>(&self, value: f64, sink: &mut S) {
        sink.set_label_active(self.fade_out, value < MIDPOINT);
        sink.set_label_active(self.fade_in, value > MIDPOINT);
    }
}
