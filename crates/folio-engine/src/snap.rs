//! Post-drag snapping to the start, center and end of the divider range.

use crate::crossfade::MIDPOINT;

/// Canonical position a released divider at `position` should settle on,
/// or `None` when it is not near any of them.
///
/// The center wins over the edges when thresholds overlap.
pub fn snap_target(position: f64, threshold: f64) -> Option<f64> {
    if (position - MIDPOINT).abs() <= threshold {
        Some(MIDPOINT)
    } else if position <= threshold {
        Some(0.0)
    } else if position >= 100.0 - threshold {
        Some(100.0)
    } else {
        None
    }
}

/// Position after snapping; unchanged when no snap applies.
pub fn snap(position: f64, threshold: f64) -> f64 {
    snap_target(position, threshold).unwrap_or(position)
}
