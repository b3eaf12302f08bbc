//! Scroll-derived milestone tracking.

use crate::surface::{MilestoneLayout, Viewport};

/// Index of the milestone most recently passed by the viewport center.
///
/// Picks the last milestone, in document order, whose vertical center is
/// at or above the viewport center. Falls back to 0 when none qualifies.
pub fn current_from_scroll(milestones: &[MilestoneLayout], viewport: Viewport) -> usize {
    let center = viewport.center();
    milestones
        .iter()
        .enumerate()
        .filter(|(_, m)| center >= m.center())
        .map(|(i, _)| i)
        .last()
        .unwrap_or(0)
}

/// Resolve `current + delta` to a valid index, or `None` when it falls
/// outside `[0, count)`.
pub fn offset_index(current: usize, delta: isize, count: usize) -> Option<usize> {
    current.checked_add_signed(delta).filter(|i| *i < count)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Five 200px milestones stacked from the top.
    fn five_milestones() -> Vec<MilestoneLayout> {
        (0..5)
            .map(|i| MilestoneLayout::new(f64::from(i) * 200.0, 200.0))
            .collect()
    }

    #[test]
    fn test_center_exactly_on_milestone_center() {
        let milestones = five_milestones();
        // Milestone 2 center is 500; viewport 400 tall scrolled to 300
        let viewport = Viewport {
            scroll_top: 300.0,
            height: 400.0,
        };
        assert_eq!(current_from_scroll(&milestones, viewport), 2);
    }

    #[test]
    fn test_just_before_center_keeps_previous() {
        let milestones = five_milestones();
        let viewport = Viewport {
            scroll_top: 299.0,
            height: 400.0,
        };
        assert_eq!(current_from_scroll(&milestones, viewport), 1);
    }

    #[test]
    fn test_top_of_page_is_zero() {
        let milestones = vec![MilestoneLayout::new(500.0, 100.0)];
        let viewport = Viewport {
            scroll_top: 0.0,
            height: 200.0,
        };
        assert_eq!(current_from_scroll(&milestones, viewport), 0);
    }

    #[test]
    fn test_scrolled_past_end_picks_last() {
        let milestones = five_milestones();
        let viewport = Viewport {
            scroll_top: 5000.0,
            height: 400.0,
        };
        assert_eq!(current_from_scroll(&milestones, viewport), 4);
    }

    #[test]
    fn test_offset_index_bounds() {
        assert_eq!(offset_index(0, -1, 5), None);
        assert_eq!(offset_index(4, 1, 5), None);
        assert_eq!(offset_index(2, 1, 5), Some(3));
        assert_eq!(offset_index(2, -2, 5), Some(0));
        assert_eq!(offset_index(0, 0, 0), None);
    }
}
