//! Screen regions and the geometry shared by rendering and input mapping.
//!
//! ```text
//! ● status bar                                   (1 line)
//! ┌ STAR ──────────────────────────── DNA ┐
//! │ ·  ✦  ·  ·  ✦  ·  ┃░░░░░░░░░░░░░░░░░░ │      divider pane (5 lines)
//! └───────────────────────────────────────┘
//! ┌ Timeline ─────────────────────────────┐ ●
//! │ milestones...                         │ ○    timeline + nav dots
//! └───────────────────────────────────────┘
//! footer hints                                   (1 line)
//! ```

use ratatui::layout::{Constraint, Layout, Margin, Rect};

/// Minimum terminal width.
pub const MIN_WIDTH: u16 = 40;
/// Minimum terminal height.
pub const MIN_HEIGHT: u16 = 12;
/// Height of the divider pane including borders.
pub const DIVIDER_HEIGHT: u16 = 5;
/// Width of the navigation dot column.
pub const NAV_WIDTH: u16 = 3;
/// Columns either side of the handle that still grab it.
pub const HANDLE_GRAB_RADIUS: u16 = 2;

/// Computed regions for one terminal size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    pub area: Rect,
    pub status: Rect,
    pub divider: Rect,
    /// Divider bar inside the pane border; its width maps to 0–100%.
    pub divider_inner: Rect,
    pub timeline: Rect,
    /// Scrollable milestone viewport inside the pane border.
    pub timeline_inner: Rect,
    pub nav: Rect,
    pub footer: Rect,
}

impl ScreenLayout {
    /// Split `area` into regions. Below the minimum size every region but
    /// `area` is empty.
    pub fn compute(area: Rect) -> Self {
        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            return Self {
                area,
                ..Self::default()
            };
        }

        let [status, divider, main, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(DIVIDER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        let [timeline, nav] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(NAV_WIDTH)]).areas(main);

        let margin = Margin {
            horizontal: 1,
            vertical: 1,
        };

        Self {
            area,
            status,
            divider,
            divider_inner: divider.inner(margin),
            timeline,
            timeline_inner: timeline.inner(margin),
            nav,
            footer,
        }
    }

    pub fn is_too_small(&self) -> bool {
        self.divider_inner.is_empty() || self.timeline_inner.is_empty()
    }

    /// Span of the divider bar used for percentage mapping. The last
    /// column maps to exactly 100%.
    pub fn divider_span(&self) -> f64 {
        f64::from(self.divider_inner.width.saturating_sub(1).max(1))
    }

    /// Column of the handle for a divider position.
    pub fn handle_column(&self, position: f64) -> u16 {
        self.divider_inner.x + handle_offset(self.divider_inner.width, position)
    }

    /// Whether `(column, row)` is close enough to the handle to grab it.
    pub fn grabs_handle(&self, column: u16, row: u16, position: f64) -> bool {
        let in_rows = row >= self.divider_inner.y && row < self.divider_inner.bottom();
        in_rows && column.abs_diff(self.handle_column(position)) <= HANDLE_GRAB_RADIUS
    }

    /// Cell of navigation dot `index`, if it fits.
    pub fn nav_dot_cell(&self, index: usize) -> Option<(u16, u16)> {
        let row = self.nav.y.checked_add(1)?.checked_add(u16::try_from(index).ok()?)?;
        (row < self.nav.bottom().saturating_sub(1)).then_some((self.nav.x + 1, row))
    }

    /// Navigation dot under `(column, row)`.
    pub fn nav_dot_at(&self, column: u16, row: u16, count: usize) -> Option<usize> {
        (0..count).find(|&i| self.nav_dot_cell(i) == Some((column, row)))
    }

    /// Whether `(column, row)` is over the scrollable timeline.
    pub fn over_timeline(&self, column: u16, row: u16) -> bool {
        self.timeline.contains(ratatui::layout::Position::new(column, row))
    }
}

/// Offset of the handle within a bar `width` columns wide.
pub fn handle_offset(width: u16, position: f64) -> u16 {
    let span = f64::from(width.saturating_sub(1).max(1));
    let offset = (position.clamp(0.0, 100.0) / 100.0 * span).round() as u16;
    offset.min(width.saturating_sub(1))
}
