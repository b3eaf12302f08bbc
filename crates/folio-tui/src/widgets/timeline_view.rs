//! Scrollable milestone list.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Widget},
};

use crate::surface::TerminalSurface;
use crate::theme::Theme;

/// Timeline pane widget. Draws the surface's milestone blocks from its
/// current scroll offset.
pub struct TimelineView<'a> {
    surface: &'a TerminalSurface,
    theme: &'a Theme,
}

impl<'a> TimelineView<'a> {
    pub fn new(surface: &'a TerminalSurface, theme: &'a Theme) -> Self {
        Self { surface, theme }
    }
}

impl Widget for TimelineView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_style(Style::default().fg(self.theme.border))
            .title(Line::styled(" Timeline ", Style::default().fg(self.theme.subtext)));
        let inner = block.inner(area);
        block.render(area, buf);

        let scroll_top = self.surface.scroll_top();
        let width = usize::from(inner.width);

        for (index, milestone) in self.surface.blocks().iter().enumerate() {
            let active = self.surface.is_milestone_active(index);
            for (offset, line) in (0u16..).zip(&milestone.lines) {
                let row = milestone.top.saturating_add(offset);
                if row < scroll_top || row - scroll_top >= inner.height {
                    continue;
                }
                let y = inner.y + (row - scroll_top);

                let (text, style) = if offset == 0 {
                    let marker = if active { "▸ " } else { "  " };
                    let color = if active {
                        self.theme.primary
                    } else {
                        self.theme.text
                    };
                    (
                        format!("{marker}{line}"),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    )
                } else {
                    (format!("  {line}"), Style::default().fg(self.theme.subtext))
                };
                buf.set_stringn(inner.x, y, text, width, style);
            }
        }
    }
}
