//! Divider pane: both background layers split by the draggable handle.
//!
//! The star layer fills the bar left of the handle and the DNA layer
//! fills it right of the handle, each faded by its crossfade opacity.

use folio_engine::Layer;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Widget},
};

use crate::layout::handle_offset;
use crate::surface::DividerVisual;
use crate::theme::Theme;

const HANDLE: &str = "┃";
const DNA_FILL: &str = "░";

/// Divider bar widget.
pub struct DividerBar<'a> {
    divider: &'a DividerVisual,
    theme: &'a Theme,
}

impl<'a> DividerBar<'a> {
    pub fn new(divider: &'a DividerVisual, theme: &'a Theme) -> Self {
        Self { divider, theme }
    }

    fn label(&self, layer: Layer, active: bool) -> Line<'static> {
        let style = if active {
            Style::default()
                .fg(self.theme.layer(layer))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.theme.muted)
        };
        Line::styled(format!(" {} ", layer.label()), style)
    }
}

/// Sparse star field glyph for a cell.
fn star_glyph(x: u16, y: u16) -> &'static str {
    let seed = u32::from(x) * 7 + u32::from(y) * 13;
    if seed % 11 == 0 {
        "✦"
    } else if seed % 3 == 0 {
        "·"
    } else {
        " "
    }
}

impl Widget for DividerBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let d = self.divider;
        let border = if d.dragging {
            self.theme.border_focused
        } else {
            self.theme.border
        };

        let block = Block::bordered()
            .border_style(Style::default().fg(border))
            .title(self.label(Layer::Star, d.star_label).left_aligned())
            .title(self.label(Layer::Dna, d.dna_label).right_aligned());
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        let handle = inner.x + handle_offset(inner.width, d.position);
        let star_color = self.theme.layer_faded(Layer::Star, d.star.opacity);
        let dna_color = self.theme.layer_faded(Layer::Dna, d.dna.opacity);
        let handle_color = if d.dragging {
            self.theme.primary
        } else {
            self.theme.text
        };

        for y in inner.y..inner.bottom() {
            for x in inner.x..inner.right() {
                let Some(cell) = buf.cell_mut((x, y)) else {
                    continue;
                };
                if x == handle {
                    cell.set_symbol(HANDLE).set_fg(handle_color);
                } else if x < handle {
                    if d.star.visible {
                        cell.set_symbol(star_glyph(x, y)).set_fg(star_color);
                    }
                } else if d.dna.visible {
                    cell.set_symbol(DNA_FILL).set_fg(dna_color);
                }
            }
        }
    }
}
