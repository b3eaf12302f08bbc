//! Status bar widget for the top of the TUI.
//!
//! Format: `● "Title" │ 2/5 1984 │ divider 50% │ dragging`

use folio_engine::InteractionState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::layout::{MIN_HEIGHT, MIN_WIDTH};
use crate::surface::TerminalSurface;
use crate::theme::Theme;

/// Status bar content.
#[derive(Debug, Clone, Default)]
pub struct StatusBarContent {
    /// Portfolio title.
    pub title: String,
    /// Current milestone (e.g., "2/5 1984").
    pub milestone: Option<String>,
    /// Divider readout (e.g., "divider 50%").
    pub divider: Option<String>,
    /// Whether a drag is in progress.
    pub dragging: bool,
    /// Trailing hint (e.g., "→ Resize to at least 40x12").
    pub hint: Option<String>,
}

impl StatusBarContent {
    /// Build content from the surface and controller state.
    pub fn from_state(surface: &TerminalSurface, state: &InteractionState) -> Self {
        let milestones = &surface.portfolio().milestones;
        let milestone = milestones.get(state.current_milestone).map(|m| {
            let position = format!("{}/{}", state.current_milestone + 1, milestones.len());
            if m.year.is_empty() {
                position
            } else {
                format!("{position} {}", m.year)
            }
        });

        Self {
            title: surface.portfolio().title.clone(),
            milestone,
            divider: Some(format!("divider {:.0}%", state.divider_position)),
            dragging: state.is_dragging,
            hint: None,
        }
    }

    /// Create a "terminal too small" warning.
    pub fn too_small() -> Self {
        Self {
            title: "Terminal too small".into(),
            hint: Some(format!("Resize to at least {MIN_WIDTH}x{MIN_HEIGHT}")),
            ..Self::default()
        }
    }
}

/// Status bar widget.
pub struct StatusBar<'a> {
    content: &'a StatusBarContent,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(content: &'a StatusBarContent, theme: &'a Theme) -> Self {
        Self { content, theme }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let separator = || Span::styled(" │ ", Style::default().fg(self.theme.muted));

        let mut spans = vec![
            Span::styled("● ", Style::default().fg(self.theme.primary)),
            Span::styled(
                format!("\"{}\"", self.content.title),
                Style::default().fg(self.theme.text),
            ),
        ];

        if let Some(ref milestone) = self.content.milestone {
            spans.push(separator());
            spans.push(Span::styled(milestone, Style::default().fg(self.theme.subtext)));
        }

        if let Some(ref divider) = self.content.divider {
            spans.push(separator());
            spans.push(Span::styled(divider, Style::default().fg(self.theme.subtext)));
        }

        if self.content.dragging {
            spans.push(separator());
            spans.push(Span::styled(
                "dragging",
                Style::default()
                    .fg(self.theme.primary)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        if let Some(ref hint) = self.content.hint {
            spans.push(separator());
            spans.push(Span::styled(
                format!("→ {hint}"),
                Style::default().fg(self.theme.primary),
            ));
        }

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(self.theme.surface))
            .render(area, buf);
    }
}
