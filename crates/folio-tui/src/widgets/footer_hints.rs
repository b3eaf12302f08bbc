//! Footer keybinding hints.
//!
//! Format: `Timeline              [←/→] divider │ [↑/↓] milestone │ [q] quit`

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

/// A single keybinding hint.
#[derive(Debug, Clone)]
pub struct KeyHint {
    /// The key or key combination (e.g., "Home", "←/→").
    pub key: String,
    /// The action description (e.g., "first", "divider").
    pub action: String,
}

impl KeyHint {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Footer hints widget: optional label on the left, hints right-aligned.
pub struct FooterHints<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
    label: Option<&'a str>,
}

impl<'a> FooterHints<'a> {
    pub fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self {
            hints,
            theme,
            label: None,
        }
    }

    /// Set the left-hand label.
    #[must_use]
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    /// Hints for the timeline screen.
    pub fn default_hints() -> Vec<KeyHint> {
        vec![
            KeyHint::new("←/→", "divider"),
            KeyHint::new("↑/↓", "milestone"),
            KeyHint::new("Home/End", "ends"),
            KeyHint::new("q", "quit"),
        ]
    }
}

impl Widget for FooterHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut left_spans = Vec::new();
        let mut right_spans = Vec::new();

        if let Some(label) = self.label {
            left_spans.push(Span::styled(label, Style::default().fg(self.theme.subtext)));
        }

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                right_spans.push(Span::styled(" │ ", Style::default().fg(self.theme.muted)));
            }
            right_spans.push(Span::styled("[", Style::default().fg(self.theme.muted)));
            right_spans.push(Span::styled(&hint.key, Style::default().fg(self.theme.primary)));
            right_spans.push(Span::styled("] ", Style::default().fg(self.theme.muted)));
            right_spans.push(Span::styled(&hint.action, Style::default().fg(self.theme.subtext)));
        }

        // Arrow glyphs are multi-byte, so pad by display width
        let left_width: usize = left_spans.iter().map(|s| s.content.width()).sum();
        let right_width: usize = right_spans.iter().map(|s| s.content.width()).sum();
        let padding = usize::from(area.width).saturating_sub(left_width + right_width);
        if padding > 0 {
            left_spans.push(Span::raw(" ".repeat(padding)));
        }
        left_spans.extend(right_spans);

        Paragraph::new(Line::from(left_spans))
            .style(Style::default().bg(self.theme.surface))
            .render(area, buf);
    }
}
