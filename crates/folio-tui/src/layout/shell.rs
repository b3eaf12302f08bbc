//! Main shell renderer.
//!
//! Regions come from [`ScreenLayout`]:
//! 1. Status Bar (top, 1 line)
//! 2. Divider Pane (5 lines)
//! 3. Timeline Pane with the navigation dot column on its right
//! 4. Footer Hints (bottom, 1 line)

use folio_engine::InteractionState;
use ratatui::{buffer::Buffer, style::Style, Frame};

use super::regions::ScreenLayout;
use crate::{
    surface::TerminalSurface,
    theme::Theme,
    widgets::{DividerBar, FooterHints, StatusBar, StatusBarContent, TimelineView},
};

const DOT_ACTIVE: &str = "●";
const DOT_INACTIVE: &str = "○";

/// Render the whole screen for the surface's current layout.
pub fn render_shell(
    frame: &mut Frame<'_>,
    surface: &TerminalSurface,
    state: &InteractionState,
    theme: &Theme,
) {
    let layout = surface.layout();

    if layout.is_too_small() {
        render_too_small(frame, theme);
        return;
    }

    let status_content = StatusBarContent::from_state(surface, state);
    frame.render_widget(StatusBar::new(&status_content, theme), layout.status);

    frame.render_widget(DividerBar::new(surface.divider(), theme), layout.divider);
    frame.render_widget(TimelineView::new(surface, theme), layout.timeline);
    render_nav_dots(frame.buffer_mut(), layout, surface, theme);

    let hints = FooterHints::default_hints();
    let footer = FooterHints::new(&hints, theme).label(if state.is_animating {
        "Animating"
    } else {
        "Timeline"
    });
    frame.render_widget(footer, layout.footer);
}

/// One dot per milestone; dots that do not fit the column are skipped.
fn render_nav_dots(
    buf: &mut Buffer,
    layout: &ScreenLayout,
    surface: &TerminalSurface,
    theme: &Theme,
) {
    for index in 0..surface.portfolio().len() {
        let Some((x, y)) = layout.nav_dot_cell(index) else {
            break;
        };
        let (symbol, color) = if surface.is_nav_dot_active(index) {
            (DOT_ACTIVE, theme.primary)
        } else {
            (DOT_INACTIVE, theme.muted)
        };
        buf.set_string(x, y, symbol, Style::default().fg(color));
    }
}

/// Render "terminal too small" warning.
fn render_too_small(frame: &mut Frame<'_>, theme: &Theme) {
    let area = frame.area();
    let status_content = StatusBarContent::too_small();
    frame.render_widget(StatusBar::new(&status_content, theme), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_to_string, create_test_terminal_sized};
    use folio_engine::{Layout as _, Portfolio, VisualSink};

    fn state() -> InteractionState {
        InteractionState {
            is_dragging: false,
            current_milestone: 0,
            divider_position: 50.0,
            is_animating: false,
        }
    }

    fn render(surface: &TerminalSurface, width: u16, height: u16) -> String {
        let mut terminal = create_test_terminal_sized(width, height);
        let theme = Theme::default();
        terminal
            .draw(|frame| render_shell(frame, surface, &state(), &theme))
            .expect("draw");
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_shell_regions_render() {
        let mut surface = TerminalSurface::new(Portfolio::sample(), 80, 24);
        surface.set_nav_dot_active(0, true);
        let text = render(&surface, 80, 24);
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].contains("\"From DNA to Stars\""));
        assert!(lines[0].contains("1/5 2012"));
        assert!(lines[0].contains("divider 50%"));
        assert!(lines[1].contains(" STAR "));
        assert!(lines[6].contains(" Timeline "));
        assert!(lines[7].ends_with("●"));
        assert!(lines[8].ends_with("○"));
        assert!(lines[23].contains("[q] quit"));
    }

    #[test]
    fn test_too_small_shows_warning_only() {
        let surface = TerminalSurface::new(Portfolio::sample(), 30, 10);
        assert!(!surface.has_anchor(folio_engine::Anchor::Timeline));
        let text = render(&surface, 30, 10);
        assert!(text.contains("Terminal too small"));
        assert!(!text.contains("Timeline"));
    }
}
