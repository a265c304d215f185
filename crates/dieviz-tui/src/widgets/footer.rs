//! Footer bar: keybinding hints plus the cursor readout

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use dieviz_app::AppState;

use crate::theme::{icons::IconSet, styles};

/// One-row footer: hints on the left, variant summary and the unit under
/// the cursor on the right
pub struct FooterBar<'a> {
    state: &'a AppState,
    icons: IconSet,
}

impl<'a> FooterBar<'a> {
    pub fn new(state: &'a AppState, icons: IconSet) -> Self {
        Self { state, icons }
    }

    fn hints(&self) -> Line<'static> {
        let hint = |key: &'static str, action: &'static str| {
            vec![
                Span::styled(key, styles::keybinding()),
                Span::styled(action, styles::text_muted()),
            ]
        };

        let mut spans = Vec::new();
        if self.state.detail.is_open() {
            spans.extend(hint("esc", " close "));
            spans.extend(hint("↑↓", " scroll"));
        } else {
            spans.extend(hint("q", " quit "));
            spans.extend(hint("1-4", " view "));
            spans.extend(hint("←→", " units "));
            spans.extend(hint("↵", " open "));
            spans.extend(hint("a", " arch"));
        }
        Line::from(spans)
    }

    fn readout(&self) -> Line<'static> {
        let config = self.state.architecture.die_config();
        let mut spans = vec![Span::styled(
            format!(
                "{} · {} active SMs",
                self.state.architecture.short_label(),
                config.package_active_sms()
            ),
            styles::text_secondary(),
        )];

        if !self.state.detail.is_open() {
            if let Some(target) = self.state.current_target() {
                spans.push(Span::styled(
                    format!("  {} {}", self.icons.pointer(), target.label),
                    styles::accent(),
                ));
            }
        }
        Line::from(spans)
    }
}

impl Widget for FooterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cols = Layout::horizontal([Constraint::Min(20), Constraint::Length(44)]).split(area);
        Paragraph::new(self.hints()).render(cols[0], buf);
        Paragraph::new(self.readout())
            .alignment(Alignment::Right)
            .render(cols[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use dieviz_core::UnitKey;

    #[test]
    fn test_footer_shows_active_sm_figure() {
        let state = AppState::new();
        let mut term = TestTerminal::new();
        term.render_widget(FooterBar::new(&state, IconSet::default()), Rect::new(0, 0, 80, 1));

        assert!(term.buffer_contains("H100 · 132 active SMs"));
        assert!(term.buffer_contains("quit"));
    }

    #[test]
    fn test_footer_shows_cursor_target() {
        let state = AppState::new();
        let mut term = TestTerminal::new();
        term.render_widget(FooterBar::new(&state, IconSet::default()), Rect::new(0, 0, 80, 1));

        // Cursor starts on the PCIe bar
        assert!(term.buffer_contains("PCI Express"));
    }

    #[test]
    fn test_footer_switches_hints_when_panel_open() {
        let mut state = AppState::new();
        state.activate_unit(UnitKey::Gpc);
        let mut term = TestTerminal::new();
        term.render_widget(FooterBar::new(&state, IconSet::default()), Rect::new(0, 0, 80, 1));

        assert!(term.buffer_contains("close"));
        assert!(!term.buffer_contains("quit"));
    }

    #[test]
    fn test_footer_blackwell_figure() {
        let mut state = AppState::new();
        state.toggle_architecture();
        let mut term = TestTerminal::new();
        term.render_widget(FooterBar::new(&state, IconSet::default()), Rect::new(0, 0, 80, 1));

        assert!(term.buffer_contains("B200 · 264 active SMs"));
    }
}
