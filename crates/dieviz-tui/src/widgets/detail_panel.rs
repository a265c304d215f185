//! Detail panel modal
//!
//! Renders the activated unit's descriptor (title, description, bullet
//! sections, technical-specification grid) as a centered modal over a
//! dimmed background. The panel body scrolls; the scroll offset lives in
//! the application state so reopening always starts at the top.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use dieviz_core::UnitInfo;

use super::modal_overlay::{centered_rect_percent, dim_background, render_shadow};
use crate::theme::{icons::IconSet, palette, styles};

/// The modal descriptor view for one unit
pub struct DetailPanel {
    info: &'static UnitInfo,
    scroll: u16,
    icons: IconSet,
}

impl DetailPanel {
    pub fn new(info: &'static UnitInfo, scroll: u16, icons: IconSet) -> Self {
        Self { info, scroll, icons }
    }

    fn body_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        lines.push(Line::from(Span::styled(
            self.info.description,
            styles::text_secondary().add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::default());

        for section in self.info.sections {
            lines.push(Line::from(Span::styled(
                section.title.to_uppercase(),
                styles::unit_bold(palette::UNIT_INTERCONNECT),
            )));
            for item in section.content {
                lines.push(Line::from(vec![
                    Span::styled(format!(" {} ", self.icons.bullet()), styles::accent()),
                    Span::styled(*item, styles::text_primary()),
                ]));
            }
            lines.push(Line::default());
        }

        if !self.info.specs.is_empty() {
            lines.push(Line::from(Span::styled(
                "TECHNICAL SPECIFICATIONS",
                styles::unit_bold(palette::STATUS_GREEN),
            )));
            for spec in self.info.specs {
                lines.push(Line::from(vec![
                    Span::styled(format!(" {:<20}", spec.label), styles::text_muted()),
                    Span::styled(spec.value, styles::text_primary()),
                ]));
            }
        }

        lines
    }
}

impl Widget for DetailPanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        let modal = centered_rect_percent(70, 80, area);
        render_shadow(buf, modal);
        Clear.render(modal, buf);

        let title = format!(" {} ", self.info.title);
        let block = styles::modal_block(&title);
        let inner = block.inner(modal);
        block.render(modal, buf);

        if inner.height < 2 {
            return;
        }

        let rows = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);

        Paragraph::new(self.body_lines())
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(rows[0], buf);

        Paragraph::new(Line::from(Span::styled(
            "esc close · ↑/↓ scroll",
            styles::text_muted(),
        )))
        .alignment(Alignment::Center)
        .render(rows[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use dieviz_core::{unit_info, Architecture, UnitKey};

    fn render_panel(key: UnitKey, scroll: u16) -> TestTerminal {
        let info = unit_info(Architecture::Hopper, key).unwrap();
        let mut term = TestTerminal::with_size(100, 30);
        let area = Rect::new(0, 0, 100, 30);
        term.render_widget(DetailPanel::new(info, scroll, IconSet::default()), area);
        term
    }

    #[test]
    fn test_panel_shows_descriptor_content() {
        let term = render_panel(UnitKey::TensorCore, 0);
        assert!(term.buffer_contains("4th Generation Tensor Core"));
        assert!(term.buffer_contains("MATRIX OPERATIONS"));
        assert!(term.buffer_contains("TECHNICAL SPECIFICATIONS"));
        assert!(term.buffer_contains("esc close"));
    }

    #[test]
    fn test_panel_render_is_deterministic() {
        // open → dismiss → open must show identical content
        let first = render_panel(UnitKey::L2Cache, 0).content();
        let second = render_panel(UnitKey::L2Cache, 0).content();
        assert_eq!(first, second);
    }

    #[test]
    fn test_scroll_moves_body_but_not_title() {
        let top = render_panel(UnitKey::Gpc, 0);
        let scrolled = render_panel(UnitKey::Gpc, 3);
        assert!(top.buffer_contains("Graphics Processing Cluster"));
        assert!(scrolled.buffer_contains("Graphics Processing Cluster"));
        assert_ne!(top.content(), scrolled.content());
    }
}
