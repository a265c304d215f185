//! Main header widget: product title, architecture tabs, status line

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Tabs, Widget},
};

use dieviz_core::Architecture;

use crate::theme::{icons::IconSet, palette, styles};

/// Widget displaying the product banner and the architecture toggle tabs
pub struct MainHeader {
    arch: Architecture,
    icons: IconSet,
}

impl MainHeader {
    pub fn new(arch: Architecture, icons: IconSet) -> Self {
        Self { arch, icons }
    }

    fn title_line(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                self.arch.product(),
                styles::accent_bold().add_modifier(Modifier::UNDERLINED),
            ),
            Span::raw("  "),
            Span::styled(self.arch.tagline(), styles::text_secondary()),
        ])
    }

    fn status_line(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled(self.icons.dot(), Style::default().fg(palette::STATUS_GREEN)),
            Span::styled(" SYSTEM ONLINE", styles::accent()),
        ])
    }

    fn render_arch_tabs(&self, area: Rect, buf: &mut Buffer) {
        let titles = [Architecture::Hopper, Architecture::Blackwell]
            .iter()
            .map(|arch| Line::from(format!(" {} ", arch.short_label())))
            .collect::<Vec<_>>();
        let selected = match self.arch {
            Architecture::Hopper => 0,
            Architecture::Blackwell => 1,
        };

        Tabs::new(titles)
            .select(selected)
            .style(styles::text_muted())
            .highlight_style(styles::selected_unit())
            .divider("│")
            .render(area, buf);
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let rows = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(inner);

        // Row 0: product banner left, status right
        let cols = Layout::horizontal([Constraint::Min(10), Constraint::Length(16)]).split(rows[0]);
        Paragraph::new(self.title_line()).render(cols[0], buf);
        Paragraph::new(self.status_line())
            .alignment(ratatui::layout::Alignment::Right)
            .render(cols[1], buf);

        if inner.height < 2 {
            return;
        }

        // Row 1: architecture tabs left, process note right
        let cols = Layout::horizontal([Constraint::Min(14), Constraint::Length(30)]).split(rows[1]);
        self.render_arch_tabs(cols[0], buf);
        Paragraph::new(Line::from(Span::styled(
            self.arch.process_note(),
            styles::text_muted(),
        )))
        .alignment(ratatui::layout::Alignment::Right)
        .render(cols[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_shows_product_and_status() {
        let mut term = TestTerminal::new();
        let header = MainHeader::new(Architecture::Hopper, IconSet::default());
        let area = Rect::new(0, 0, 80, 4);
        term.render_widget(header, area);

        assert!(term.buffer_contains("NVIDIA H100"));
        assert!(term.buffer_contains("HOPPER ARCHITECTURE VISUALIZER"));
        assert!(term.buffer_contains("SYSTEM ONLINE"));
        assert!(term.buffer_contains("H100"));
        assert!(term.buffer_contains("B200"));
    }

    #[test]
    fn test_header_tracks_variant() {
        let mut term = TestTerminal::new();
        let header = MainHeader::new(Architecture::Blackwell, IconSet::default());
        term.render_widget(header, Rect::new(0, 0, 80, 4));

        assert!(term.buffer_contains("NVIDIA B200"));
        assert!(term.buffer_contains("208B TRANSISTORS"));
    }
}
