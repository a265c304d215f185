//! Specification sheet view
//!
//! Static, hand-authored reference values; the die layout generator is
//! deliberately not consulted here.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Row, Table, Widget, Wrap},
};

use dieviz_core::{die_features, die_stats, Architecture};

use crate::theme::{palette, styles};

/// The Specifications tab: stat rows plus the key-features list
pub struct SpecTable {
    arch: Architecture,
}

impl SpecTable {
    pub fn new(arch: Architecture) -> Self {
        Self { arch }
    }
}

impl Widget for SpecTable {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let stats = die_stats(self.arch);
        let features = die_features(self.arch);

        let rows_area = Layout::vertical([
            Constraint::Length(1),                      // Title
            Constraint::Length(stats.len() as u16 + 1), // Stats table + spacer
            Constraint::Length(1),                      // Features title
            Constraint::Min(4),                         // Features
        ])
        .split(area);

        let title = format!("{} TECHNICAL SPECIFICATIONS", self.arch.short_label());
        Paragraph::new(Line::from(Span::styled(title, styles::accent_bold())))
            .alignment(Alignment::Center)
            .render(rows_area[0], buf);

        let rows = stats.iter().map(|stat| {
            Row::new(vec![
                Span::styled(stat.label, styles::text_secondary()),
                Span::styled(stat.value, styles::text_primary()),
                Span::styled(stat.detail, styles::text_muted()),
            ])
        });
        Table::new(
            rows,
            [
                Constraint::Length(28),
                Constraint::Length(16),
                Constraint::Min(16),
            ],
        )
        .column_spacing(2)
        .render(rows_area[1], buf);

        Paragraph::new(Line::from(Span::styled(
            "KEY ARCHITECTURAL FEATURES",
            styles::unit_bold(palette::STATUS_YELLOW),
        )))
        .render(rows_area[2], buf);

        let mut lines = Vec::with_capacity(features.len());
        for feature in features {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<28}", feature.title), styles::text_primary()),
                Span::styled(feature.details, styles::text_secondary()),
            ]));
        }
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(rows_area[3], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_hopper_sheet_figures() {
        let mut term = TestTerminal::with_size(100, 24);
        term.render_widget(SpecTable::new(Architecture::Hopper), Rect::new(0, 0, 100, 24));

        assert!(term.buffer_contains("H100 TECHNICAL SPECIFICATIONS"));
        assert!(term.buffer_contains("50 MB"));
        assert!(term.buffer_contains("16,896"));
        assert!(term.buffer_contains("Transformer Engine"));
    }

    #[test]
    fn test_blackwell_sheet_figures() {
        let mut term = TestTerminal::with_size(100, 24);
        term.render_widget(SpecTable::new(Architecture::Blackwell), Rect::new(0, 0, 100, 24));

        assert!(term.buffer_contains("B200 TECHNICAL SPECIFICATIONS"));
        assert!(term.buffer_contains("126 MB"));
        assert!(term.buffer_contains("Dual-Die Architecture"));
        assert!(!term.buffer_contains("50 MB"));
    }
}
