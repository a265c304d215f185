//! View tab bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Tabs, Widget},
};

use dieviz_app::ViewKind;

use crate::theme::styles;

/// Tabs for the four selectable views, numbered to match their hotkeys
pub struct ViewTabs {
    active: ViewKind,
}

impl ViewTabs {
    pub fn new(active: ViewKind) -> Self {
        Self { active }
    }
}

impl Widget for ViewTabs {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles = ViewKind::ALL
            .iter()
            .enumerate()
            .map(|(i, view)| Line::from(format!(" {} {} ", i + 1, view.label())))
            .collect::<Vec<_>>();

        // Left padding to line up with the header border
        let padded = Rect {
            x: area.x + 1,
            width: area.width.saturating_sub(2),
            ..area
        };

        Tabs::new(titles)
            .select(self.active.index())
            .style(styles::text_muted())
            .highlight_style(styles::selected_unit())
            .divider("│")
            .render(padded, buf);
    }
}
