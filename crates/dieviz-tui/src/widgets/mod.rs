//! Widgets for the DieViz TUI

pub mod detail_panel;
pub mod footer;
pub mod full_die;
pub mod header;
pub mod modal_overlay;
pub mod processing_block;
pub mod single_sm;
pub mod spec_table;
pub mod tab_bar;

pub use detail_panel::DetailPanel;
pub use footer::FooterBar;
pub use full_die::FullDieView;
pub use header::MainHeader;
pub use processing_block::ProcessingBlockView;
pub use single_sm::SingleSmView;
pub use spec_table::SpecTable;
pub use tab_bar::ViewTabs;

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Paragraph, Widget};

/// Walks a view's activation targets in render order.
///
/// The diagram widgets render their interactive regions in exactly the
/// order `dieviz_app::targets` builds them; each region calls [`advance`]
/// once, and the call reports whether the region is under the cursor.
/// Disabled slots never advance the tracker, mirroring their absence from
/// the target list.
///
/// [`advance`]: TargetTracker::advance
pub(crate) struct TargetTracker {
    next: usize,
    cursor: usize,
}

impl TargetTracker {
    pub(crate) fn new(cursor: usize) -> Self {
        Self { next: 0, cursor }
    }

    /// Claim the next target index; true when it is the cursor position
    pub(crate) fn advance(&mut self) -> bool {
        let selected = self.next == self.cursor;
        self.next += 1;
        selected
    }
}

/// Paint a one-line, horizontally centered label on the middle row of `area`
pub(crate) fn render_bar(buf: &mut Buffer, area: Rect, text: &str, style: Style) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let row = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(style)
        .render(row, buf);
}

/// Fill a region with `style` and center `lines` vertically within it
pub(crate) fn render_cell(buf: &mut Buffer, area: Rect, lines: &[&str], style: Style) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(' ');
                cell.set_style(style);
            }
        }
    }
    let start = area.y + area.height.saturating_sub(lines.len() as u16) / 2;
    for (i, line) in lines.iter().enumerate() {
        let y = start + i as u16;
        if y >= area.y + area.height {
            break;
        }
        Paragraph::new(*line)
            .alignment(Alignment::Center)
            .style(style)
            .render(Rect::new(area.x, y, area.width, 1), buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_reports_cursor_position_once() {
        let mut tracker = TargetTracker::new(2);
        assert!(!tracker.advance());
        assert!(!tracker.advance());
        assert!(tracker.advance());
        assert!(!tracker.advance());
    }

    #[test]
    fn test_render_bar_in_empty_area_is_noop() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 3));
        render_bar(&mut buf, Rect::new(0, 0, 0, 0), "hi", Style::default());
    }

    #[test]
    fn test_render_cell_centers_text() {
        let area = Rect::new(0, 0, 7, 3);
        let mut buf = Buffer::empty(area);
        render_cell(&mut buf, area, &["AB"], Style::default());
        // Centered on the middle row
        assert_eq!(buf[(2, 1)].symbol(), "A");
        assert_eq!(buf[(3, 1)].symbol(), "B");
    }
}
