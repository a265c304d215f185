//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header (product title, architecture tabs, status)
    pub header: Rect,

    /// View tab bar
    pub tabs: Rect,

    /// Active view content
    pub content: Rect,

    /// Keybinding hints and cursor readout
    pub footer: Rect,
}

/// Split the full screen into the fixed chrome plus the content area
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(4), // Header (bordered, two inner rows)
        Constraint::Length(1), // View tabs
        Constraint::Min(10),   // Content
        Constraint::Length(1), // Footer
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        tabs: chunks[1],
        content: chunks[2],
        footer: chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_areas_are_contiguous() {
        let area = Rect::new(0, 0, 80, 24);
        let areas = create(area);

        assert_eq!(areas.header.height, 4);
        assert_eq!(areas.tabs.height, 1);
        assert_eq!(areas.footer.height, 1);
        assert_eq!(
            areas.header.height + areas.tabs.height + areas.content.height + areas.footer.height,
            area.height
        );
        assert_eq!(areas.tabs.y, 4);
        assert_eq!(areas.content.y, 5);
    }

    #[test]
    fn test_content_absorbs_extra_height() {
        let small = create(Rect::new(0, 0, 80, 24));
        let large = create(Rect::new(0, 0, 80, 50));
        assert_eq!(large.content.height - small.content.height, 26);
    }
}
