//! SMSP-quadrant view
//!
//! One processing block: the pipeline front-end stacked on top (L0 cache,
//! warp scheduler, dispatch, register file), the compute columns in the
//! middle (INT32, 2×FP32, FP64, tensor core), and the LD/ST + SFU groups
//! along the bottom. On Blackwell the tensor-core column carries the TMEM
//! strip underneath it.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::Line,
    widgets::{Paragraph, Widget},
};

use dieviz_core::Architecture;

use super::{render_bar, render_cell, TargetTracker};
use crate::theme::{palette, styles};

/// Maximum useful width; wider terminals get the block centered
const MAX_WIDTH: u16 = 64;

/// The processing-block (SMSP quadrant) diagram
pub struct ProcessingBlockView {
    arch: Architecture,
    cursor: usize,
}

impl ProcessingBlockView {
    pub fn new(arch: Architecture, cursor: usize) -> Self {
        Self { arch, cursor }
    }

    fn warp_label(&self) -> &'static str {
        match self.arch {
            Architecture::Hopper => "WARP SCHEDULER (12 warps, 32 thread/clk)",
            Architecture::Blackwell => "WARP SCHEDULER (16 warps, 32 thread/clk)",
        }
    }

    fn tensor_generation(&self) -> &'static str {
        match self.arch {
            Architecture::Hopper => "4th GENERATION",
            Architecture::Blackwell => "5th GEN (FP4/FP6)",
        }
    }

    fn render_pipeline_bars(&self, buf: &mut Buffer, areas: &[Rect], tracker: &mut TargetTracker) {
        let bars = [
            ("L0 INSTRUCTION CACHE", palette::UNIT_CACHE),
            (self.warp_label(), palette::UNIT_SCHEDULER),
            ("DISPATCH UNIT (32 thread/clk)", palette::UNIT_SCHEDULER),
            ("REGISTER FILE (16,384 × 32-bit)", palette::UNIT_CACHE),
        ];
        for (area, (label, color)) in areas.iter().zip(bars) {
            let style = if tracker.advance() {
                styles::selected_unit()
            } else {
                styles::unit(color)
            };
            render_bar(buf, *area, label, style);
        }
    }

    fn render_compute_grid(&self, buf: &mut Buffer, area: Rect, tracker: &mut TargetTracker) {
        let columns = Layout::horizontal([
            Constraint::Fill(2),
            Constraint::Fill(2),
            Constraint::Fill(2),
            Constraint::Fill(2),
            Constraint::Fill(3),
        ])
        .split(area);

        let scalar = [
            ("INT32", palette::UNIT_COMPUTE),
            ("FP32", palette::UNIT_INTERFACE),
            ("FP32", palette::UNIT_INTERFACE),
            ("FP64", palette::UNIT_INTERCONNECT),
        ];
        for (column, (label, color)) in columns.iter().zip(scalar) {
            let style = if tracker.advance() {
                styles::selected_unit()
            } else {
                styles::unit(color)
            };
            render_cell(buf, *column, &[label, "×16"], style);
        }

        // Tensor-core column; Blackwell reserves its bottom strip for TMEM
        let tensor_area = columns[4];
        let (core_area, tmem_area) = if self.arch == Architecture::Blackwell {
            let split = Layout::vertical([Constraint::Min(2), Constraint::Length(1)]).split(tensor_area);
            (split[0], Some(split[1]))
        } else {
            (tensor_area, None)
        };

        let style = if tracker.advance() {
            styles::selected_unit()
        } else {
            styles::unit_bold(palette::UNIT_COMPUTE)
        };
        render_cell(buf, core_area, &["TENSOR", "CORE", self.tensor_generation()], style);

        if let Some(tmem_area) = tmem_area {
            let style = if tracker.advance() {
                styles::selected_unit()
            } else {
                styles::unit(palette::UNIT_COMPUTE)
            };
            render_cell(buf, tmem_area, &["TMEM (TENSOR MEMORY)"], style);
        }
    }

    fn render_footer_groups(&self, buf: &mut Buffer, area: Rect, tracker: &mut TargetTracker) {
        let groups =
            Layout::horizontal([Constraint::Fill(3), Constraint::Fill(1)]).split(area);

        let style = if tracker.advance() {
            styles::selected_unit()
        } else {
            styles::unit(palette::UNIT_SFU)
        };
        render_cell(buf, groups[0], &["LD/ST UNITS (8x)"], style);

        let style = if tracker.advance() {
            styles::selected_unit()
        } else {
            styles::unit(palette::UNIT_SFU)
        };
        render_cell(buf, groups[1], &["SFU (4x)"], style);
    }
}

impl Widget for ProcessingBlockView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut tracker = TargetTracker::new(self.cursor);

        // Center the block on wide terminals
        let width = area.width.min(MAX_WIDTH);
        let x = area.x + (area.width - width) / 2;
        let area = Rect::new(x, area.y, width, area.height);

        let rows = Layout::vertical([
            Constraint::Length(1), // Title
            Constraint::Length(1), // L0
            Constraint::Length(1), // Warp scheduler
            Constraint::Length(1), // Dispatch
            Constraint::Length(1), // Register file
            Constraint::Min(5),    // Compute grid
            Constraint::Length(2), // LD/ST + SFU
        ])
        .split(area);

        Paragraph::new(Line::styled(
            "SMSP QUADRANT  (Processing Block Structure)",
            styles::accent_bold(),
        ))
        .alignment(Alignment::Center)
        .render(rows[0], buf);

        self.render_pipeline_bars(buf, &rows[1..5], &mut tracker);
        self.render_compute_grid(buf, rows[5], &mut tracker);
        self.render_footer_groups(buf, rows[6], &mut tracker);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn render_view(arch: Architecture) -> TestTerminal {
        let mut term = TestTerminal::with_size(80, 20);
        term.render_widget(
            ProcessingBlockView::new(arch, 0),
            Rect::new(0, 0, 80, 20),
        );
        term
    }

    #[test]
    fn test_pipeline_and_compute_render() {
        let term = render_view(Architecture::Hopper);
        assert!(term.buffer_contains("SMSP QUADRANT"));
        assert!(term.buffer_contains("L0 INSTRUCTION CACHE"));
        assert!(term.buffer_contains("WARP SCHEDULER (12 warps"));
        assert!(term.buffer_contains("REGISTER FILE"));
        assert!(term.buffer_contains("INT32"));
        assert!(term.buffer_contains("TENSOR"));
        assert!(term.buffer_contains("4th GENERATION"));
        assert!(term.buffer_contains("LD/ST UNITS (8x)"));
        assert!(term.buffer_contains("SFU (4x)"));
    }

    #[test]
    fn test_blackwell_gets_tmem_strip_and_wider_warp_tracking() {
        let term = render_view(Architecture::Blackwell);
        assert!(term.buffer_contains("WARP SCHEDULER (16 warps"));
        assert!(term.buffer_contains("5th GEN (FP4/FP6)"));
        assert!(term.buffer_contains("TMEM"));
    }

    #[test]
    fn test_hopper_has_no_tmem_strip() {
        let term = render_view(Architecture::Hopper);
        assert!(!term.buffer_contains("TMEM"));
    }
}
