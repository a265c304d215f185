//! Single-SM detail view
//!
//! One generic SM broken into its four SMSP blocks, framed by the shared
//! L1 instruction cache on top and the TMA / shared-memory / texture-unit
//! sections below. This depicts a fixed substructure; disablement never
//! applies to it.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::Line,
    widgets::{Paragraph, Widget},
};

use dieviz_app::targets::SMSPS_PER_SM;

use super::{render_bar, render_cell, TargetTracker};
use crate::theme::{palette, styles};

/// The single-SM breakdown diagram.
///
/// Both variants share the same generic SM substructure, so no
/// architecture parameter is needed here.
pub struct SingleSmView {
    cursor: usize,
}

impl SingleSmView {
    pub fn new(cursor: usize) -> Self {
        Self { cursor }
    }

    /// One SMSP block: label row, four pipeline bars, one unit row
    fn render_smsp_block(
        &self,
        buf: &mut Buffer,
        area: Rect,
        smsp: usize,
        tracker: &mut TargetTracker,
    ) {
        let rows = Layout::vertical([
            Constraint::Length(1), // SMSP label
            Constraint::Length(1), // L0
            Constraint::Length(1), // Warp scheduler
            Constraint::Length(1), // Dispatch
            Constraint::Length(1), // Register file
            Constraint::Length(1), // Compute + footer cells
        ])
        .split(area);

        Paragraph::new(Line::styled(format!("SMSP {smsp}"), styles::text_muted()))
            .alignment(Alignment::Right)
            .render(rows[0], buf);

        let bars = [
            ("L0 Cache", palette::UNIT_CACHE),
            ("Warp Scheduler", palette::UNIT_SCHEDULER),
            ("Dispatch", palette::UNIT_SCHEDULER),
            ("Register File", palette::UNIT_CACHE),
        ];
        for (row, (label, color)) in rows[1..5].iter().zip(bars) {
            let style = if tracker.advance() {
                styles::selected_unit()
            } else {
                styles::unit(color)
            };
            render_bar(buf, *row, label, style);
        }

        let cells = [
            ("INT32", palette::UNIT_COMPUTE),
            ("FP32", palette::UNIT_INTERFACE),
            ("FP64", palette::UNIT_INTERCONNECT),
            ("TC", palette::UNIT_COMPUTE),
            ("LD/ST", palette::UNIT_SFU),
            ("SFU", palette::UNIT_SFU),
        ];
        let columns =
            Layout::horizontal(vec![Constraint::Ratio(1, cells.len() as u32); cells.len()])
                .split(rows[5]);
        for (column, (label, color)) in columns.iter().zip(cells) {
            let style = if tracker.advance() {
                styles::selected_unit()
            } else {
                styles::unit(color)
            };
            render_cell(buf, *column, &[label], style);
        }
    }
}

impl Widget for SingleSmView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut tracker = TargetTracker::new(self.cursor);

        let rows = Layout::vertical([
            Constraint::Length(1),  // Title
            Constraint::Length(1),  // L1 instruction cache
            Constraint::Min(12),    // 2×2 SMSP grid
            Constraint::Length(1),  // TMA
            Constraint::Length(1),  // Shared memory
            Constraint::Length(1),  // Texture units
        ])
        .split(area);

        Paragraph::new(Line::styled(
            "STREAMING MULTIPROCESSOR  (Detailed View)",
            styles::accent_bold(),
        ))
        .alignment(Alignment::Center)
        .render(rows[0], buf);

        let style = if tracker.advance() {
            styles::selected_unit()
        } else {
            styles::unit_bold(palette::UNIT_MEMORY)
        };
        render_bar(buf, rows[1], "L1 INSTRUCTION CACHE", style);

        // 2×2 SMSP grid, row-major like the quadrant numbering
        let grid_rows = Layout::vertical([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .split(rows[2]);
        let mut smsp = 0;
        for grid_row in grid_rows.iter() {
            let cells = Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
                .split(*grid_row);
            for cell in cells.iter() {
                if smsp < SMSPS_PER_SM {
                    self.render_smsp_block(buf, *cell, smsp, &mut tracker);
                    smsp += 1;
                }
            }
        }

        let style = if tracker.advance() {
            styles::selected_unit()
        } else {
            styles::unit(palette::UNIT_INTERCONNECT)
        };
        render_bar(buf, rows[3], "TENSOR MEMORY ACCELERATOR", style);

        let style = if tracker.advance() {
            styles::selected_unit()
        } else {
            styles::unit_bold(palette::UNIT_INTERFACE)
        };
        render_bar(buf, rows[4], "256 KB L1 DATA CACHE / SHARED MEMORY", style);

        let tex_columns = Layout::horizontal(vec![Constraint::Ratio(1, 4); 4]).split(rows[5]);
        for column in tex_columns.iter() {
            let style = if tracker.advance() {
                styles::selected_unit()
            } else {
                styles::text_secondary()
            };
            render_cell(buf, *column, &["TEX UNIT"], style);
        }
    }
}
