//! Full-die view
//!
//! Projects the whole compute complex: host-interface bars on top, HBM
//! stacks and memory controllers on the flanks, two rows of GPC blocks
//! with the L2 strip between them, and the NVLink hub with its port row
//! along the bottom. Fused-off TPC slots render muted with a cross and
//! are skipped by the cursor.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use dieviz_app::targets::NVLINK_PORTS;
use dieviz_core::{gpc_slots, Architecture, DieConfig};

use super::{render_bar, render_cell, TargetTracker};
use crate::theme::{icons::IconSet, palette, styles};

/// The full-die diagram for one architecture variant
pub struct FullDieView {
    arch: Architecture,
    cursor: usize,
    icons: IconSet,
}

impl FullDieView {
    pub fn new(arch: Architecture, cursor: usize, icons: IconSet) -> Self {
        Self { arch, cursor, icons }
    }

    fn title(&self, config: &DieConfig) -> String {
        if config.dies_per_package > 1 {
            format!(
                "FULL GPU DIE LAYOUT  ({} SMs × {} dies)",
                config.active_sms(),
                config.dies_per_package
            )
        } else {
            format!("FULL GPU DIE LAYOUT  ({} Active SMs)", config.active_sms())
        }
    }

    fn l2_label(&self) -> &'static str {
        match self.arch {
            Architecture::Hopper => "L2 CACHE · 25 MB",
            Architecture::Blackwell => "L2 CACHE · 63 MB",
        }
    }

    fn hbm_label(&self) -> &'static str {
        match self.arch {
            Architecture::Hopper => "HBM3",
            Architecture::Blackwell => "HBM3e",
        }
    }

    /// Paint one flank column: NVLink switch, HBM stack, memory controllers
    fn render_memory_column(&self, buf: &mut Buffer, area: Rect, tracker: &mut TargetTracker) {
        let slots = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Fill(1),
        ])
        .split(area);

        let items = [
            ("NVLink Sw", palette::UNIT_INTERCONNECT),
            (self.hbm_label(), palette::UNIT_MEMORY),
            ("MC", palette::UNIT_MEMORY),
        ];
        for (slot, (label, color)) in slots.iter().zip(items) {
            let style = if tracker.advance() {
                styles::selected_unit()
            } else {
                styles::unit(color)
            };
            render_bar(buf, *slot, label, style);
        }
    }

    /// Paint one row of GPC blocks
    fn render_gpc_row(
        &self,
        buf: &mut Buffer,
        area: Rect,
        config: &DieConfig,
        gpc_indices: std::ops::Range<usize>,
        tracker: &mut TargetTracker,
    ) {
        let count = gpc_indices.len();
        if count == 0 {
            return;
        }
        let columns = Layout::horizontal(vec![Constraint::Ratio(1, count as u32); count]).split(area);

        for (column, gpc) in columns.iter().zip(gpc_indices) {
            self.render_gpc_block(buf, *column, config, gpc, tracker);
        }
    }

    /// One GPC: bordered block whose title is the GPC target, containing
    /// the TPC strip (two stacked SM rows per slot)
    fn render_gpc_block(
        &self,
        buf: &mut Buffer,
        area: Rect,
        config: &DieConfig,
        gpc: usize,
        tracker: &mut TargetTracker,
    ) {
        let header_selected = tracker.advance();
        let title_style = if header_selected {
            styles::selected_unit()
        } else {
            styles::text_secondary()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles::border_inactive())
            .title(Line::styled(format!(" GPC {gpc} "), title_style));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            // Nothing fits; indices are still consumed to keep the cursor
            // mapping aligned with the target list
            for slot in gpc_slots(config, gpc) {
                if !slot.disabled {
                    tracker.advance();
                }
            }
            return;
        }

        let cell_width = (inner.width / config.tpcs_per_gpc as u16).max(1);
        let cell_height = inner.height.min(2);

        for slot in gpc_slots(config, gpc) {
            let x = inner.x + slot.tpc_index as u16 * cell_width;
            if x + cell_width > inner.x + inner.width {
                // Slots that no longer fit still consume their indices
                if !slot.disabled {
                    tracker.advance();
                }
                continue;
            }
            let cell = Rect::new(x, inner.y, cell_width, cell_height);

            if slot.disabled {
                let cross = self.icons.cross();
                render_cell(buf, cell, &[cross, cross], styles::disabled_slot());
                continue;
            }

            let style = if tracker.advance() {
                styles::selected_unit()
            } else {
                styles::unit(palette::UNIT_COMPUTE)
            };
            if cell_width >= 2 {
                let top = format!("{:02}", slot.first_sm);
                let bottom = format!("{:02}", slot.second_sm);
                render_cell(buf, cell, &[top.as_str(), bottom.as_str()], style);
            } else {
                render_cell(buf, cell, &["▪", "▪"], style);
            }
        }
    }

    /// The L2 strip between the two GPC rows: two slice targets
    fn render_l2_strip(&self, buf: &mut Buffer, area: Rect, tracker: &mut TargetTracker) {
        let slices =
            Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).split(area);
        for slice in slices.iter() {
            let style = if tracker.advance() {
                styles::selected_unit()
            } else {
                styles::unit_bold(palette::UNIT_MEMORY)
            };
            render_bar(buf, *slice, self.l2_label(), style);
        }
    }

    /// The NVLink port row along the bottom of the die
    fn render_ports(&self, buf: &mut Buffer, area: Rect, tracker: &mut TargetTracker) {
        let cell_width = (area.width / NVLINK_PORTS as u16).max(1);
        for port in 0..NVLINK_PORTS as u16 {
            let x = area.x + port * cell_width;
            if x + cell_width > area.x + area.width {
                // Ports that no longer fit still consume their indices
                tracker.advance();
                continue;
            }
            let style = if tracker.advance() {
                styles::selected_unit()
            } else {
                styles::unit(palette::STATUS_GREEN)
            };
            let label = if cell_width >= 4 {
                format!("P{}", port + 1)
            } else {
                self.icons.dot().to_string()
            };
            render_cell(buf, Rect::new(x, area.y, cell_width, 1), &[label.as_str()], style);
        }
    }
}

impl Widget for FullDieView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let config = self.arch.die_config();
        let mut tracker = TargetTracker::new(self.cursor);

        let rows = Layout::vertical([
            Constraint::Length(1), // Title
            Constraint::Length(1), // PCIe bar
            Constraint::Length(1), // GigaThread bar
            Constraint::Min(8),    // Die body
            Constraint::Length(1), // NVLink hub
            Constraint::Length(1), // Port row
        ])
        .split(area);

        Paragraph::new(Line::styled(self.title(config), styles::accent_bold()))
            .alignment(Alignment::Center)
            .render(rows[0], buf);

        let pcie_label = match self.arch {
            Architecture::Hopper => "PCI EXPRESS 5.0 HOST INTERFACE",
            Architecture::Blackwell => "PCI EXPRESS HOST INTERFACE",
        };
        let style = if tracker.advance() {
            styles::selected_unit()
        } else {
            styles::unit_bold(palette::UNIT_INTERFACE)
        };
        render_bar(buf, rows[1], pcie_label, style);

        let style = if tracker.advance() {
            styles::selected_unit()
        } else {
            styles::unit_bold(palette::UNIT_SCHEDULER)
        };
        render_bar(buf, rows[2], "GIGATHREAD ENGINE", style);

        // Die body: flanking memory columns around the GPC grid
        let body = Layout::horizontal([
            Constraint::Length(12),
            Constraint::Min(30),
            Constraint::Length(12),
        ])
        .split(rows[3]);

        self.render_memory_column(buf, body[0], &mut tracker);

        let center = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(body[1]);
        let half = config.gpcs / 2;
        self.render_gpc_row(buf, center[0], config, 0..half, &mut tracker);
        self.render_l2_strip(buf, center[1], &mut tracker);
        self.render_gpc_row(buf, center[2], config, half..config.gpcs, &mut tracker);

        self.render_memory_column(buf, body[2], &mut tracker);

        let style = if tracker.advance() {
            styles::selected_unit()
        } else {
            styles::unit_bold(palette::STATUS_GREEN)
        };
        render_bar(buf, rows[4], "HIGH-SPEED NVLINK HUB", style);

        self.render_ports(buf, rows[5], &mut tracker);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use dieviz_app::{targets, ViewKind};

    fn render_view(arch: Architecture, cursor: usize) -> TestTerminal {
        let mut term = TestTerminal::with_size(130, 30);
        term.render_widget(
            FullDieView::new(arch, cursor, IconSet::default()),
            Rect::new(0, 0, 130, 30),
        );
        term
    }

    #[test]
    fn test_hopper_die_layout_renders() {
        let term = render_view(Architecture::Hopper, 0);
        assert!(term.buffer_contains("FULL GPU DIE LAYOUT  (132 Active SMs)"));
        assert!(term.buffer_contains("PCI EXPRESS 5.0 HOST INTERFACE"));
        assert!(term.buffer_contains("GIGATHREAD ENGINE"));
        assert!(term.buffer_contains("GPC 0"));
        assert!(term.buffer_contains("GPC 7"));
        assert!(term.buffer_contains("L2 CACHE · 25 MB"));
        assert!(term.buffer_contains("HIGH-SPEED NVLINK HUB"));
        assert!(term.buffer_contains("P18"));
    }

    #[test]
    fn test_blackwell_die_layout_renders() {
        let term = render_view(Architecture::Blackwell, 0);
        assert!(term.buffer_contains("FULL GPU DIE LAYOUT  (132 SMs × 2 dies)"));
        assert!(term.buffer_contains("GPC 5"));
        assert!(!term.buffer_contains("GPC 6"));
        assert!(term.buffer_contains("HBM3e"));
    }

    #[test]
    fn test_fused_slots_render_crossed_out() {
        // GPC 0 loses its last TPC on Hopper
        let term = render_view(Architecture::Hopper, 0);
        assert!(term.buffer_contains("×"));
    }

    #[test]
    fn test_cursor_highlight_tracks_target_list() {
        // The last target is NVLink port 18: its cell must render inverted
        let list = targets(Architecture::Hopper, ViewKind::FullDie);
        let term = render_view(Architecture::Hopper, list.len() - 1);
        let buf = term.buffer();

        let mut found = false;
        for x in 0..buf.area.width {
            for y in 0..buf.area.height {
                let cell = &buf[(x, y)];
                if cell.style().bg == Some(palette::ACCENT) {
                    found = true;
                }
            }
        }
        assert!(found, "no highlighted cell for the cursor target");
    }

    #[test]
    fn test_render_does_not_panic_when_tiny() {
        let mut term = TestTerminal::with_size(20, 6);
        term.render_widget(
            FullDieView::new(Architecture::Hopper, 0, IconSet::default()),
            Rect::new(0, 0, 20, 6),
        );
    }
}
