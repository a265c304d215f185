//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use dieviz_app::state::{AppState, DetailState, ViewKind};
use dieviz_core::unit_info;

use crate::layout;
use crate::theme::{icons::IconSet, palette};
use crate::widgets::{
    DetailPanel, FooterBar, FullDieView, MainHeader, ProcessingBlockView, SingleSmView, SpecTable,
    ViewTabs,
};

/// Render the complete UI (View function in TEA)
///
/// Pure projection of the state; never mutates it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with the deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.icons);

    frame.render_widget(MainHeader::new(state.architecture, icons), areas.header);
    frame.render_widget(ViewTabs::new(state.active_view), areas.tabs);

    match state.active_view {
        ViewKind::FullDie => frame.render_widget(
            FullDieView::new(state.architecture, state.cursor(), icons),
            areas.content,
        ),
        ViewKind::ProcessingBlock => frame.render_widget(
            ProcessingBlockView::new(state.architecture, state.cursor()),
            areas.content,
        ),
        ViewKind::SingleSm => {
            frame.render_widget(SingleSmView::new(state.cursor()), areas.content)
        }
        ViewKind::Specs => {
            frame.render_widget(SpecTable::new(state.architecture), areas.content)
        }
    }

    frame.render_widget(FooterBar::new(state, icons), areas.footer);

    // Detail panel modal last, over a dimmed background
    if let DetailState::Open { key, scroll } = state.detail {
        if let Some(info) = unit_info(state.architecture, key) {
            frame.render_widget(DetailPanel::new(info, scroll, icons), area);
        }
    }
}
