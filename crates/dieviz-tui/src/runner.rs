//! Main TUI runner - entry point and event loop

use dieviz_app::handler::update;
use dieviz_app::AppState;
use dieviz_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI application until the user quits
pub fn run(mut state: AppState) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    info!(
        "TUI started ({} / {:?} view)",
        state.architecture, state.active_view
    );

    let result = run_loop(&mut term, &mut state);

    ratatui::restore();
    result
}

/// Main event loop: draw, poll, update (plus any chained follow-ups)
fn run_loop(terminal: &mut ratatui::DefaultTerminal, state: &mut AppState) -> Result<()> {
    while !state.should_quit() {
        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            let mut next = Some(message);
            while let Some(msg) = next.take() {
                next = update(state, msg).message;
            }
        }
    }
    Ok(())
}
