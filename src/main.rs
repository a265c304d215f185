//! DieViz - A terminal UI explorer for NVIDIA GPU die architectures
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use clap::Parser;
use dieviz_app::{load_settings, AppState, ViewKind};
use dieviz_core::prelude::*;
use dieviz_core::Architecture;

/// DieViz - interactive die schematics for Hopper and Blackwell GPUs
#[derive(Parser, Debug)]
#[command(name = "dieviz")]
#[command(about = "Interactive terminal explorer for NVIDIA GPU die architectures", long_about = None)]
struct Args {
    /// Architecture to open with (hopper/h100 or blackwell/b200)
    #[arg(long, value_name = "ARCH")]
    arch: Option<String>,

    /// View to open with (full-die, processing-block, single-sm, specs)
    #[arg(long, value_name = "VIEW")]
    view: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    dieviz_core::logging::init()?;

    // Config defaults, overridden by CLI flags
    let settings = load_settings();
    let mut state = AppState::with_settings(settings);
    if let Some(arch) = args.arch.as_deref() {
        state.select_architecture(arch.parse::<Architecture>()?);
    }
    if let Some(view) = args.view.as_deref() {
        state.select_view(view.parse::<ViewKind>()?);
    }

    dieviz_tui::run(state)
}
