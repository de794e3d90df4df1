//! Full-screen TUI for viewing a kiosk site.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod layout;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
pub use features::{contact, gallery, header, page};
use kiosk_core::config::Config;
use kiosk_core::site::Site;
pub use runtime::TuiRuntime;

/// Runs the kiosk viewer until the user quits.
pub async fn run_viewer(config: &Config, site: Site) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!("kiosk requires a terminal.\nUse `kiosk check` for non-interactive validation.");
    }

    let mut runtime = TuiRuntime::new(config, site)?;
    let result = runtime.run();

    // Restore terminal before propagating any error
    drop(runtime);
    let _ = terminal::restore_terminal();

    result
}
