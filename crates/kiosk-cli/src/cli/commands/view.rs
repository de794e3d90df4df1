//! Default command: open the site in the full-screen viewer.

use std::path::PathBuf;

use anyhow::{Context, Result};
use kiosk_core::{config, logging, site::Site};

pub async fn run(site_arg: Option<PathBuf>) -> Result<()> {
    let config = config::Config::load().context("load config")?;

    // Logging goes to a file; stdout/stderr belong to the TUI. The guard
    // must outlive the viewer so buffered lines are flushed on exit.
    let _guard = logging::init(&config::paths::logs_dir(), &config.log_filter)
        .context("init logging")?;

    let path = crate::cli::site_path(site_arg);
    let site = Site::load_from(&path)
        .with_context(|| format!("load site from {}", path.display()))?;

    tracing::info!(site = %path.display(), "starting viewer");
    kiosk_tui::run_viewer(&config, site).await
}
