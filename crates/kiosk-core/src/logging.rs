//! Logging bootstrap.
//!
//! The TUI owns the terminal, so logs go to a daily-rotated file under
//! ${KIOSK_HOME}/logs instead of stderr. The filter comes from KIOSK_LOG
//! when set, otherwise from the config's `log_filter`.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Env var that overrides the configured log filter.
pub const LOG_ENV: &str = "KIOSK_LOG";

/// Initializes the global subscriber writing to `logs_dir/kiosk.log.*`.
///
/// Returns the appender guard; dropping it flushes buffered log lines, so the
/// caller must keep it alive for the process lifetime.
pub fn init(logs_dir: &Path, default_filter: &str) -> Result<WorkerGuard> {
    std::fs::create_dir_all(logs_dir)
        .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::daily(logs_dir, "kiosk.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
