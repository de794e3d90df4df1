//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use kiosk_core::config;

mod commands;

#[derive(Parser)]
#[command(name = "kiosk")]
#[command(version = "1.0")]
#[command(about = "Terminal viewer for single-page business sites")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the site file (default: ${KIOSK_HOME}/site.toml)
    #[arg(long, value_name = "FILE")]
    site: Option<PathBuf>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Validate a site file without opening the viewer
    Check {
        /// Path to the site file (default: ${KIOSK_HOME}/site.toml)
        #[arg(value_name = "FILE")]
        site: Option<PathBuf>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        None => commands::view::run(cli.site).await,
        Some(Commands::Check { site }) => commands::check::run(site.or(cli.site)),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}

/// Resolves the site file path from the CLI argument or the default location.
fn site_path(arg: Option<PathBuf>) -> PathBuf {
    arg.unwrap_or_else(config::paths::default_site_path)
}
