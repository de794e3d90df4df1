//! Configuration management for kiosk.
//!
//! Loads configuration from ${KIOSK_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub mod paths {
    //! Path resolution for kiosk configuration and data directories.
    //!
    //! KIOSK_HOME resolution order:
    //! 1. KIOSK_HOME environment variable (if set)
    //! 2. ~/.config/kiosk (default)

    use std::path::PathBuf;

    /// Returns the kiosk home directory.
    ///
    /// Checks KIOSK_HOME env var first, falls back to ~/.config/kiosk
    pub fn kiosk_home() -> PathBuf {
        if let Ok(home) = std::env::var("KIOSK_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("kiosk"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        kiosk_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        kiosk_home().join("logs")
    }

    /// Returns the default site file path (used when no --site flag is given).
    pub fn default_site_path() -> PathBuf {
        kiosk_home().join("site.toml")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Overrides the contact form action URL from the site file.
    pub action_override: Option<String>,

    /// Disables the scroll animation (jump instantly instead).
    pub instant_scroll: bool,

    /// Log filter directive, e.g. "info" or "kiosk_tui=debug".
    /// KIOSK_LOG takes precedence when set.
    pub log_filter: String,
}

impl Config {
    const DEFAULT_LOG_FILTER: &str = "info";

    /// Loads configuration from the default path.
    /// Returns defaults if file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Creates a config file with the default template.
    ///
    /// # Errors
    /// Fails if the file already exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            action_override: None,
            instant_scroll: false,
            log_filter: Self::DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nonexistent.toml")).unwrap();
        assert!(config.action_override.is_none());
        assert!(!config.instant_scroll);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "instant_scroll = true\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.instant_scroll);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_load_invalid_toml_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "instant_scroll = {{").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_init_creates_parseable_template() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("subdir").join("config.toml");

        Config::init(&path).unwrap();
        assert!(path.exists());

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.log_filter, Config::DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_init_fails_if_exists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "# existing").unwrap();

        assert!(Config::init(&path).is_err());
    }
}
