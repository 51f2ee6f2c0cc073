//! Per-user directories for log-overlay, created on first use

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "log-overlay";

fn app_dir(base: Option<PathBuf>, kind: &str) -> Result<PathBuf> {
    let dir = base
        .with_context(|| format!("No {} directory on this platform", kind))?
        .join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {} directory {}", kind, dir.display()))?;
    Ok(dir)
}

/// `$XDG_CONFIG_HOME/log-overlay` or the platform equivalent
pub fn config_dir() -> Result<PathBuf> {
    app_dir(dirs::config_dir(), "config")
}

/// Holds the log files of release builds
pub fn cache_dir() -> Result<PathBuf> {
    app_dir(dirs::cache_dir(), "cache")
}

pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}
