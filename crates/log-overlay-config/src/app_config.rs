//! Application configuration
//!
//! Configuration loaded from .log-overlay.toml file.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

const DEFAULT_MAX_LOGS: usize = 200;
const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 200;
const DEFAULT_TICK_RATE_MS: u64 = 50;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Display metadata for a log level
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct LevelConfig {
    /// Label shown in the level column (defaults to the lower-cased key)
    #[serde(default)]
    pub label: Option<String>,
    /// Color token, e.g. "red" or "#ff5555"
    #[serde(default)]
    pub color: Option<String>,
}

/// Application configuration loaded from .log-overlay.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    /// Host program and its arguments. Empty runs the console detached.
    #[serde(default)]
    pub host_command: Vec<String>,

    /// Initial live buffer limit (the host may change it with setConfig)
    #[serde(default = "default_max_logs")]
    pub max_logs: usize,

    /// Quiet period before a search request is sent
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,

    /// Background tick interval; bounds debounce precision
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Initial level table, keyed by level name
    #[serde(default)]
    pub levels: BTreeMap<String, LevelConfig>,
}

fn default_max_logs() -> usize {
    DEFAULT_MAX_LOGS
}

fn default_search_debounce_ms() -> u64 {
    DEFAULT_SEARCH_DEBOUNCE_MS
}

fn default_tick_rate_ms() -> u64 {
    DEFAULT_TICK_RATE_MS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host_command: Vec::new(),
            max_logs: default_max_logs(),
            search_debounce_ms: default_search_debounce_ms(),
            tick_rate_ms: default_tick_rate_ms(),
            levels: BTreeMap::new(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match Self::from_toml_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("{}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config.validated())
    }

    /// Replace out-of-range values with defaults
    pub fn validated(mut self) -> Self {
        if self.max_logs == 0 {
            log::warn!("max_logs must be positive, using {}", DEFAULT_MAX_LOGS);
            self.max_logs = DEFAULT_MAX_LOGS;
        }
        if self.tick_rate_ms == 0 {
            log::warn!("tick_rate_ms must be positive, using {}", DEFAULT_TICK_RATE_MS);
            self.tick_rate_ms = DEFAULT_TICK_RATE_MS;
        }
        self
    }

    /// Override the host command, e.g. from command-line arguments
    pub fn with_host_command(mut self, command: Vec<String>) -> Self {
        if !command.is_empty() {
            self.host_command = command;
        }
        self
    }
}
