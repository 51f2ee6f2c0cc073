//! Configuration and file management for log-overlay
//!
//! Paths, config file lookup and the parsed [`AppConfig`].

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::{AppConfig, ConfigError, LevelConfig};
pub use config_file::load_config_file;
pub use paths::{app_config_path, cache_dir, config_dir};
