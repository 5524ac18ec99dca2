//! Configuration management for the kaneo client.
//!
//! This crate locates the YAML config file, layers it between built-in
//! defaults and `KANEO_*` environment overrides, and provides typed access
//! to connection and display settings.

pub mod config;
pub mod paths;

pub use config::{ConfigError, KaneoConfig, load_config, load_file, save_config};
pub use paths::config_path;
