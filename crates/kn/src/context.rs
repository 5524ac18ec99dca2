//! Runtime context for command execution.
//!
//! The [`RuntimeContext`] holds what a command handler needs: the resolved
//! config file path, global flags, and constructors for the loaded config
//! and the API client.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use kaneo_client::KaneoClient;
use kaneo_config::KaneoConfig;
use kaneo_core::enums::SortMode;

use crate::cli::GlobalArgs;

/// Runtime context passed to every command handler.
///
/// Constructed once in `main` after CLI parsing, before command dispatch.
#[derive(Debug)]
pub struct RuntimeContext {
    /// Resolved config file path (may not exist yet).
    pub config_path: PathBuf,

    /// Whether to produce JSON output.
    pub json: bool,

    /// Verbose output.
    pub verbose: bool,
}

impl RuntimeContext {
    /// Build a `RuntimeContext` from parsed global arguments.
    pub fn from_global_args(global: &GlobalArgs) -> Self {
        Self {
            config_path: kaneo_config::config_path(global.config.as_deref()),
            json: global.json,
            verbose: global.verbose,
        }
    }

    /// Loads the layered configuration.
    pub fn config(&self) -> Result<KaneoConfig> {
        kaneo_config::load_config(&self.config_path)
            .with_context(|| format!("failed to load config from {}", self.config_path.display()))
    }

    /// Builds an API client from a validated configuration.
    pub fn client(&self) -> Result<(KaneoClient, KaneoConfig)> {
        let config = self.config()?;
        config.validate_connection()?;
        tracing::debug!(url = config.base_url(), "connecting");
        let client = KaneoClient::connect(
            config.base_url(),
            &config.token,
            Duration::from_secs(config.timeout_secs),
        );
        Ok((client, config))
    }

    /// The flag override if given, else the configured sort mode.
    pub fn sort_mode(config: &KaneoConfig, flag: Option<SortMode>) -> SortMode {
        flag.unwrap_or(config.sort_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_overrides_configured_sort_mode() {
        let mut config = KaneoConfig::default();
        config.sort_mode = SortMode::DueDate;
        assert_eq!(RuntimeContext::sort_mode(&config, None), SortMode::DueDate);
        assert_eq!(
            RuntimeContext::sort_mode(&config, Some(SortMode::Priority)),
            SortMode::Priority
        );
    }

    #[test]
    fn explicit_config_path_is_used() {
        let global = GlobalArgs {
            config: Some(PathBuf::from("/tmp/kn-test.yaml")),
            json: true,
            verbose: false,
        };
        let ctx = RuntimeContext::from_global_args(&global);
        assert_eq!(ctx.config_path, PathBuf::from("/tmp/kn-test.yaml"));
        assert!(ctx.json);
    }
}
