//! Configuration types and loading for the kaneo client.
//!
//! The main entry point is [`KaneoConfig`]. It is assembled by [`load_config`]
//! from three layers, later layers winning:
//!
//! 1. built-in defaults
//! 2. the YAML config file (see [`crate::paths::config_path`])
//! 3. `KANEO_*` environment variables (`KANEO_INSTANCE_URL`, `KANEO_TOKEN`,
//!    `KANEO_WORKSPACE_ID`, `KANEO_SORT_MODE`, `KANEO_TIMEOUT_SECS`)

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use kaneo_core::enums::SortMode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "KANEO_";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read or written.
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file contained invalid YAML.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The merged layers could not be extracted into a config.
    #[error("invalid configuration: {0}")]
    Extract(#[from] Box<figment::Error>),

    /// A required value is not set in any layer.
    #[error("'{key}' is not configured (set it with 'kn config set {key} <value>' or ${env})")]
    Missing {
        /// The configuration key.
        key: &'static str,
        /// The environment variable that would also provide it.
        env: &'static str,
    },

    /// A configuration value was invalid.
    #[error("invalid configuration value for key '{key}': {reason}")]
    InvalidValue {
        /// The configuration key that had an invalid value.
        key: String,
        /// A description of why the value is invalid.
        reason: String,
    },
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        Self::Extract(Box::new(e))
    }
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

// ---------------------------------------------------------------------------
// Main config struct
// ---------------------------------------------------------------------------

/// Connection and display settings.
///
/// All fields use `serde` defaults so that a partially-specified YAML file
/// deserializes with sensible values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct KaneoConfig {
    /// Base URL of the API, e.g. `https://kaneo.example.com/api`.
    #[serde(default)]
    pub instance_url: String,

    /// Bearer token.
    #[serde(default)]
    pub token: String,

    /// Workspace whose projects are listed.
    #[serde(default)]
    pub workspace_id: String,

    /// Ordering for task lists and board columns.
    #[serde(default)]
    pub sort_mode: SortMode,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for KaneoConfig {
    fn default() -> Self {
        Self {
            instance_url: String::new(),
            token: String::new(),
            workspace_id: String::new(),
            sort_mode: SortMode::default(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Keys accepted by [`KaneoConfig::set`] and [`KaneoConfig::get`].
pub const KEYS: &[&str] = &[
    "instance-url",
    "token",
    "workspace-id",
    "sort-mode",
    "timeout-secs",
];

impl KaneoConfig {
    /// API base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.instance_url.trim_end_matches('/')
    }

    /// Checks the values needed to talk to the server.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] for an unset URL or token and
    /// [`ConfigError::InvalidValue`] for a URL without an http(s) scheme.
    pub fn validate_connection(&self) -> Result<()> {
        if self.instance_url.trim().is_empty() {
            return Err(ConfigError::Missing {
                key: "instance-url",
                env: "KANEO_INSTANCE_URL",
            });
        }
        if !(self.instance_url.starts_with("http://") || self.instance_url.starts_with("https://"))
        {
            return Err(ConfigError::InvalidValue {
                key: "instance-url".to_string(),
                reason: format!("'{}' must start with http:// or https://", self.instance_url),
            });
        }
        if self.token.trim().is_empty() {
            return Err(ConfigError::Missing {
                key: "token",
                env: "KANEO_TOKEN",
            });
        }
        Ok(())
    }

    /// Returns the workspace identifier or a [`ConfigError::Missing`].
    pub fn require_workspace(&self) -> Result<&str> {
        if self.workspace_id.trim().is_empty() {
            return Err(ConfigError::Missing {
                key: "workspace-id",
                env: "KANEO_WORKSPACE_ID",
            });
        }
        Ok(&self.workspace_id)
    }

    /// Reads a value by key. The token is masked unless `reveal` is set.
    pub fn get(&self, key: &str, reveal: bool) -> Option<String> {
        match key {
            "instance-url" => Some(self.instance_url.clone()),
            "token" if reveal => Some(self.token.clone()),
            "token" => Some(mask_token(&self.token)),
            "workspace-id" => Some(self.workspace_id.clone()),
            "sort-mode" => Some(self.sort_mode.to_string()),
            "timeout-secs" => Some(self.timeout_secs.to_string()),
            _ => None,
        }
    }

    /// Sets a value by key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an unknown key or a value
    /// that does not parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let invalid = |reason: String| ConfigError::InvalidValue {
            key: key.to_string(),
            reason,
        };
        match key {
            "instance-url" => self.instance_url = value.trim().to_string(),
            "token" => self.token = value.trim().to_string(),
            "workspace-id" => self.workspace_id = value.trim().to_string(),
            "sort-mode" => self.sort_mode = value.parse().map_err(invalid)?,
            "timeout-secs" => {
                self.timeout_secs = value
                    .parse()
                    .map_err(|e: std::num::ParseIntError| invalid(e.to_string()))?
            }
            _ => {
                return Err(invalid(format!(
                    "unknown key (expected one of: {})",
                    KEYS.join(", ")
                )));
            }
        }
        Ok(())
    }
}

/// Masks all but the last four characters of a token.
pub fn mask_token(token: &str) -> String {
    if token.is_empty() {
        return String::new();
    }
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), tail)
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Builds the layered figment for the given config file.
///
/// A missing file contributes nothing.
pub fn figment(config_file: &Path, env_prefix: &str) -> Figment {
    Figment::from(Serialized::defaults(KaneoConfig::default()))
        .merge(Yaml::file(config_file))
        .merge(Env::prefixed(env_prefix).map(|key| key.as_str().replace('_', "-").into()))
}

/// Loads configuration: defaults, then `config_file`, then `KANEO_*`.
///
/// # Errors
///
/// Returns [`ConfigError::Extract`] if a layer holds a value of the wrong
/// type (for example an unknown sort mode).
pub fn load_config(config_file: &Path) -> Result<KaneoConfig> {
    let config: KaneoConfig = figment(config_file, ENV_PREFIX).extract()?;
    Ok(config)
}

/// Reads only the file layer, for editing with `kn config set`.
///
/// If the file does not exist, a default [`KaneoConfig`] is returned.
pub fn load_file(config_file: &Path) -> Result<KaneoConfig> {
    if !config_file.exists() {
        return Ok(KaneoConfig::default());
    }

    let content = std::fs::read_to_string(config_file)?;

    // An empty file is valid and yields default config.
    if content.trim().is_empty() {
        return Ok(KaneoConfig::default());
    }

    let config: KaneoConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Saves configuration to `config_file`, creating parent directories.
pub fn save_config(config_file: &Path, config: &KaneoConfig) -> Result<()> {
    if let Some(parent) = config_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let yaml = serde_yaml::to_string(config)?;
    std::fs::write(config_file, yaml)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
