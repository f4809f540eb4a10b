//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod cloud;
mod local;

pub use cloud::FileCloudConfig;
pub use local::FileLocalConfig;

use duel_application::ComparisonConfig;
use duel_domain::ExecutionMode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{setting} is not set (set it in the config file or export {env})")]
    MissingSetting { setting: &'static str, env: String },

    #[error("{0}: timeout_seconds cannot be 0")]
    InvalidTimeout(&'static str),

    #[error("{0}: model name cannot be empty")]
    EmptyModelName(&'static str),

    #[error("invalid sampling parameter: {0}")]
    InvalidSampling(String),

    #[error("server.port cannot be 0")]
    InvalidPort,

    #[error("failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),
}

/// Dashboard server settings (`[server]` section)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8501,
        }
    }
}

/// Comparison settings (`[comparison]` section)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileComparisonConfig {
    /// "sequential" (default) or "concurrent"
    pub mode: ExecutionMode,
}

impl FileComparisonConfig {
    pub fn to_comparison_config(&self) -> ComparisonConfig {
        ComparisonConfig::default().with_mode(self.mode)
    }
}

/// Console output settings (`[output]` section)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub server: FileServerConfig,
    /// Hosted model
    pub cloud: FileCloudConfig,
    /// Local model
    pub local: FileLocalConfig,
    pub comparison: FileComparisonConfig,
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate values that deserialize fine but make no sense
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidPort);
        }

        if self.cloud.model.trim().is_empty() {
            return Err(ConfigError::EmptyModelName("cloud.model"));
        }
        if self.local.model.trim().is_empty() {
            return Err(ConfigError::EmptyModelName("local.model"));
        }

        if let Some(0) = self.cloud.timeout_seconds {
            return Err(ConfigError::InvalidTimeout("cloud"));
        }
        if let Some(0) = self.local.timeout_seconds {
            return Err(ConfigError::InvalidTimeout("local"));
        }

        if self.cloud.sampling.temperature < 0.0 {
            return Err(ConfigError::InvalidSampling(
                "cloud.sampling.temperature must be >= 0".to_string(),
            ));
        }
        if self.cloud.sampling.max_tokens == 0 {
            return Err(ConfigError::InvalidSampling(
                "cloud.sampling.max_tokens must be > 0".to_string(),
            ));
        }

        let local = &self.local.sampling;
        if local.temperature < 0.0 {
            return Err(ConfigError::InvalidSampling(
                "local.sampling.temperature must be >= 0".to_string(),
            ));
        }
        if !(local.top_p > 0.0 && local.top_p <= 1.0) {
            return Err(ConfigError::InvalidSampling(format!(
                "local.sampling.top_p must be in (0, 1], got {}",
                local.top_p
            )));
        }
        if local.num_predict == 0 {
            return Err(ConfigError::InvalidSampling(
                "local.sampling.num_predict must be > 0".to_string(),
            ));
        }

        Ok(())
    }
}
