//! Configuration file loading for math-duel
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `MATH_DUEL_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./math-duel.toml` or `./.math-duel.toml`
//! 4. Global: `$XDG_CONFIG_HOME/math-duel/config.toml`
//! 5. Default values
//!
//! Cloud credentials are resolved separately, from the environment variables
//! named in `[cloud]`, when the cloud client is built.

mod file_config;
mod loader;

pub use file_config::{
    ConfigError, FileCloudConfig, FileComparisonConfig, FileConfig, FileLocalConfig,
    FileOutputConfig, FileServerConfig,
};
pub use loader::ConfigLoader;
