//! Infrastructure layer for math-duel
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, FileCloudConfig, FileComparisonConfig, FileConfig,
    FileLocalConfig, FileOutputConfig, FileServerConfig,
};
pub use providers::{
    azure_openai::{AzureOpenAiConfig, AzureOpenAiGateway},
    ollama::{OllamaConfig, OllamaGateway},
};
