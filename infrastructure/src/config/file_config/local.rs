//! Local model configuration from TOML (`[local]` section)

use crate::providers::ollama::OllamaConfig;
use duel_domain::{LocalSampling, Model};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Ollama settings for the small local model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLocalConfig {
    /// Ollama server address (default: "http://localhost:11434")
    pub base_url: String,
    /// Model tag to run (default: "tinyllama")
    pub model: String,
    pub sampling: LocalSampling,
    /// Request timeout; unset means the HTTP client default
    pub timeout_seconds: Option<u64>,
}

impl Default for FileLocalConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: Model::default_local().to_string(),
            sampling: LocalSampling::default(),
            timeout_seconds: None,
        }
    }
}

impl FileLocalConfig {
    pub fn to_ollama_config(&self) -> OllamaConfig {
        let Ok(model) = self.model.parse::<Model>();
        OllamaConfig {
            base_url: self.base_url.clone(),
            model,
            sampling: self.sampling.clone(),
            timeout: self.timeout_seconds.map(Duration::from_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_ollama_defaults() {
        let config = FileLocalConfig::default().to_ollama_config();
        let expected = OllamaConfig::default();
        assert_eq!(config.base_url, expected.base_url);
        assert_eq!(config.model, expected.model);
        assert_eq!(config.sampling, expected.sampling);
    }

    #[test]
    fn test_custom_model_and_timeout() {
        let config = FileLocalConfig {
            model: "phi3:mini".to_string(),
            timeout_seconds: Some(120),
            ..FileLocalConfig::default()
        }
        .to_ollama_config();
        assert_eq!(config.model, Model::Custom("phi3:mini".to_string()));
        assert_eq!(config.timeout, Some(Duration::from_secs(120)));
    }
}
