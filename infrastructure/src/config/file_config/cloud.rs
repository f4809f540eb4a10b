//! Hosted model configuration from TOML (`[cloud]` section)

use super::ConfigError;
use crate::providers::azure_openai::AzureOpenAiConfig;
use duel_domain::{CloudSampling, Model};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Azure OpenAI settings.
///
/// Each secret can be set directly or read from the environment variable
/// named by the matching `*_env` field. Direct values win.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCloudConfig {
    /// Resource endpoint URL
    pub endpoint: Option<String>,
    /// Environment variable holding the endpoint (default: "AZURE_ENDPOINT")
    pub endpoint_env: String,
    /// Direct API key (prefer the env var)
    pub api_key: Option<String>,
    /// Environment variable holding the API key (default: "API_KEY")
    pub api_key_env: String,
    /// API version query parameter
    pub api_version: Option<String>,
    /// Environment variable holding the API version (default: "API_VERSION")
    pub api_version_env: String,
    /// Model identifier sent in the request (default: "gpt-4o")
    pub model: String,
    /// Deployment name; defaults to `model`
    pub deployment: Option<String>,
    pub sampling: CloudSampling,
    /// Request timeout; unset means the HTTP client default
    pub timeout_seconds: Option<u64>,
}

impl Default for FileCloudConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            endpoint_env: "AZURE_ENDPOINT".to_string(),
            api_key: None,
            api_key_env: "API_KEY".to_string(),
            api_version: None,
            api_version_env: "API_VERSION".to_string(),
            model: Model::default_cloud().to_string(),
            deployment: None,
            sampling: CloudSampling::default(),
            timeout_seconds: None,
        }
    }
}

impl FileCloudConfig {
    /// Resolve secrets from the process environment
    pub fn resolve(&self) -> Result<AzureOpenAiConfig, ConfigError> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolve secrets using `lookup` for environment variables
    pub fn resolve_with<F>(&self, lookup: F) -> Result<AzureOpenAiConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |direct: &Option<String>, env: &str, setting: &'static str| {
            direct
                .clone()
                .filter(|v| !v.trim().is_empty())
                .or_else(|| lookup(env).filter(|v| !v.trim().is_empty()))
                .ok_or_else(|| ConfigError::MissingSetting {
                    setting,
                    env: env.to_string(),
                })
        };

        let endpoint = pick(&self.endpoint, &self.endpoint_env, "cloud.endpoint")?;
        let api_key = pick(&self.api_key, &self.api_key_env, "cloud.api_key")?;
        let api_version = pick(&self.api_version, &self.api_version_env, "cloud.api_version")?;

        let Ok(model) = self.model.parse::<Model>();

        Ok(AzureOpenAiConfig {
            endpoint,
            api_key,
            api_version,
            deployment: self.deployment.clone().unwrap_or_else(|| self.model.clone()),
            model,
            sampling: self.sampling.clone(),
            timeout: self.timeout_seconds.map(Duration::from_secs),
        })
    }
}
