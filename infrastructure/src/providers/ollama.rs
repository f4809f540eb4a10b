//! Ollama local inference adapter
//!
//! Calls `POST {base_url}/api/generate` with streaming disabled and reads
//! the `response` field of the single JSON reply.

use super::{build_http_client, error_for_status, map_transport_error};
use async_trait::async_trait;
use duel_application::{GatewayError, LlmGateway};
use duel_domain::{LocalSampling, Model};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

/// Resolved settings for the local model
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    /// Ollama server address, e.g. `http://localhost:11434`
    pub base_url: String,
    pub model: Model,
    pub sampling: LocalSampling,
    pub timeout: Option<Duration>,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: Model::default_local(),
            sampling: LocalSampling::default(),
            timeout: None,
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: &'a LocalSampling,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Gateway to a model served by a local Ollama process
pub struct OllamaGateway {
    client: reqwest::Client,
    config: OllamaConfig,
    url: String,
}

impl OllamaGateway {
    pub fn new(config: OllamaConfig) -> Result<Self, GatewayError> {
        let client = build_http_client(config.timeout)?;
        let url = format!("{}/api/generate", config.base_url.trim_end_matches('/'));

        info!(
            base_url = %config.base_url,
            model = %config.model,
            "Local model client initialized"
        );

        Ok(Self {
            client,
            config,
            url,
        })
    }
}

#[async_trait]
impl LlmGateway for OllamaGateway {
    fn model(&self) -> &Model {
        &self.config.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        let request = GenerateRequest {
            model: self.config.model.as_str(),
            prompt,
            stream: false,
            options: &self.config.sampling,
        };

        debug!(url = %self.url, model = %self.config.model, "Sending generate request");

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let body: GenerateResponse = error_for_status(response)
            .await?
            .json()
            .await
            .map_err(map_transport_error)?;

        Ok(body.response)
    }
}
