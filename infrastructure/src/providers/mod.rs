//! Model provider adapters
//!
//! Each adapter implements [`LlmGateway`](duel_application::LlmGateway) for
//! one kind of endpoint:
//!
//! - [`azure_openai::AzureOpenAiGateway`]: hosted chat-completion deployment
//! - [`ollama::OllamaGateway`]: local Ollama inference process

pub mod azure_openai;
pub mod ollama;

use duel_application::GatewayError;
use std::time::Duration;

/// User agent sent with every provider request
pub const USER_AGENT: &str = concat!("math-duel/", env!("CARGO_PKG_VERSION"));

/// Build the shared HTTP client for one provider.
///
/// Without an explicit timeout the client's default (none) applies.
pub(crate) fn build_http_client(timeout: Option<Duration>) -> Result<reqwest::Client, GatewayError> {
    let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| GatewayError::Configuration(format!("Failed to build HTTP client: {}", e)))
}

/// Classify a transport-level reqwest failure
pub(crate) fn map_transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_connect() {
        GatewayError::ConnectionError(e.to_string())
    } else if e.is_decode() {
        GatewayError::MalformedResponse(e.to_string())
    } else {
        GatewayError::RequestFailed(e.to_string())
    }
}

/// Turn a non-2xx response into [`GatewayError::HttpStatus`]
pub(crate) async fn error_for_status(
    response: reqwest::Response,
) -> Result<reqwest::Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| status.canonical_reason().unwrap_or("Unknown").to_string());
    Err(GatewayError::HttpStatus {
        status: status.as_u16(),
        body,
    })
}
