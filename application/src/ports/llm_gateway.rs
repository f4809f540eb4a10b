//! LLM Gateway port
//!
//! Defines the interface for sending one prompt to one model provider.

use async_trait::async_trait;
use duel_domain::Model;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout")]
    Timeout,

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Gateway for LLM communication
///
/// One gateway talks to one model. Implementations (adapters) live in the
/// infrastructure layer and carry their own sampling parameters.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// The model this gateway sends prompts to
    fn model(&self) -> &Model;

    /// Send a prompt and wait for the complete answer text
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError>;
}
