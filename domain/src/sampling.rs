//! Generation parameters sent with each model request.
//!
//! Both models receive the same prompt but very different sampling setups:
//! the hosted model is run deterministically, the local model with nucleus
//! sampling and explicit stop sequences to keep it from rambling.

use serde::{Deserialize, Serialize};

/// Sampling for the hosted chat-completion model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudSampling {
    /// Sampling temperature (0 = deterministic)
    pub temperature: f32,
    /// Maximum output tokens
    pub max_tokens: u32,
}

impl Default for CloudSampling {
    fn default() -> Self {
        Self {
            temperature: 0.0,
            max_tokens: 2000,
        }
    }
}

/// Sampling for the local inference process.
///
/// Field names follow the local runtime's option names so the struct can be
/// serialized straight into the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalSampling {
    /// Maximum output tokens
    pub num_predict: u32,
    pub top_k: u32,
    pub top_p: f32,
    pub repeat_penalty: f32,
    pub temperature: f32,
    /// Generation halts at the first of these sequences
    pub stop: Vec<String>,
}

impl Default for LocalSampling {
    fn default() -> Self {
        Self {
            num_predict: 1000,
            top_k: 20,
            top_p: 0.9,
            repeat_penalty: 1.1,
            temperature: 0.7,
            stop: vec![
                "Question:".to_string(),
                "QUESTION:".to_string(),
                "\n\n".to_string(),
            ],
        }
    }
}
