//! Comparison value objects - immutable result types for one comparison.
//!
//! - [`ModelResponse`] - one model's answer with its latency
//! - [`ComparisonResult`] - both answers for one question, cloud first

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::mode::ExecutionMode;
use crate::core::model::ModelSide;

/// Prefix carried by the text of every failed response
pub const ERROR_PREFIX: &str = "Error: ";

/// Response from a single model invocation
///
/// A failure is a value, not an error: `succeeded` is false, the text reads
/// `"Error: <description>"` and the elapsed time is reported as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelResponse {
    /// The model that generated this response
    pub model: String,
    /// Answer text, or the error description on failure
    pub text: String,
    /// Wall-clock seconds spent on the call (0 on failure)
    pub elapsed_seconds: f64,
    /// Whether the call returned an answer
    pub succeeded: bool,
}

impl ModelResponse {
    /// Creates a successful response.
    ///
    /// # Arguments
    /// * `model` - Identifier of the model that answered
    /// * `text` - The model's answer
    /// * `elapsed` - Wall-clock time the call took
    pub fn success(model: impl Into<String>, text: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            model: model.into(),
            text: text.into(),
            elapsed_seconds: elapsed.as_secs_f64(),
            succeeded: true,
        }
    }

    /// Creates a failed response; `error` becomes the display text.
    pub fn failure(model: impl Into<String>, error: impl std::fmt::Display) -> Self {
        Self {
            model: model.into(),
            text: format!("{}{}", ERROR_PREFIX, error),
            elapsed_seconds: 0.0,
            succeeded: false,
        }
    }

    /// Returns `true` if this response was generated successfully.
    pub fn is_success(&self) -> bool {
        self.succeeded
    }

    /// Elapsed seconds rendered with two decimals, e.g. `"0.80"`
    pub fn formatted_elapsed(&self) -> String {
        format!("{:.2}", self.elapsed_seconds)
    }
}

/// Both responses for one submitted question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// The question as submitted
    pub question: String,
    /// Hosted model's response
    pub cloud: ModelResponse,
    /// Local model's response
    pub local: ModelResponse,
    /// How the two calls were scheduled
    pub mode: ExecutionMode,
    /// When both calls had returned
    pub completed_at: DateTime<Utc>,
}

impl ComparisonResult {
    pub fn new(
        question: impl Into<String>,
        cloud: ModelResponse,
        local: ModelResponse,
        mode: ExecutionMode,
    ) -> Self {
        Self {
            question: question.into(),
            cloud,
            local,
            mode,
            completed_at: Utc::now(),
        }
    }

    /// Both responses in display order (cloud, local)
    pub fn responses(&self) -> [(ModelSide, &ModelResponse); 2] {
        [(ModelSide::Cloud, &self.cloud), (ModelSide::Local, &self.local)]
    }
}
