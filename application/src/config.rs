//! Application-level configuration.
//!
//! Controls how the comparison use case schedules its two model calls.

use duel_domain::ExecutionMode;

/// Comparison behavior configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComparisonConfig {
    /// Whether the two models are invoked one after the other or together.
    pub mode: ExecutionMode,
}

impl ComparisonConfig {
    pub fn sequential() -> Self {
        Self {
            mode: ExecutionMode::Sequential,
        }
    }

    pub fn concurrent() -> Self {
        Self {
            mode: ExecutionMode::Concurrent,
        }
    }

    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }
}
