//! Scheduling of the two model calls within one comparison.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::DomainError;

/// How the hosted and local invocations are scheduled.
///
/// - **Sequential** (default): the local call starts only after the hosted
///   call has returned. Total latency is the sum of both.
/// - **Concurrent**: both calls run at once and are joined; nothing is
///   reported until both have finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    #[default]
    Sequential,
    Concurrent,
}

impl ExecutionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionMode::Sequential => "sequential",
            ExecutionMode::Concurrent => "concurrent",
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExecutionMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sequential" | "seq" => Ok(ExecutionMode::Sequential),
            "concurrent" | "parallel" => Ok(ExecutionMode::Concurrent),
            other => Err(DomainError::InvalidExecutionMode(other.to_string())),
        }
    }
}
