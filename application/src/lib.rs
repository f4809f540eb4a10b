//! Application layer for math-duel
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ComparisonConfig;
pub use ports::{
    llm_gateway::{GatewayError, LlmGateway},
    progress::{ComparisonProgressNotifier, NoProgress},
};
pub use use_cases::invoke_model::{ModelInvoker, TimedInvoker, invoke_gateway};
pub use use_cases::run_comparison::RunComparisonUseCase;
