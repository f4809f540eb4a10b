//! Domain layer for math-duel
//!
//! This crate contains the core value objects and the static evaluation data.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Comparison
//!
//! One [`Question`] becomes exactly one [`Prompt`], which is sent to a hosted
//! model and to a small local model. Each call yields a [`ModelResponse`];
//! the pair forms a [`ComparisonResult`].
//!
//! ## Metrics
//!
//! Precomputed scores per [`Subject`], exposed through [`MetricsCatalog`].

pub mod comparison;
pub mod core;
pub mod metrics;
pub mod prompt;
pub mod sampling;

// Re-export commonly used types
pub use comparison::{
    mode::ExecutionMode,
    value_objects::{ComparisonResult, ERROR_PREFIX, ModelResponse},
};
pub use core::{
    error::DomainError,
    model::{Model, ModelSide},
    question::Question,
    string::one_line_preview,
};
pub use metrics::{
    catalog::MetricsCatalog,
    entities::{FormattedRecord, Metric, MetricsRecord, Subject, SubjectSummary, SubjectTable},
};
pub use prompt::{Prompt, PromptTemplate};
pub use sampling::{CloudSampling, LocalSampling};
