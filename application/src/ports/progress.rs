//! Progress notification port
//!
//! Defines the interface for reporting progress during a comparison.

use duel_domain::{Model, ModelResponse, ModelSide};

/// Callback for progress updates during a comparison
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console spinner, server log, etc.)
pub trait ComparisonProgressNotifier: Send + Sync {
    /// Called right before a model is invoked
    fn on_model_start(&self, side: ModelSide, model: &Model);

    /// Called when a model invocation has returned (successfully or not)
    fn on_model_complete(&self, side: ModelSide, response: &ModelResponse);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ComparisonProgressNotifier for NoProgress {
    fn on_model_start(&self, _side: ModelSide, _model: &Model) {}
    fn on_model_complete(&self, _side: ModelSide, _response: &ModelResponse) {}
}
