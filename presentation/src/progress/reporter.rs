//! Progress reporting for a running comparison

use colored::Colorize;
use duel_application::ports::progress::ComparisonProgressNotifier;
use duel_domain::{Model, ModelResponse, ModelSide};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use tracing::info;

/// Reports progress with one spinner per model
pub struct ProgressReporter {
    multi: MultiProgress,
    bars: Mutex<HashMap<ModelSide, ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            bars: Mutex::new(HashMap::new()),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn side_label(side: ModelSide) -> &'static str {
        match side {
            ModelSide::Cloud => "Hosted",
            ModelSide::Local => "Local",
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ComparisonProgressNotifier for ProgressReporter {
    fn on_model_start(&self, side: ModelSide, model: &Model) {
        let pb = self.multi.add(ProgressBar::new_spinner());
        pb.set_style(Self::spinner_style());
        pb.set_prefix(Self::side_label(side));
        pb.set_message(format!("{} is solving...", model.display_name()));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut bars) = self.bars.lock() {
            bars.insert(side, pb);
        }
    }

    fn on_model_complete(&self, side: ModelSide, response: &ModelResponse) {
        let Some(pb) = self.bars.lock().ok().and_then(|mut bars| bars.remove(&side)) else {
            return;
        };
        let status = if response.is_success() {
            format!(
                "{} {} ({}s)",
                "v".green(),
                response.model,
                response.formatted_elapsed()
            )
        } else {
            format!("{} {} (failed)", "x".red(), response.model)
        };
        pb.finish_with_message(status);
    }
}

/// Progress written to the log, used by the dashboard server
pub struct LogProgress;

impl ComparisonProgressNotifier for LogProgress {
    fn on_model_start(&self, side: ModelSide, model: &Model) {
        info!(side = %side, model = %model, "Model invocation started");
    }

    fn on_model_complete(&self, side: ModelSide, response: &ModelResponse) {
        info!(
            side = %side,
            model = %response.model,
            elapsed_seconds = response.elapsed_seconds,
            succeeded = response.succeeded,
            "Model invocation finished"
        );
    }
}
