//! Run Comparison use case
//!
//! Asks the hosted model and the local model the same question and returns
//! both answers side by side.

use crate::config::ComparisonConfig;
use crate::ports::progress::{ComparisonProgressNotifier, NoProgress};
use crate::use_cases::invoke_model::ModelInvoker;
use duel_domain::{
    ComparisonResult, ExecutionMode, Model, ModelResponse, ModelSide, Prompt, Question,
};
use std::sync::Arc;
use tracing::info;

/// Use case for comparing both models on one question.
///
/// Both invokers are injected once at startup and shared across requests.
/// `execute` is infallible: invocation failures are already folded into the
/// returned responses.
pub struct RunComparisonUseCase {
    cloud: Arc<dyn ModelInvoker>,
    local: Arc<dyn ModelInvoker>,
    config: ComparisonConfig,
}

impl RunComparisonUseCase {
    pub fn new(cloud: Arc<dyn ModelInvoker>, local: Arc<dyn ModelInvoker>) -> Self {
        Self {
            cloud,
            local,
            config: ComparisonConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ComparisonConfig) -> Self {
        self.config = config;
        self
    }

    pub fn cloud_model(&self) -> &Model {
        self.cloud.model()
    }

    pub fn local_model(&self) -> &Model {
        self.local.model()
    }

    pub fn mode(&self) -> ExecutionMode {
        self.config.mode
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, question: &Question) -> ComparisonResult {
        self.execute_with_progress(question, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        question: &Question,
        progress: &dyn ComparisonProgressNotifier,
    ) -> ComparisonResult {
        let prompt = Prompt::for_question(question);
        let mode = self.config.mode;

        info!(
            mode = %mode,
            cloud = %self.cloud.model(),
            local = %self.local.model(),
            "Starting comparison"
        );

        let (cloud, local) = match mode {
            ExecutionMode::Sequential => {
                let cloud =
                    Self::invoke_side(&*self.cloud, ModelSide::Cloud, &prompt, progress).await;
                let local =
                    Self::invoke_side(&*self.local, ModelSide::Local, &prompt, progress).await;
                (cloud, local)
            }
            ExecutionMode::Concurrent => {
                progress.on_model_start(ModelSide::Cloud, self.cloud.model());
                progress.on_model_start(ModelSide::Local, self.local.model());

                let (cloud, local) =
                    tokio::join!(self.cloud.invoke(&prompt), self.local.invoke(&prompt));

                // No side is reported until both have returned
                progress.on_model_complete(ModelSide::Cloud, &cloud);
                progress.on_model_complete(ModelSide::Local, &local);
                (cloud, local)
            }
        };

        info!(
            cloud_ok = cloud.succeeded,
            local_ok = local.succeeded,
            "Comparison complete"
        );

        ComparisonResult::new(question.content(), cloud, local, mode)
    }

    async fn invoke_side(
        invoker: &dyn ModelInvoker,
        side: ModelSide,
        prompt: &Prompt,
        progress: &dyn ComparisonProgressNotifier,
    ) -> ModelResponse {
        progress.on_model_start(side, invoker.model());
        let response = invoker.invoke(prompt).await;
        progress.on_model_complete(side, &response);
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::{Duration, Instant};

    /// Returns a canned response and records when it ran.
    struct RecordingInvoker {
        model: Model,
        delay: Duration,
        response: ModelResponse,
        prompts: Mutex<Vec<String>>,
        window: Mutex<Option<(Instant, Instant)>>,
    }

    impl RecordingInvoker {
        fn new(model: Model, delay_ms: u64, response: ModelResponse) -> Arc<Self> {
            Arc::new(Self {
                model,
                delay: Duration::from_millis(delay_ms),
                response,
                prompts: Mutex::new(Vec::new()),
                window: Mutex::new(None),
            })
        }

        fn window(&self) -> (Instant, Instant) {
            self.window.lock().unwrap().expect("invoker was not called")
        }
    }

    #[async_trait]
    impl ModelInvoker for RecordingInvoker {
        fn model(&self) -> &Model {
            &self.model
        }

        async fn invoke(&self, prompt: &Prompt) -> ModelResponse {
            let start = Instant::now();
            self.prompts.lock().unwrap().push(prompt.as_str().to_string());
            tokio::time::sleep(self.delay).await;
            *self.window.lock().unwrap() = Some((start, Instant::now()));
            self.response.clone()
        }
    }

    #[derive(Default)]
    struct EventLog(Mutex<Vec<String>>);

    impl ComparisonProgressNotifier for EventLog {
        fn on_model_start(&self, side: ModelSide, model: &Model) {
            self.0.lock().unwrap().push(format!("start {} {}", side, model));
        }

        fn on_model_complete(&self, side: ModelSide, response: &ModelResponse) {
            self.0
                .lock()
                .unwrap()
                .push(format!("done {} {}", side, response.succeeded));
        }
    }

    fn question() -> Question {
        Question::try_new("What is 2+2?").unwrap()
    }

    fn cloud_answer() -> ModelResponse {
        ModelResponse::success("gpt-4o", "4", Duration::from_millis(800))
    }

    fn local_error() -> ModelResponse {
        ModelResponse::failure("tinyllama", "connection refused")
    }

    #[tokio::test]
    async fn test_returns_stubbed_responses_in_cloud_local_order() {
        let cloud = RecordingInvoker::new(Model::Gpt4o, 0, cloud_answer());
        let local = RecordingInvoker::new(Model::TinyLlama, 0, local_error());
        let use_case = RunComparisonUseCase::new(cloud, local);

        let result = use_case.execute(&question()).await;

        assert_eq!(result.question, "What is 2+2?");
        assert_eq!(result.cloud, cloud_answer());
        assert_eq!(result.local, local_error());
        assert_eq!(result.local.text, "Error: connection refused");
        assert_eq!(result.local.elapsed_seconds, 0.0);
        assert_eq!(result.mode, ExecutionMode::Sequential);
    }

    #[tokio::test]
    async fn test_both_models_receive_the_same_single_prompt() {
        let cloud = RecordingInvoker::new(Model::Gpt4o, 0, cloud_answer());
        let local = RecordingInvoker::new(Model::TinyLlama, 0, local_error());
        let use_case = RunComparisonUseCase::new(cloud.clone(), local.clone());

        use_case.execute(&question()).await;

        let expected = Prompt::for_question(&question()).as_str().to_string();
        assert_eq!(cloud.prompts.lock().unwrap().as_slice(), [expected.clone()]);
        assert_eq!(local.prompts.lock().unwrap().as_slice(), [expected]);
    }

    #[tokio::test]
    async fn test_sequential_local_starts_after_cloud_finishes() {
        let cloud = RecordingInvoker::new(Model::Gpt4o, 40, cloud_answer());
        let local = RecordingInvoker::new(Model::TinyLlama, 10, local_error());
        let use_case = RunComparisonUseCase::new(cloud.clone(), local.clone())
            .with_config(ComparisonConfig::sequential());

        use_case.execute(&question()).await;

        let (_, cloud_end) = cloud.window();
        let (local_start, _) = local.window();
        assert!(cloud_end <= local_start);
    }

    #[tokio::test]
    async fn test_concurrent_overlaps_and_joins_both() {
        let cloud = RecordingInvoker::new(Model::Gpt4o, 60, cloud_answer());
        let local = RecordingInvoker::new(Model::TinyLlama, 60, local_error());
        let use_case = RunComparisonUseCase::new(cloud.clone(), local.clone())
            .with_config(ComparisonConfig::concurrent());

        let result = use_case.execute(&question()).await;
        let returned_at = Instant::now();

        let (cloud_start, cloud_end) = cloud.window();
        let (local_start, local_end) = local.window();
        // Calls overlap
        assert!(local_start < cloud_end);
        assert!(cloud_start < local_end);
        // Nothing is returned before both finished
        assert!(cloud_end <= returned_at);
        assert!(local_end <= returned_at);
        assert_eq!(result.cloud, cloud_answer());
        assert_eq!(result.local, local_error());
        assert_eq!(result.mode, ExecutionMode::Concurrent);
    }

    #[tokio::test]
    async fn test_progress_events_in_sequential_order() {
        let cloud = RecordingInvoker::new(Model::Gpt4o, 0, cloud_answer());
        let local = RecordingInvoker::new(Model::TinyLlama, 0, local_error());
        let use_case = RunComparisonUseCase::new(cloud, local);
        let log = EventLog::default();

        use_case.execute_with_progress(&question(), &log).await;

        assert_eq!(
            log.0.lock().unwrap().as_slice(),
            [
                "start cloud gpt-4o",
                "done cloud true",
                "start local tinyllama",
                "done local false",
            ]
        );
    }

    /// Records when each completion callback fired
    #[derive(Default)]
    struct CompletionClock(Mutex<Vec<(ModelSide, Instant)>>);

    impl ComparisonProgressNotifier for CompletionClock {
        fn on_model_start(&self, _side: ModelSide, _model: &Model) {}

        fn on_model_complete(&self, side: ModelSide, _response: &ModelResponse) {
            self.0.lock().unwrap().push((side, Instant::now()));
        }
    }

    #[tokio::test]
    async fn test_concurrent_reports_nothing_until_both_finish() {
        let cloud = RecordingInvoker::new(Model::Gpt4o, 10, cloud_answer());
        let local = RecordingInvoker::new(Model::TinyLlama, 200, local_error());
        let use_case = RunComparisonUseCase::new(cloud.clone(), local.clone())
            .with_config(ComparisonConfig::concurrent());
        let clock = CompletionClock::default();

        use_case.execute_with_progress(&question(), &clock).await;

        let (_, cloud_end) = cloud.window();
        let (_, local_end) = local.window();
        let completions = clock.0.lock().unwrap();
        assert_eq!(completions.len(), 2);
        assert_eq!(completions[0].0, ModelSide::Cloud);
        assert_eq!(completions[1].0, ModelSide::Local);
        for (_, reported_at) in completions.iter() {
            assert!(*reported_at >= cloud_end);
            assert!(*reported_at >= local_end);
        }
    }

    #[tokio::test]
    async fn test_concurrent_progress_event_order() {
        let cloud = RecordingInvoker::new(Model::Gpt4o, 0, cloud_answer());
        let local = RecordingInvoker::new(Model::TinyLlama, 0, local_error());
        let use_case = RunComparisonUseCase::new(cloud, local)
            .with_config(ComparisonConfig::concurrent());
        let log = EventLog::default();

        use_case.execute_with_progress(&question(), &log).await;

        assert_eq!(
            log.0.lock().unwrap().as_slice(),
            [
                "start cloud gpt-4o",
                "start local tinyllama",
                "done cloud true",
                "done local false",
            ]
        );
    }

    #[test]
    fn test_accessors() {
        let cloud = RecordingInvoker::new(Model::Gpt4o, 0, cloud_answer());
        let local = RecordingInvoker::new(Model::TinyLlama, 0, local_error());
        let use_case = RunComparisonUseCase::new(cloud, local);

        assert_eq!(use_case.cloud_model(), &Model::Gpt4o);
        assert_eq!(use_case.local_model(), &Model::TinyLlama);
        assert_eq!(use_case.mode(), ExecutionMode::Sequential);
    }
}
