//! Invoke Model use case
//!
//! Wraps a single gateway call with latency capture and failure containment.
//! Whatever the transport does, the caller gets a [`ModelResponse`] back.

use crate::ports::llm_gateway::LlmGateway;
use async_trait::async_trait;
use duel_domain::{Model, ModelResponse, Prompt, one_line_preview};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// Something that can answer a prompt and report how long it took.
///
/// Never fails: an unsuccessful call is a `ModelResponse` with
/// `succeeded == false`.
#[async_trait]
pub trait ModelInvoker: Send + Sync {
    /// The model behind this invoker
    fn model(&self) -> &Model;

    /// Send the prompt and time the call
    async fn invoke(&self, prompt: &Prompt) -> ModelResponse;
}

/// Send one prompt through a gateway, timing the call.
///
/// Success: the answer text plus wall-clock seconds since the request began.
/// Failure of any kind: `"Error: <description>"` with zero seconds.
pub async fn invoke_gateway(gateway: &dyn LlmGateway, prompt: &str) -> ModelResponse {
    let model = gateway.model().to_string();
    let start = Instant::now();

    match gateway.generate(prompt).await {
        Ok(text) => {
            let elapsed = start.elapsed();
            debug!(
                model = %model,
                elapsed_ms = elapsed.as_millis() as u64,
                "Model answered: {}",
                one_line_preview(&text, 80)
            );
            ModelResponse::success(model, text, elapsed)
        }
        Err(e) => {
            warn!(model = %model, "Model invocation failed: {}", e);
            ModelResponse::failure(model, e)
        }
    }
}

/// [`ModelInvoker`] backed by an [`LlmGateway`]
pub struct TimedInvoker<G: LlmGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: LlmGateway + 'static> TimedInvoker<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl<G: LlmGateway + 'static> ModelInvoker for TimedInvoker<G> {
    fn model(&self) -> &Model {
        self.gateway.model()
    }

    async fn invoke(&self, prompt: &Prompt) -> ModelResponse {
        invoke_gateway(self.gateway.as_ref(), prompt.as_str()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::GatewayError;
    use duel_domain::{ERROR_PREFIX, Question};
    use std::sync::Mutex;
    use std::time::Duration;

    struct DelayedGateway {
        model: Model,
        delay: Duration,
        answer: String,
        seen_prompts: Mutex<Vec<String>>,
    }

    impl DelayedGateway {
        fn new(delay_ms: u64, answer: &str) -> Self {
            Self {
                model: Model::Gpt4o,
                delay: Duration::from_millis(delay_ms),
                answer: answer.to_string(),
                seen_prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl LlmGateway for DelayedGateway {
        fn model(&self) -> &Model {
            &self.model
        }

        async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
            self.seen_prompts.lock().unwrap().push(prompt.to_string());
            tokio::time::sleep(self.delay).await;
            Ok(self.answer.clone())
        }
    }

    struct FailingGateway {
        model: Model,
        error: fn() -> GatewayError,
    }

    #[async_trait]
    impl LlmGateway for FailingGateway {
        fn model(&self) -> &Model {
            &self.model
        }

        async fn generate(&self, _prompt: &str) -> Result<String, GatewayError> {
            tokio::time::sleep(Duration::from_millis(10)).await;
            Err((self.error)())
        }
    }

    fn prompt() -> Prompt {
        Prompt::for_question(&Question::try_new("What is 2+2?").unwrap())
    }

    #[tokio::test]
    async fn test_success_reports_wall_clock_time() {
        let gateway = Arc::new(DelayedGateway::new(50, "2 + 2 = 4"));
        let invoker = TimedInvoker::new(Arc::clone(&gateway));

        let outer = Instant::now();
        let response = invoker.invoke(&prompt()).await;
        let wall = outer.elapsed().as_secs_f64();

        assert!(response.succeeded);
        assert_eq!(response.text, "2 + 2 = 4");
        assert_eq!(response.model, "gpt-4o");
        assert!(response.elapsed_seconds >= 0.05);
        assert!(response.elapsed_seconds <= wall);
    }

    #[tokio::test]
    async fn test_prompt_is_forwarded_unchanged() {
        let gateway = Arc::new(DelayedGateway::new(0, "4"));
        let invoker = TimedInvoker::new(Arc::clone(&gateway));
        let prompt = prompt();

        invoker.invoke(&prompt).await;

        let seen = gateway.seen_prompts.lock().unwrap();
        assert_eq!(seen.as_slice(), [prompt.as_str().to_string()]);
    }

    #[tokio::test]
    async fn test_failures_are_contained() {
        let errors: [fn() -> GatewayError; 4] = [
            || GatewayError::ConnectionError("connection refused".to_string()),
            || GatewayError::HttpStatus {
                status: 401,
                body: "invalid api key".to_string(),
            },
            || GatewayError::MalformedResponse("missing choices[0]".to_string()),
            || GatewayError::Timeout,
        ];

        for error in errors {
            let gateway = FailingGateway {
                model: Model::TinyLlama,
                error,
            };
            let response = invoke_gateway(&gateway, "prompt").await;

            assert!(!response.succeeded);
            assert!(response.text.starts_with(ERROR_PREFIX));
            assert_eq!(response.text, format!("Error: {}", error()));
            assert_eq!(response.elapsed_seconds, 0.0);
            assert_eq!(response.model, "tinyllama");
        }
    }
}
