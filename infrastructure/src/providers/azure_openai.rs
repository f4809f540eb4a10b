//! Azure OpenAI chat-completion adapter
//!
//! Sends the prompt as a single user message to a hosted deployment:
//! `POST {endpoint}/openai/deployments/{deployment}/chat/completions?api-version={version}`
//! and reads `choices[0].message.content`.

use super::{build_http_client, error_for_status, map_transport_error};
use async_trait::async_trait;
use duel_application::{GatewayError, LlmGateway};
use duel_domain::{CloudSampling, Model};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

/// Resolved settings for the hosted model
#[derive(Debug, Clone)]
pub struct AzureOpenAiConfig {
    /// Resource endpoint, e.g. `https://my-resource.openai.azure.com`
    pub endpoint: String,
    pub api_key: String,
    pub api_version: String,
    /// Deployment name in the resource
    pub deployment: String,
    pub model: Model,
    pub sampling: CloudSampling,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Gateway to a hosted chat-completion deployment.
///
/// Created once at startup; the HTTP client inside is reused for every request.
pub struct AzureOpenAiGateway {
    client: reqwest::Client,
    config: AzureOpenAiConfig,
    url: String,
}

impl AzureOpenAiGateway {
    pub fn new(config: AzureOpenAiConfig) -> Result<Self, GatewayError> {
        let client = build_http_client(config.timeout)?;
        let url = format!(
            "{}/openai/deployments/{}/chat/completions",
            config.endpoint.trim_end_matches('/'),
            config.deployment
        );

        info!(
            endpoint = %config.endpoint,
            deployment = %config.deployment,
            api_version = %config.api_version,
            "Cloud model client initialized"
        );

        Ok(Self {
            client,
            config,
            url,
        })
    }
}

#[async_trait]
impl LlmGateway for AzureOpenAiGateway {
    fn model(&self) -> &Model {
        &self.config.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        let request = ChatCompletionRequest {
            model: self.config.model.as_str(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.config.sampling.temperature,
            max_tokens: self.config.sampling.max_tokens,
        };

        debug!(url = %self.url, model = %self.config.model, "Sending chat completion");

        let response = self
            .client
            .post(&self.url)
            .query(&[("api-version", self.config.api_version.as_str())])
            .header("api-key", &self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let body: ChatCompletionResponse = error_for_status(response)
            .await?
            .json()
            .await
            .map_err(map_transport_error)?;

        let choice = body.choices.into_iter().next().ok_or_else(|| {
            GatewayError::MalformedResponse("response contained no choices".to_string())
        })?;
        choice.message.content.ok_or_else(|| {
            GatewayError::MalformedResponse("first choice has no message content".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const DEPLOYMENT_PATH: &str = "/openai/deployments/gpt-4o/chat/completions";

    fn config_for(server: &MockServer) -> AzureOpenAiConfig {
        AzureOpenAiConfig {
            endpoint: format!("{}/", server.uri()),
            api_key: "test-key".to_string(),
            api_version: "2024-06-01".to_string(),
            deployment: "gpt-4o".to_string(),
            model: Model::Gpt4o,
            sampling: CloudSampling::default(),
            timeout: None,
        }
    }

    #[tokio::test]
    async fn test_generate_sends_chat_completion() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(DEPLOYMENT_PATH))
            .and(query_param("api-version", "2024-06-01"))
            .and(header("api-key", "test-key"))
            .and(body_json(json!({
                "model": "gpt-4o",
                "messages": [{"role": "user", "content": "What is 2+2?"}],
                "temperature": 0.0,
                "max_tokens": 2000
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"index": 0, "message": {"role": "assistant", "content": "2 + 2 = 4"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = AzureOpenAiGateway::new(config_for(&server)).unwrap();
        let text = gateway.generate("What is 2+2?").await.unwrap();
        assert_eq!(text, "2 + 2 = 4");
    }

    #[tokio::test]
    async fn test_auth_failure_maps_to_http_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(DEPLOYMENT_PATH))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid subscription key"))
            .mount(&server)
            .await;

        let gateway = AzureOpenAiGateway::new(config_for(&server)).unwrap();
        let err = gateway.generate("x").await.unwrap_err();
        match err {
            GatewayError::HttpStatus { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "invalid subscription key");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_choices_is_malformed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(DEPLOYMENT_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&server)
            .await;

        let gateway = AzureOpenAiGateway::new(config_for(&server)).unwrap();
        let err = gateway.generate("x").await.unwrap_err();
        assert!(matches!(err, GatewayError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_non_json_body_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(DEPLOYMENT_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&server)
            .await;

        let gateway = AzureOpenAiGateway::new(config_for(&server)).unwrap();
        assert!(gateway.generate("x").await.is_err());
    }

    #[tokio::test]
    async fn test_timeout_is_reported() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(DEPLOYMENT_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(Duration::from_millis(500))
                    .set_body_json(json!({"choices": []})),
            )
            .mount(&server)
            .await;

        let mut config = config_for(&server);
        config.timeout = Some(Duration::from_millis(50));
        let gateway = AzureOpenAiGateway::new(config).unwrap();
        let err = gateway.generate("x").await.unwrap_err();
        assert!(matches!(err, GatewayError::Timeout));
    }

    #[tokio::test]
    async fn test_invocation_contains_unreachable_endpoint() {
        let mut config = config_for(&MockServer::start().await);
        config.endpoint = "http://127.0.0.1:9".to_string();
        let gateway = AzureOpenAiGateway::new(config).unwrap();

        let response = duel_application::invoke_gateway(&gateway, "x").await;
        assert!(!response.succeeded);
        assert!(response.text.starts_with("Error: "));
        assert_eq!(response.elapsed_seconds, 0.0);
    }
}
