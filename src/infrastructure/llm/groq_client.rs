use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{GenerationRequest, LlmClient, LlmClientError};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::config::LlmSettings;

/// Chat-completion client for Groq's OpenAI-compatible API. Works against
/// any server exposing `POST {base_url}/chat/completions`.
pub struct GroqClient {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    error: Option<ApiError>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiError {
    message: String,
}

impl GroqClient {
    pub fn new(
        base_url: &str,
        api_key: String,
        request_timeout: Duration,
    ) -> Result<Self, LlmClientError> {
        let client = Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| LlmClientError::ApiRequestFailed(format!("failed to build client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn build_messages<'a>(request: &'a GenerationRequest) -> Vec<ChatMessage<'a>> {
        vec![
            ChatMessage {
                role: "system",
                content: &request.system_prompt,
            },
            ChatMessage {
                role: "user",
                content: &request.user_content,
            },
        ]
    }
}

#[async_trait]
impl LlmClient for GroqClient {
    #[tracing::instrument(
        skip(self, request),
        fields(model = %request.model, max_tokens = request.max_tokens)
    )]
    async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmClientError> {
        tracing::debug!(
            user_content = %sanitize_prompt(&request.user_content),
            "Sending chat completion"
        );

        let request_body = ChatCompletionRequest {
            model: &request.model,
            messages: Self::build_messages(request),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            tracing::warn!("Chat completion rate limited");
            return Err(LlmClientError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmClientError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmClientError::InvalidResponse(e.to_string()))?;

        if let Some(error) = completion.error {
            return Err(LlmClientError::ApiRequestFailed(error.message));
        }

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| LlmClientError::InvalidResponse("empty choices".to_string()))
    }
}

pub fn create_groq_client(settings: &LlmSettings) -> Result<GroqClient, LlmClientError> {
    if settings.api_key.trim().is_empty() {
        tracing::warn!("No LLM API key configured, generation requests will be rejected upstream");
    }

    GroqClient::new(
        &settings.base_url,
        settings.api_key.clone(),
        settings.request_timeout(),
    )
}
