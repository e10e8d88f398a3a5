//! Generic OpenAI-compatible chat client
//!
//! Works with any provider using OpenAI's API format (OpenAI, Groq,
//! DeepSeek, Together, etc.)

use std::time::Duration;

use medibot_core::{ChatLlm, LlmError, LlmRequest, LlmResponse, Message};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

/// Request body for the chat completions endpoint
#[derive(Serialize, Debug, Clone)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    pub stream: bool,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Choice {
    pub message: ResponseMessage,
    pub finish_reason: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ResponseMessage {
    pub role: String,
    pub content: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// OpenAI-style error response
#[derive(Deserialize, Debug, Clone)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

#[derive(Deserialize, Debug, Clone)]
struct ApiErrorDetail {
    message: String,
}

#[derive(Clone)]
pub struct OpenAiCompatibleClient {
    http: Client,
    base_url: String,
    api_key: String,
    default_model: String,
}

impl OpenAiCompatibleClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        default_model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let base_url = base_url.into();
        Url::parse(&base_url)
            .map_err(|err| LlmError::Provider(format!("invalid base_url: {err}")))?;
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| LlmError::Provider(err.to_string()))?;
        Ok(Self {
            http,
            base_url,
            api_key: api_key.into(),
            default_model: default_model.into(),
        })
    }

    pub fn set_default_model(&mut self, model: impl Into<String>) {
        self.default_model = model.into();
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait::async_trait]
impl ChatLlm for OpenAiCompatibleClient {
    async fn complete(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
        let LlmRequest { model, messages } = request;
        let model = if model.is_empty() {
            self.default_model.clone()
        } else {
            model
        };
        let body = ChatCompletionRequest {
            model,
            messages,
            temperature: None,
            stream: false,
        };

        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| LlmError::Provider(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| format!("HTTP {}: {}", status, body));
            return Err(LlmError::Provider(message));
        }

        let completion = response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|err| LlmError::Malformed(err.to_string()))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| LlmError::Malformed("response contained no choices".to_string()))?;

        Ok(LlmResponse { content })
    }
}
