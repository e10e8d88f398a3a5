//! Groq LLM client

use std::time::Duration;

use medibot_core::{ChatLlm, LlmError, LlmRequest, LlmResponse};

use crate::openai_compatible::OpenAiCompatibleClient;

const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Groq chat client with the service's default model preconfigured.
#[derive(Clone)]
pub struct GroqClient(OpenAiCompatibleClient);

impl GroqClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, LlmError> {
        Ok(Self(OpenAiCompatibleClient::new(
            GROQ_BASE_URL,
            api_key,
            DEFAULT_MODEL,
            Duration::from_secs(120),
        )?))
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.0.set_default_model(model);
        self
    }
}

#[async_trait::async_trait]
impl ChatLlm for GroqClient {
    async fn complete(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
        self.0.complete(request).await
    }
}
