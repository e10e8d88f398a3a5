use async_trait::async_trait;
use medibot_core::{Embedding, EmbeddingError};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::EmbeddingProviderError;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Client for Gemini text embeddings (`models/{model}:embedContent`).
///
/// `dimension` is the caller's declared expectation; a response with a
/// different vector length is rejected rather than silently passed on to
/// the vector store.
#[derive(Clone)]
pub struct GoogleEmbedding {
    base_url: String,
    api_key: String,
    model: String,
    dimension: usize,
    task_type: Option<String>,
    http: Client,
}

impl GoogleEmbedding {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>, dimension: usize) -> Self {
        Self {
            base_url: GEMINI_BASE_URL.to_string(),
            api_key: api_key.into(),
            model: model.into(),
            dimension,
            task_type: None,
            http: Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Gemini task hint, e.g. `RETRIEVAL_QUERY` for question embeddings.
    pub fn with_task_type(mut self, task_type: impl Into<String>) -> Self {
        self.task_type = Some(task_type.into());
        self
    }

    fn model_name(&self) -> &str {
        self.model
            .strip_prefix("models/")
            .unwrap_or(self.model.as_str())
    }

    fn embed_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:embedContent",
            self.base_url.trim_end_matches('/'),
            self.model_name()
        )
    }
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EmbedContentRequest {
    content: Content,
    #[serde(skip_serializing_if = "Option::is_none")]
    task_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EmbedContentResponse {
    embedding: ContentEmbedding,
}

#[derive(Debug, Deserialize)]
struct ContentEmbedding {
    #[serde(alias = "value")]
    values: Vec<f32>,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorResponse {
    error: GoogleErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorDetail {
    message: String,
}

#[async_trait]
impl Embedding for GoogleEmbedding {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let request = EmbedContentRequest {
            content: Content {
                parts: vec![Part {
                    text: text.to_string(),
                }],
            },
            task_type: self.task_type.clone(),
        };

        let response = self
            .http
            .post(self.embed_url())
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|err| EmbeddingProviderError::Request(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            if status == StatusCode::TOO_MANY_REQUESTS {
                return Err(EmbeddingError::RateLimited);
            }
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GoogleErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| format!("HTTP {}: {}", status, body));
            return Err(EmbeddingProviderError::Request(message).into());
        }

        let response = response
            .json::<EmbedContentResponse>()
            .await
            .map_err(|err| EmbeddingProviderError::Request(err.to_string()))?;

        if response.embedding.values.len() != self.dimension {
            return Err(EmbeddingProviderError::InvalidResponse(format!(
                "expected embedding dimension {}, got {}",
                self.dimension,
                response.embedding.values.len()
            ))
            .into());
        }

        Ok(response.embedding.values)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
