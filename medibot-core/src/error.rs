use std::error::Error as StdError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("embedding invalid response: {0}")]
    InvalidResponse(String),
    #[error("embedding rate limited")]
    RateLimited,
    #[error("embedding provider error: {0}")]
    Provider(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid store configuration: {0}")]
    Config(String),
    #[error("store error: {0}")]
    Internal(#[source] Box<dyn StdError + Send + Sync>),
}

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("llm provider error: {0}")]
    Provider(String),
    #[error("llm returned a malformed response: {0}")]
    Malformed(String),
}
