use medibot_core::{EmbeddingError, LlmError, StoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Request-level failure of the pipeline. Each request fails
/// independently; nothing here is retried or fatal to the process.
#[derive(Debug, Error)]
pub enum RagError {
    /// Every retrieved passage had empty text. The index likely holds
    /// vectors whose metadata never stored the chunk text.
    #[error("no text content found in retrieved documents")]
    NoContent,
    #[error("retrieval failed: {0}")]
    Retrieval(#[from] RetrievalError),
    #[error("generation failed: {0}")]
    Generation(#[from] LlmError),
}
