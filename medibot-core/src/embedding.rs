use async_trait::async_trait;

use crate::EmbeddingError;

/// Turns text into a fixed-dimension vector for similarity search.
#[async_trait]
pub trait Embedding: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    fn dimension(&self) -> usize;
}
