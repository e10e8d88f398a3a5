use async_trait::async_trait;

use crate::{Document, StoreError};

#[derive(Clone, Debug)]
pub struct SearchResult {
    pub document: Document,
    pub score: f32,
}

/// Nearest-neighbor search over a precomputed embedding index.
///
/// Implementations must be safe to share across in-flight requests;
/// results come back in descending similarity order as reported by the
/// backing service.
#[async_trait]
pub trait VectorStore: Send + Sync {
    async fn search(
        &self,
        query_embedding: &[f32],
        top_k: usize,
    ) -> Result<Vec<SearchResult>, StoreError>;
}
