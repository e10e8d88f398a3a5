use async_trait::async_trait;
use medibot_core::{Embedding, VectorStore};

use crate::{Passage, RetrievalError};

/// Turns a question into an ordered list of scored passages.
///
/// Exactly one production implementation exists (vector search over a
/// managed index); the trait keeps the pipeline open to other
/// strategies (keyword search, hybrid) without touching its contract.
#[async_trait]
pub trait Retriever: Send + Sync {
    /// Passages come back in descending similarity order as reported by
    /// the backing store; no re-ranking, filtering, or deduplication.
    async fn retrieve(&self, question: &str, top_k: usize)
        -> Result<Vec<Passage>, RetrievalError>;
}

pub struct VectorRetriever<E, S> {
    embedder: E,
    store: S,
}

impl<E, S> VectorRetriever<E, S>
where
    E: Embedding,
    S: VectorStore,
{
    pub fn new(embedder: E, store: S) -> Self {
        Self { embedder, store }
    }
}

#[async_trait]
impl<E, S> Retriever for VectorRetriever<E, S>
where
    E: Embedding + Send + Sync,
    S: VectorStore + Send + Sync,
{
    async fn retrieve(
        &self,
        question: &str,
        top_k: usize,
    ) -> Result<Vec<Passage>, RetrievalError> {
        let embedding = self.embedder.embed(question).await?;
        tracing::debug!(dimension = embedding.len(), "question embedded");
        let results = self.store.search(&embedding, top_k).await?;
        Ok(results.into_iter().map(Passage::from).collect())
    }
}
