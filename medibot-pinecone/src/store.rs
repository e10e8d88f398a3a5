use medibot_core::{SearchResult, StoreError, VectorStore};
use serde_json::Value;

use crate::client::PineconeHttpClient;
use crate::config::PineconeIndexBuilder;
use crate::mapper::match_to_document;
use crate::types::{IndexStatsResponse, QueryRequest, QueryResponse};

/// Handle to one Pinecone index, scoped to an optional namespace.
#[derive(Debug)]
pub struct PineconeIndex {
    client: PineconeHttpClient,
    namespace: Option<String>,
    text_key: String,
    index_name: Option<String>,
}

impl PineconeIndex {
    pub fn builder() -> PineconeIndexBuilder {
        PineconeIndexBuilder::new()
    }

    pub(crate) fn new(
        client: PineconeHttpClient,
        namespace: Option<String>,
        text_key: String,
        index_name: Option<String>,
    ) -> Self {
        Self {
            client,
            namespace,
            text_key,
            index_name,
        }
    }

    pub fn text_key(&self) -> &str {
        &self.text_key
    }

    pub(crate) async fn validate_dimension_on_init(&self, expected: usize) {
        let response = self
            .client
            .post_typed::<Value, IndexStatsResponse>(
                "/describe_index_stats",
                &Value::Object(serde_json::Map::new()),
            )
            .await;

        match response {
            Ok(stats) => {
                if let Some(index_dim) = stats.dimension {
                    if index_dim != expected {
                        tracing::warn!(
                            index_name = ?self.index_name,
                            namespace = ?self.namespace,
                            index_dim = index_dim,
                            embedder_dim = expected,
                            "embedder dimension differs from pinecone index dimension"
                        );
                    }
                } else {
                    tracing::warn!("pinecone describe_index_stats response missing 'dimension'");
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to validate pinecone index dimension");
            }
        }
    }
}

#[async_trait::async_trait]
impl VectorStore for PineconeIndex {
    async fn search(
        &self,
        query_embedding: &[f32],
        top_k: usize,
    ) -> Result<Vec<SearchResult>, StoreError> {
        let span = tracing::info_span!(
            "pinecone_query",
            index_name = ?self.index_name,
            namespace = ?self.namespace,
            top_k = top_k,
            text_key = %self.text_key,
        );
        let _guard = span.enter();

        let request = QueryRequest {
            vector: query_embedding.to_vec(),
            top_k,
            include_metadata: true,
            namespace: self.namespace.clone(),
        };

        let response: QueryResponse = self
            .client
            .post_typed("/query", &request)
            .await
            .map_err(StoreError::from)?;

        tracing::debug!(matches = response.matches.len(), "pinecone query returned");

        let mut output = Vec::with_capacity(response.matches.len());
        for m in response.matches {
            let metadata = m
                .metadata
                .unwrap_or_else(|| Value::Object(serde_json::Map::new()));
            let document =
                match_to_document(&m.id, &metadata, &self.text_key).map_err(StoreError::from)?;
            output.push(SearchResult {
                document,
                score: m.score,
            });
        }

        Ok(output)
    }
}
