use medibot_core::{Embedding, EmbeddingError};
use medibot_embeddings::GoogleEmbedding;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn embed_returns_vector() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-embedding-001:embedContent"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "embedding": {"values": [0.1, 0.2, 0.3]}
        })))
        .mount(&server)
        .await;

    let embedder = GoogleEmbedding::new("test-key", "models/gemini-embedding-001", 3)
        .with_base_url(server.uri());

    let vector = embedder.embed("what are diabetes symptoms?").await.unwrap();
    assert_eq!(vector, vec![0.1, 0.2, 0.3]);
    assert_eq!(embedder.dimension(), 3);
}

#[tokio::test]
async fn dimension_mismatch_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "embedding": {"values": [0.1, 0.2]}
        })))
        .mount(&server)
        .await;

    let embedder = GoogleEmbedding::new("k", "gemini-embedding-001", 3).with_base_url(server.uri());

    let err = embedder.embed("q").await.unwrap_err();
    assert!(matches!(err, EmbeddingError::InvalidResponse(_)));
    assert!(err.to_string().contains("expected embedding dimension 3"));
}

#[tokio::test]
async fn too_many_requests_maps_to_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {"message": "quota exceeded"}
        })))
        .mount(&server)
        .await;

    let embedder = GoogleEmbedding::new("k", "gemini-embedding-001", 3).with_base_url(server.uri());

    let err = embedder.embed("q").await.unwrap_err();
    assert!(matches!(err, EmbeddingError::RateLimited));
}

#[tokio::test]
async fn api_error_message_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"message": "API key not valid"}
        })))
        .mount(&server)
        .await;

    let embedder = GoogleEmbedding::new("bad", "gemini-embedding-001", 3)
        .with_base_url(server.uri());

    let err = embedder.embed("q").await.unwrap_err();
    assert!(err.to_string().contains("API key not valid"));
}
