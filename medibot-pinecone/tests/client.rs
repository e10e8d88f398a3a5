use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use medibot_pinecone::client::PineconeHttpClient;
use medibot_pinecone::PineconeError;

#[tokio::test]
async fn query_sends_api_key_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .and(header("Api-Key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"matches": []})))
        .mount(&server)
        .await;

    let client = PineconeHttpClient::new(server.uri(), "test-key".to_string()).unwrap();
    let payload = json!({"vector": [], "top_k": 1, "include_metadata": true});
    let _: Value = client.post_typed("/query", &payload).await.unwrap();
}

#[tokio::test]
async fn maps_api_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({"message": "rate limit"})))
        .mount(&server)
        .await;

    let client = PineconeHttpClient::new(server.uri(), "test-key".to_string()).unwrap();
    let err = client
        .post_typed::<Value, Value>("/query", &json!({}))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("429"));
    assert!(err.to_string().contains("rate limit"));
}

#[tokio::test]
async fn empty_api_key_is_rejected() {
    let err = PineconeHttpClient::new("https://example.test".to_string(), "  ".to_string())
        .unwrap_err();
    assert!(matches!(err, PineconeError::Config(_)));
}

#[tokio::test]
async fn invalid_base_url_is_rejected() {
    let err = PineconeHttpClient::new("not a url".to_string(), "key".to_string()).unwrap_err();
    assert!(matches!(err, PineconeError::Config(_)));
}
