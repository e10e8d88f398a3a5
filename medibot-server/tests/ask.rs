use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use medibot_core::{ChatLlm, LlmError, LlmRequest, LlmResponse};
use medibot_rag::{Passage, RagPipeline, Retriever, RetrievalError};
use medibot_server::{router, AppState};

struct FixedRetriever(Vec<Passage>);

#[async_trait]
impl Retriever for FixedRetriever {
    async fn retrieve(
        &self,
        _question: &str,
        _top_k: usize,
    ) -> Result<Vec<Passage>, RetrievalError> {
        Ok(self.0.clone())
    }
}

struct FixedLlm(Result<String, String>);

#[async_trait]
impl ChatLlm for FixedLlm {
    async fn complete(&self, _request: LlmRequest) -> Result<LlmResponse, LlmError> {
        match &self.0 {
            Ok(content) => Ok(LlmResponse {
                content: content.clone(),
            }),
            Err(message) => Err(LlmError::Provider(message.clone())),
        }
    }
}

fn passage(text: &str) -> Passage {
    let mut metadata = HashMap::new();
    metadata.insert("source".to_string(), json!("doc1.pdf"));
    metadata.insert("page".to_string(), json!(3));
    Passage {
        id: "chunk-1".to_string(),
        score: 0.9,
        text: text.to_string(),
        metadata,
    }
}

fn app(passages: Vec<Passage>, llm: FixedLlm) -> axum::Router {
    let pipeline = RagPipeline::new(Arc::new(FixedRetriever(passages)), Arc::new(llm));
    router(AppState {
        pipeline: Arc::new(pipeline),
    })
}

fn ask_request() -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/ask")
        .header(
            header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        )
        .body(Body::from("question=What%20are%20diabetes%20symptoms%3F"))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn ask_returns_answer_payload() {
    let app = app(
        vec![passage("Diabetes symptoms include thirst.")],
        FixedLlm(Ok("Thirst is a symptom.".to_string())),
    );

    let response = app.oneshot(ask_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["response"], json!("Thirst is a symptom."));
    assert_eq!(body["num_sources"], json!(1));
    assert_eq!(body["source_documents"][0]["source_file"], json!("doc1.pdf"));
    assert_eq!(body["retrieval_details"][0]["id"], json!("chunk-1"));
    assert!(body["retrieval_details"][0]["text_preview"]
        .as_str()
        .unwrap()
        .ends_with("..."));
}

#[tokio::test]
async fn ask_returns_404_when_no_passage_has_text() {
    let app = app(vec![passage("")], FixedLlm(Ok("never".to_string())));

    let response = app.oneshot(ask_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"], json!("No text content found in database"));
    assert!(body["suggestion"].as_str().unwrap().contains("re-upload"));
}

#[tokio::test]
async fn ask_returns_500_with_error_message_on_generation_failure() {
    let app = app(
        vec![passage("some text")],
        FixedLlm(Err("model unavailable".to_string())),
    );

    let response = app.oneshot(ask_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("model unavailable"));
}

#[tokio::test]
async fn health_returns_ok() {
    let app = app(vec![], FixedLlm(Ok(String::new())));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
