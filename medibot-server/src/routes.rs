use std::sync::Arc;

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use medibot_rag::{RagError, RagPipeline};

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<RagPipeline>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ask", post(ask))
        .route("/health", get(health))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct AskForm {
    pub question: String,
}

async fn ask(State(state): State<AppState>, Form(form): Form<AskForm>) -> Response {
    tracing::info!(question = %form.question, "user query");

    match state.pipeline.answer(&form.question).await {
        Ok(payload) => {
            tracing::info!(num_sources = payload.num_sources, "query successful");
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(RagError::NoContent) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "No text content found in database",
                "suggestion": "Please re-upload your documents so each chunk stores its text in metadata"
            })),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "error processing question");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": err.to_string()})),
            )
                .into_response()
        }
    }
}

async fn health() -> StatusCode {
    StatusCode::OK
}
