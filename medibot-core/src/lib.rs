//! Shared types and traits for the medibot workspace.
//!
//! Everything here is provider-agnostic: the embedding, vector-store and
//! chat-completion traits are implemented by the sibling crates
//! (`medibot-embeddings`, `medibot-pinecone`, `medibot-llm`) and consumed
//! by the pipeline in `medibot-rag`.

mod document;
mod embedding;
mod error;
mod llm;
mod vector_store;

pub use document::Document;
pub use embedding::Embedding;
pub use error::{EmbeddingError, LlmError, StoreError};
pub use llm::{ChatLlm, LlmRequest, LlmResponse, Message, Role};
pub use vector_store::{SearchResult, VectorStore};

pub type Value = serde_json::Value;
