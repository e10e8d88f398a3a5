//! Gemini embedding provider for medibot.
//!
//! Wraps the `models/{model}:embedContent` endpoint of the Google
//! Generative Language API behind the [`medibot_core::Embedding`] trait.

mod error;
mod google;

pub use error::EmbeddingProviderError;
pub use google::GoogleEmbedding;
