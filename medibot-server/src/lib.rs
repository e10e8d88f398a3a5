//! HTTP boundary for the medibot pipeline.
//!
//! One answering endpoint (`POST /ask`, form field `question`) plus a
//! health probe. All wiring of external clients happens in the binary;
//! the router only needs a ready [`medibot_rag::RagPipeline`].

pub mod config;
pub mod routes;

pub use config::{AppConfig, ConfigError};
pub use routes::{router, AppState};
