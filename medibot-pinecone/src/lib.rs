//! Pinecone vector index integration for medibot.
//!
//! Query-only data-plane client: this service never writes to the index
//! (ingestion happens out of band), so the crate exposes similarity
//! search plus a dimension sanity check and nothing else. Credentials
//! and the index host come in through [`PineconeIndexBuilder`]; reading
//! them from the environment is the binary's job.

pub mod client;
mod config;
mod error;
pub mod mapper;
mod store;
mod types;

pub use config::PineconeIndexBuilder;
pub use error::PineconeError;
pub use store::PineconeIndex;
