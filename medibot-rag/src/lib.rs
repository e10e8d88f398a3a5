//! The retrieve-then-generate pipeline.
//!
//! A question goes through three strictly sequential stages:
//! retrieval (embed + nearest-neighbor search), generation (one chat
//! completion over a grounded prompt), and assembly (the answer plus its
//! supporting sources as one JSON-ready payload). The only branch sits
//! between the first two stages: when no retrieved passage carries any
//! text, the pipeline bails out with [`RagError::NoContent`] before the
//! LLM is ever called.

mod error;
mod observer;
mod passage;
mod payload;
mod pipeline;
mod prompt;
mod retriever;

pub use error::{RagError, RetrievalError};
pub use observer::{SourceObserver, TracingObserver};
pub use passage::Passage;
pub use payload::{assemble, text_preview, AnswerPayload, RetrievalDetail, SourceRecord};
pub use pipeline::{RagPipeline, DEFAULT_TOP_K};
pub use prompt::{compose_prompt, PromptTemplate, REFUSAL_MESSAGE};
pub use retriever::{Retriever, VectorRetriever};
