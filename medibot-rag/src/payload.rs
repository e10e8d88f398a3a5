use std::collections::HashMap;

use medibot_core::Value;
use serde::{Deserialize, Serialize};

use crate::{Passage, SourceObserver};

const PREVIEW_CHARS: usize = 200;

/// One supporting source in the final payload.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SourceRecord {
    pub content: String,
    pub metadata: HashMap<String, Value>,
    pub source_file: String,
    pub page: Value,
}

/// Raw retrieval score and preview for one passage.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RetrievalDetail {
    pub id: String,
    pub score: f32,
    pub text_preview: String,
    pub source: String,
    pub page: Value,
}

/// The complete answer-with-citations response body.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AnswerPayload {
    pub response: String,
    pub source_documents: Vec<SourceRecord>,
    pub num_sources: usize,
    pub retrieval_details: Vec<RetrievalDetail>,
}

/// First 200 characters of the text followed by a literal `"..."`.
///
/// The ellipsis is appended even when nothing was truncated. That
/// matches the observed upstream behavior; changing it needs a product
/// decision, not a code fix.
pub fn text_preview(text: &str) -> String {
    let mut preview: String = text.chars().take(PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}

/// Builds the final payload from the answer text and the retrieved
/// passages, preserving retrieval rank order throughout. Each source
/// record is handed to `observer` as it is built.
pub fn assemble(
    answer: String,
    passages: &[Passage],
    observer: &dyn SourceObserver,
) -> AnswerPayload {
    let mut source_documents = Vec::with_capacity(passages.len());
    let mut retrieval_details = Vec::with_capacity(passages.len());

    for (index, passage) in passages.iter().enumerate() {
        let record = SourceRecord {
            content: passage.text.clone(),
            metadata: passage.metadata.clone(),
            source_file: passage.source(),
            page: passage.page(),
        };
        observer.observe(index, &record);
        source_documents.push(record);

        retrieval_details.push(RetrievalDetail {
            id: passage.id.clone(),
            score: passage.score,
            text_preview: text_preview(&passage.text),
            source: passage.source(),
            page: passage.page(),
        });
    }

    tracing::debug!(num_sources = source_documents.len(), "payload assembled");

    AnswerPayload {
        response: answer,
        num_sources: source_documents.len(),
        source_documents,
        retrieval_details,
    }
}
