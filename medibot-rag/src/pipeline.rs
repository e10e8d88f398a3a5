use std::sync::Arc;

use medibot_core::{ChatLlm, LlmRequest, Message};

use crate::{
    assemble, compose_prompt, AnswerPayload, RagError, Retriever, SourceObserver, TracingObserver,
};

/// Matches retrieved in the serving path.
pub const DEFAULT_TOP_K: usize = 5;

/// Retrieve → generate → assemble, one request at a time.
///
/// Holds only stateless, shareable collaborators; a pipeline instance
/// is safe for any number of concurrent in-flight requests.
pub struct RagPipeline {
    retriever: Arc<dyn Retriever>,
    llm: Arc<dyn ChatLlm>,
    top_k: usize,
    observer: Arc<dyn SourceObserver>,
}

impl RagPipeline {
    pub fn new(retriever: Arc<dyn Retriever>, llm: Arc<dyn ChatLlm>) -> Self {
        Self {
            retriever,
            llm,
            top_k: DEFAULT_TOP_K,
            observer: Arc::new(TracingObserver),
        }
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn SourceObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Answers one question. Fails with [`RagError::NoContent`] before
    /// any LLM call when no retrieved passage carries text (including
    /// the zero-passages case); retrieval and generation failures
    /// propagate as-is, never retried.
    pub async fn answer(&self, question: &str) -> Result<AnswerPayload, RagError> {
        let passages = self.retriever.retrieve(question, self.top_k).await?;
        tracing::debug!(passages = passages.len(), "retrieval complete");

        if passages.iter().all(|p| p.text.is_empty()) {
            tracing::warn!(
                "no text content found in retrieved documents; \
                 check that the index stores chunk text in metadata"
            );
            return Err(RagError::NoContent);
        }

        // the model identifier is the chat client's concern; an empty
        // model field means its configured default
        let prompt = compose_prompt(question, &passages);
        let completion = self
            .llm
            .complete(LlmRequest {
                model: String::new(),
                messages: vec![Message::user(prompt)],
            })
            .await?;

        Ok(assemble(
            completion.content,
            &passages,
            self.observer.as_ref(),
        ))
    }
}
