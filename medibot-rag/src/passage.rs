use std::collections::HashMap;

use medibot_core::{SearchResult, Value};

/// One retrieved chunk: identifier, similarity score, text and source
/// metadata. Immutable once retrieved; lives for a single request.
#[derive(Clone, Debug, PartialEq)]
pub struct Passage {
    pub id: String,
    pub score: f32,
    pub text: String,
    pub metadata: HashMap<String, Value>,
}

impl Passage {
    /// Originating file, `"Unknown"` when the index never stored one.
    pub fn source(&self) -> String {
        self.metadata
            .get("source")
            .and_then(Value::as_str)
            .unwrap_or("Unknown")
            .to_string()
    }

    /// Page number as stored (string or number), `"N/A"` when missing.
    pub fn page(&self) -> Value {
        self.metadata
            .get("page")
            .cloned()
            .unwrap_or_else(|| Value::String("N/A".to_string()))
    }
}

impl From<SearchResult> for Passage {
    fn from(result: SearchResult) -> Self {
        Self {
            id: result.document.id,
            score: result.score,
            text: result.document.content,
            metadata: result.document.metadata,
        }
    }
}
