use std::collections::HashMap;

use medibot_core::Document;
use serde_json::Value;

use crate::error::PineconeError;

/// Reconstructs a document from a query match.
///
/// The chunk text lives under `text_key` in the match metadata. The
/// metadata map is carried over whole, text key included, since the
/// response payload echoes it back verbatim. A match without the text
/// key maps to a document with empty content — the caller decides what
/// an all-empty result set means, it is not an error at this layer.
pub fn match_to_document(
    id: &str,
    metadata: &Value,
    text_key: &str,
) -> Result<Document, PineconeError> {
    let object = metadata
        .as_object()
        .ok_or_else(|| PineconeError::Malformed("match metadata must be an object".to_string()))?;
    let text = object
        .get(text_key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let out: HashMap<String, Value> = object
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    Ok(Document {
        id: id.to_string(),
        content: text,
        metadata: out,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_full_metadata_including_text_key() {
        let metadata = json!({"text": "hello", "source": "doc1.pdf", "page": 3});
        let doc = match_to_document("a", &metadata, "text").unwrap();
        assert_eq!(doc.content, "hello");
        assert_eq!(doc.metadata["text"], json!("hello"));
        assert_eq!(doc.metadata["source"], json!("doc1.pdf"));
        assert_eq!(doc.metadata.len(), 3);
    }

    #[test]
    fn missing_text_key_yields_empty_content() {
        let metadata = json!({"source": "doc2.pdf", "page": 1});
        let doc = match_to_document("b", &metadata, "text").unwrap();
        assert_eq!(doc.content, "");
        assert_eq!(doc.metadata.len(), 2);
    }

    #[test]
    fn non_object_metadata_is_malformed() {
        let err = match_to_document("c", &json!("nope"), "text").unwrap_err();
        assert!(matches!(err, PineconeError::Malformed(_)));
    }
}
