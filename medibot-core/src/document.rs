use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::Value;

/// A text chunk with its source metadata, as stored in the vector index.
///
/// `metadata` typically carries `source` (originating file) and `page`;
/// `content` may be empty when the index entry was written without a text
/// field.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Document {
    pub id: String,
    pub content: String,
    pub metadata: HashMap<String, Value>,
}
