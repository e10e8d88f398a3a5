use crate::client::PineconeHttpClient;
use crate::store::PineconeIndex;
use crate::PineconeError;

pub struct PineconeIndexBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    namespace: Option<String>,
    text_key: String,
    index_name: Option<String>,
    expected_dimension: Option<usize>,
}

impl Default for PineconeIndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PineconeIndexBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            namespace: None,
            text_key: "text".to_string(),
            index_name: None,
            expected_dimension: None,
        }
    }

    pub fn base_url(mut self, value: impl Into<String>) -> Self {
        self.base_url = Some(value.into());
        self
    }

    pub fn api_key(mut self, value: impl Into<String>) -> Self {
        self.api_key = Some(value.into());
        self
    }

    pub fn namespace(mut self, value: impl Into<String>) -> Self {
        self.namespace = Some(value.into());
        self
    }

    pub fn text_key(mut self, value: impl Into<String>) -> Self {
        self.text_key = value.into();
        self
    }

    /// Label used in logs only; the data plane is addressed by `base_url`.
    pub fn index_name(mut self, value: impl Into<String>) -> Self {
        self.index_name = Some(value.into());
        self
    }

    /// When set, the index dimension reported by `describe_index_stats`
    /// is checked against this on build (warn-only).
    pub fn expected_dimension(mut self, value: usize) -> Self {
        self.expected_dimension = Some(value);
        self
    }

    pub async fn build(self) -> Result<PineconeIndex, PineconeError> {
        let base_url = self
            .base_url
            .ok_or_else(|| PineconeError::Config("base_url is required".to_string()))?;
        let api_key = self
            .api_key
            .ok_or_else(|| PineconeError::Config("api_key is required".to_string()))?;

        let client = PineconeHttpClient::new(base_url, api_key)?;
        let index = PineconeIndex::new(client, self.namespace, self.text_key, self.index_name);
        if let Some(expected) = self.expected_dimension {
            index.validate_dimension_on_init(expected).await;
        }
        Ok(index)
    }
}
