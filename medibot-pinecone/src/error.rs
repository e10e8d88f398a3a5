use medibot_core::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PineconeError {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("pinecone api error {status}: {message}")]
    Api { status: u16, message: String },
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<PineconeError> for StoreError {
    fn from(value: PineconeError) -> Self {
        match value {
            PineconeError::Config(message) => StoreError::Config(message),
            other => StoreError::Internal(Box::new(other)),
        }
    }
}
