use std::env;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {var}: {reason}")]
    InvalidVar { var: &'static str, reason: String },
}

/// Everything the binary reads from the environment, resolved once at
/// startup. Below this struct no code touches ambient state.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub pinecone_api_key: String,
    pub pinecone_index_host: String,
    pub pinecone_namespace: Option<String>,
    pub pinecone_index_name: Option<String>,
    pub google_api_key: String,
    pub embed_model: String,
    pub embed_dimension: usize,
    pub groq_api_key: String,
    pub groq_model: String,
}

fn required(var: &'static str) -> Result<String, ConfigError> {
    env::var(var).map_err(|_| ConfigError::MissingVar(var))
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let embed_dimension = match env::var("EMBED_DIMENSION") {
            Ok(raw) => raw.parse::<usize>().map_err(|err| ConfigError::InvalidVar {
                var: "EMBED_DIMENSION",
                reason: err.to_string(),
            })?,
            Err(_) => 3072,
        };

        Ok(Self {
            bind_addr: env::var("MEDIBOT_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string()),
            pinecone_api_key: required("PINECONE_API_KEY")?,
            pinecone_index_host: required("PINECONE_INDEX_HOST")?,
            pinecone_namespace: env::var("PINECONE_NAMESPACE").ok(),
            pinecone_index_name: env::var("PINECONE_INDEX_NAME").ok(),
            google_api_key: required("GOOGLE_API_KEY")?,
            embed_model: env::var("EMBED_MODEL")
                .unwrap_or_else(|_| "gemini-embedding-001".to_string()),
            embed_dimension,
            groq_api_key: required("GROQ_API_KEY")?,
            groq_model: env::var("GROQ_MODEL")
                .unwrap_or_else(|_| "llama-3.3-70b-versatile".to_string()),
        })
    }
}
