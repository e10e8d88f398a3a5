use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use medibot_embeddings::GoogleEmbedding;
use medibot_llm::GroqClient;
use medibot_pinecone::PineconeIndex;
use medibot_rag::{RagPipeline, VectorRetriever};
use medibot_server::{router, AppConfig, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("medibot=info,medibot_rag=info,medibot_pinecone=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    let embedder = GoogleEmbedding::new(
        config.google_api_key.clone(),
        config.embed_model.clone(),
        config.embed_dimension,
    )
    .with_task_type("RETRIEVAL_QUERY");

    let mut index_builder = PineconeIndex::builder()
        .base_url(config.pinecone_index_host.clone())
        .api_key(config.pinecone_api_key.clone())
        .expected_dimension(config.embed_dimension);
    if let Some(namespace) = &config.pinecone_namespace {
        index_builder = index_builder.namespace(namespace.clone());
    }
    if let Some(index_name) = &config.pinecone_index_name {
        index_builder = index_builder.index_name(index_name.clone());
    }
    let index = index_builder.build().await?;

    let llm = GroqClient::new(config.groq_api_key.clone())?.with_model(config.groq_model.clone());
    let retriever = VectorRetriever::new(embedder, index);

    let pipeline = RagPipeline::new(Arc::new(retriever), Arc::new(llm));

    let app = router(AppState {
        pipeline: Arc::new(pipeline),
    });

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "medibot listening");
    axum::serve(listener, app).await?;
    Ok(())
}
