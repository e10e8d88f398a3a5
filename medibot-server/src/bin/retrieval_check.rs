//! Standalone retrieval check.
//!
//! Embeds a question, queries the index directly (top 3) and reports
//! whether each match carries text — the quickest way to tell a broken
//! ingestion run apart from a broken query path.
//!
//! ```bash
//! cargo run -p medibot-server --bin retrieval_check -- "How is hypertension treated?"
//! ```

use medibot_embeddings::GoogleEmbedding;
use medibot_pinecone::PineconeIndex;
use medibot_rag::{Retriever, VectorRetriever};
use medibot_server::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    let question = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "What are the symptoms of diabetes?".to_string());

    let embedder = GoogleEmbedding::new(
        config.google_api_key.clone(),
        config.embed_model.clone(),
        config.embed_dimension,
    )
    .with_task_type("RETRIEVAL_QUERY");

    let mut builder = PineconeIndex::builder()
        .base_url(config.pinecone_index_host.clone())
        .api_key(config.pinecone_api_key.clone());
    if let Some(namespace) = &config.pinecone_namespace {
        builder = builder.namespace(namespace.clone());
    }
    let index = builder.build().await?;
    let retriever = VectorRetriever::new(embedder, index);

    println!("query: {question}");
    let passages = retriever.retrieve(&question, 3).await?;
    println!("retrieved {} matches\n", passages.len());

    let mut with_text = 0;
    for (i, passage) in passages.iter().enumerate() {
        println!("match #{}", i + 1);
        println!("  id:     {}", passage.id);
        println!("  score:  {:.4}", passage.score);
        println!("  source: {}", passage.source());
        println!("  page:   {}", passage.page());
        if passage.text.is_empty() {
            println!("  text:   MISSING (no text key in metadata)");
        } else {
            with_text += 1;
            let preview: String = if passage.text.chars().count() > 300 {
                passage.text.chars().take(300).collect::<String>() + "..."
            } else {
                passage.text.clone()
            };
            println!("  text:   {preview}");
        }
        println!();
    }

    println!("matches with text: {with_text}/{}", passages.len());
    if with_text == 0 && !passages.is_empty() {
        println!("no match carries text; re-upload your documents so each chunk stores its text in metadata");
    }

    Ok(())
}
