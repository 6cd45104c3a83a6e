//! Quickstart: create a text namespace, upload documents, search and ask.
//!
//! API key is read from the environment:
//! - MOORCHEH_API_KEY (required)
//! - MOORCHEH_BASE_URL (optional)
//!
//! Usage:
//!   MOORCHEH_API_KEY="your_key" RUST_LOG=moorcheh_sdk=debug cargo run --example quickstart

use moorcheh_sdk::{AnswerRequest, Document, ErrorKind, MoorchehClient, NamespaceType, SearchRequest};
use tracing_subscriber::EnvFilter;

const NAMESPACE: &str = "quickstart-docs";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let client = MoorchehClient::new()?;

    match client.namespaces().create(NAMESPACE, NamespaceType::Text, None).await {
        Ok(created) => println!("Created namespace: {:?}", created),
        Err(e) if e.kind() == ErrorKind::Conflict => println!("Namespace '{}' already exists", NAMESPACE),
        Err(e) => return Err(e.into()),
    }

    let documents = vec![
        Document::new("doc-1", "Moorcheh is a semantic search engine built on information theory.")
            .with_field("source", "intro"),
        Document::new("doc-2", "Namespaces hold either text documents or caller-supplied vectors.")
            .with_field("source", "concepts"),
    ];
    let queued = client.documents().upload(NAMESPACE, &documents).await?;
    println!("Queued {} documents for indexing", queued.submitted_ids.len());

    let results = client
        .search()
        .query(SearchRequest::new([NAMESPACE], "what is a namespace?").top_k(3))
        .await?;
    for hit in &results.results {
        println!("{} (score {:?}): {}", hit.id, hit.score, hit.text.as_deref().unwrap_or(""));
    }

    let answer = client
        .answer()
        .generate(AnswerRequest::new(NAMESPACE, "Summarize what Moorcheh does."))
        .await?;
    println!("\nAnswer:\n{}", answer.answer);

    client.close();
    Ok(())
}
