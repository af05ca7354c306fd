//! ItemSync HTTP Server Binary
//!
//! # Usage
//!
//! ```bash
//! POSTGRES_USER=app POSTGRES_PASSWORD=secret POSTGRES_HOST=localhost POSTGRES_DB=items \
//! NEO4J_URI=bolt://localhost:7687 NEO4J_USER=neo4j NEO4J_PASSWORD=secret \
//! OLLAMA_URL=http://localhost:11434 \
//! cargo run --bin itemsync-server
//! ```
//!
//! Variables may also be placed in a `.env` file. See `AppConfig` for the
//! full list; `RUST_LOG` controls logging (default `info`).

use std::sync::Arc;

use itemsync_core::db::{GraphStore, Neo4jGraphStore, PgItemStore};
use itemsync_core::services::LlmService;
use itemsync_core::AppConfig;
use itemsync_server::{run_with_item_store, start_server, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🚀 ItemSync API Server");

    let config = AppConfig::from_env();

    tracing::info!("🔧 Initializing stores...");

    let items = Arc::new(PgItemStore::connect_lazy(&config.postgres.database_url())?);

    run_with_item_store(items, |items| async move {
        items.initialize_schema().await?;
        tracing::info!("📦 PostgreSQL ready at {}", config.postgres.host);

        let llm = LlmService::new(config.ollama_url.clone(), config.ollama_model.clone())?;
        tracing::info!(
            "🤖 LLM proxy targeting {} (model {})",
            config.ollama_url,
            config.ollama_model
        );

        let graph = Arc::new(
            Neo4jGraphStore::connect(
                &config.neo4j.uri,
                &config.neo4j.user,
                &config.neo4j.password,
            )
            .await?,
        );
        tracing::info!("🕸️  Neo4j driver ready for {}", config.neo4j.uri);

        let state = AppState::new(items, graph.clone(), llm);
        let served = start_server(state, &config).await;
        graph.close().await;

        served
    })
    .await
}
