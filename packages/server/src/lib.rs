//! ItemSync HTTP server
//!
//! REST API over the ItemSync services. Store handles and service objects
//! are built once by the binary and injected into every handler through
//! axum's `State`; handlers hold no other shared state.
//!
//! # Architecture
//!
//! The server is organized into endpoint modules merged into one router:
//! - `item_endpoints`: health check and synced item CRUD (`/items`)
//! - `store_endpoints`: single-store CRUD (`/postgres/items`, `/neo4j/items`)
//! - `llm_endpoints`: LLM proxy (`/ollama`)
//!
//! # Security
//!
//! No authentication. CORS allows any origin unless `CORS_ALLOW_ORIGIN` names one.

use axum::{
    http::{header::HeaderValue, Method},
    Router,
};
use std::future::Future;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use itemsync_core::db::{GraphStore, ItemStore};
use itemsync_core::services::{GraphItemService, ItemService, LlmService, SyncedItemService};
use itemsync_core::AppConfig;

pub mod item_endpoints;
pub mod llm_endpoints;
pub mod store_endpoints;

// Shared HTTP error handling
mod http_error;

pub use http_error::{HttpError, MALFORMED_PAYLOAD_MESSAGE};

/// Application state shared across all endpoints
#[derive(Clone)]
pub struct AppState {
    pub synced_items: Arc<SyncedItemService>,
    pub items: Arc<ItemService>,
    pub graph_items: Arc<GraphItemService>,
    pub llm: Arc<LlmService>,
}

impl AppState {
    /// Build all services over the given store handles
    pub fn new(items: Arc<dyn ItemStore>, graph: Arc<dyn GraphStore>, llm: LlmService) -> Self {
        let synced_items = SyncedItemService::new(items.clone(), graph);

        Self {
            graph_items: Arc::new(synced_items.graph_service()),
            synced_items: Arc::new(synced_items),
            items: Arc::new(ItemService::new(items)),
            llm: Arc::new(llm),
        }
    }
}

/// Create the main application router with all endpoint modules
pub fn create_router(state: AppState, cors_allow_origin: Option<&str>) -> Router {
    Router::new()
        .merge(item_endpoints::routes(state.clone()))
        .merge(store_endpoints::routes(state.clone()))
        .merge(llm_endpoints::routes(state))
        .layer(cors_layer(cors_allow_origin))
        .layer(TraceLayer::new_for_http())
}

/// Create CORS layer
///
/// Restricted to `origin` when it is a valid header value, any origin otherwise.
fn cors_layer(origin: Option<&str>) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    match origin.map(|o| (o, o.parse::<HeaderValue>())) {
        Some((_, Ok(value))) => layer.allow_origin(value),
        Some((raw, Err(_))) => {
            tracing::warn!("Ignoring invalid CORS_ALLOW_ORIGIN '{}'", raw);
            layer.allow_origin(Any)
        }
        None => layer.allow_origin(Any),
    }
}

/// Run `run` with the relational store, then close the store
///
/// The store is closed whether `run` succeeds or fails, so startup errors
/// after the pool exists still release it.
pub async fn run_with_item_store<S, F, Fut>(items: Arc<S>, run: F) -> anyhow::Result<()>
where
    S: ItemStore + ?Sized,
    F: FnOnce(Arc<S>) -> Fut,
    Fut: Future<Output = anyhow::Result<()>>,
{
    let result = run(items.clone()).await;

    if let Err(e) = &result {
        tracing::error!("❌ Server exited with error: {}", e);
    }
    items.close().await;

    result
}

/// Serve the API until Ctrl-C or SIGTERM
///
/// # Errors
///
/// Returns error if the server fails to bind or start.
pub async fn start_server(state: AppState, config: &AppConfig) -> anyhow::Result<()> {
    let app = create_router(state, config.cors_allow_origin.as_deref());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("🚀 ItemSync API listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("🛑 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
