//! Synced Item Endpoints
//!
//! Item CRUD where every successful relational write is followed by a graph
//! write. See `SyncedItemService` for the consistency caveats.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check endpoint
//! - `POST /items/` - Create an item
//! - `GET /items/:id` - Get an item by id
//! - `PUT /items/:id` - Replace an item
//! - `DELETE /items/:id` - Delete an item

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};

use crate::{AppState, HttpError};
use itemsync_core::models::{Item, ItemInput};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

/// Body returned by delete endpoints
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteResponse {
    pub ok: bool,
}

impl DeleteResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

/// Health check endpoint
///
/// ```bash
/// curl http://localhost:8000/health
/// ```
async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Create an item in both stores
///
/// ```bash
/// curl -X POST http://localhost:8000/items/ \
///   -H "Content-Type: application/json" \
///   -d '{"name": "kettle", "description": "boils water"}'
/// ```
async fn create_item(
    State(state): State<AppState>,
    Json(input): Json<ItemInput>,
) -> Result<Json<Item>, HttpError> {
    let item = state.synced_items.create_item(&input).await?;
    tracing::debug!("✅ Created item: {}", item.id);
    Ok(Json(item))
}

/// Get an item from the relational store
async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Item>, HttpError> {
    let item = state.synced_items.get_item(id).await?;
    Ok(Json(item))
}

/// Replace an item and sync the description into the graph
///
/// ```bash
/// curl -X PUT http://localhost:8000/items/1 \
///   -H "Content-Type: application/json" \
///   -d '{"name": "kettle", "description": "boils water fast"}'
/// ```
async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<ItemInput>,
) -> Result<Json<Item>, HttpError> {
    tracing::info!("📝 UPDATE request for item: {}", id);
    let item = state.synced_items.update_item(id, &input).await?;
    Ok(Json(item))
}

/// Delete an item from both stores
async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteResponse>, HttpError> {
    state.synced_items.delete_item(id).await?;
    tracing::debug!("✅ Deleted item: {}", id);
    Ok(Json(DeleteResponse::ok()))
}

/// Create router with the health check and synced item endpoints
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/items", post(create_item))
        .route("/items/", post(create_item))
        .route(
            "/items/:id",
            get(get_item).put(update_item).delete(delete_item),
        )
        .with_state(state)
}
