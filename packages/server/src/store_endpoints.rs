//! Single-Store Item Endpoints
//!
//! Direct access to each store without mirroring.
//!
//! # Endpoints
//!
//! - `POST /postgres/items/`, `GET|PUT|DELETE /postgres/items/:id`
//! - `POST /neo4j/items/`, `GET|PUT|DELETE /neo4j/items/:name`
//!
//! Graph items have no id; `PUT /neo4j/items/:name` matches on the path
//! name and may rename the node through the body.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};

use crate::item_endpoints::DeleteResponse;
use crate::{AppState, HttpError};
use itemsync_core::models::{GraphItem, Item, ItemInput};

async fn create_postgres_item(
    State(state): State<AppState>,
    Json(input): Json<ItemInput>,
) -> Result<Json<Item>, HttpError> {
    Ok(Json(state.items.create_item(&input).await?))
}

async fn get_postgres_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Item>, HttpError> {
    Ok(Json(state.items.get_item(id).await?))
}

async fn update_postgres_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<ItemInput>,
) -> Result<Json<Item>, HttpError> {
    Ok(Json(state.items.update_item(id, &input).await?))
}

async fn delete_postgres_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteResponse>, HttpError> {
    state.items.delete_item(id).await?;
    Ok(Json(DeleteResponse::ok()))
}

async fn create_neo4j_item(
    State(state): State<AppState>,
    Json(input): Json<ItemInput>,
) -> Result<Json<GraphItem>, HttpError> {
    Ok(Json(state.graph_items.create_item(&input).await?))
}

async fn get_neo4j_item(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<GraphItem>, HttpError> {
    Ok(Json(state.graph_items.get_item(&name).await?))
}

async fn update_neo4j_item(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(input): Json<ItemInput>,
) -> Result<Json<GraphItem>, HttpError> {
    Ok(Json(state.graph_items.update_item(&name, &input).await?))
}

/// Always `{ok: true}`; nothing matching is not an error
async fn delete_neo4j_item(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<DeleteResponse>, HttpError> {
    state.graph_items.delete_item(&name).await?;
    Ok(Json(DeleteResponse::ok()))
}

/// Create router with the single-store endpoints
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/postgres/items", post(create_postgres_item))
        .route("/postgres/items/", post(create_postgres_item))
        .route(
            "/postgres/items/:id",
            get(get_postgres_item)
                .put(update_postgres_item)
                .delete(delete_postgres_item),
        )
        .route("/neo4j/items", post(create_neo4j_item))
        .route("/neo4j/items/", post(create_neo4j_item))
        .route(
            "/neo4j/items/:name",
            get(get_neo4j_item)
                .put(update_neo4j_item)
                .delete(delete_neo4j_item),
        )
        .with_state(state)
}
