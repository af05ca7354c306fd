//! Graph Item Service - name-keyed CRUD on the graph store

use crate::db::GraphStore;
use crate::models::{GraphItem, ItemInput};
use crate::services::error::ItemServiceError;
use std::sync::Arc;

/// Graph item operations
#[derive(Clone)]
pub struct GraphItemService {
    store: Arc<dyn GraphStore>,
}

impl GraphItemService {
    pub fn new(store: Arc<dyn GraphStore>) -> Self {
        Self { store }
    }

    /// Create a node and echo it back
    pub async fn create_item(&self, input: &ItemInput) -> Result<GraphItem, ItemServiceError> {
        self.store.create(input).await?;
        tracing::debug!("Created graph item '{}'", input.name);
        Ok(GraphItem::from(input))
    }

    /// Fetch the first node named `name`
    pub async fn get_item(&self, name: &str) -> Result<GraphItem, ItemServiceError> {
        self.store
            .get(name)
            .await?
            .ok_or_else(|| ItemServiceError::graph_item_not_found(name))
    }

    /// Set name and description on the first node named `match_name`
    pub async fn update_item(
        &self,
        match_name: &str,
        input: &ItemInput,
    ) -> Result<GraphItem, ItemServiceError> {
        self.store
            .update(match_name, input)
            .await?
            .ok_or_else(|| ItemServiceError::graph_item_not_found(match_name))
    }

    /// Delete nodes named `name`; no existence check
    pub async fn delete_item(&self, name: &str) -> Result<(), ItemServiceError> {
        self.store.delete(name).await?;
        tracing::debug!("Deleted graph item '{}'", name);
        Ok(())
    }
}
