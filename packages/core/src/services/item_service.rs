//! Item Service - Relational CRUD
//!
//! Thin business layer over an [`ItemStore`]: turns absent rows into
//! [`ItemServiceError::ItemNotFound`]. Used directly by the relational-only
//! endpoints and as the first step of the synced workflow.

use crate::db::ItemStore;
use crate::models::{Item, ItemInput};
use crate::services::error::ItemServiceError;
use std::sync::Arc;

/// Relational item operations
#[derive(Clone)]
pub struct ItemService {
    store: Arc<dyn ItemStore>,
}

impl ItemService {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    /// Insert a new item
    pub async fn create_item(&self, input: &ItemInput) -> Result<Item, ItemServiceError> {
        let item = self.store.create(input).await?;
        tracing::debug!("Created item {}", item.id);
        Ok(item)
    }

    /// Fetch an item by id
    pub async fn get_item(&self, id: i32) -> Result<Item, ItemServiceError> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| ItemServiceError::item_not_found(id))
    }

    /// Replace name and description of an item
    pub async fn update_item(&self, id: i32, input: &ItemInput) -> Result<Item, ItemServiceError> {
        let item = self
            .store
            .update(id, input)
            .await?
            .ok_or_else(|| ItemServiceError::item_not_found(id))?;

        tracing::debug!("Updated item {}", id);
        Ok(item)
    }

    /// Delete an item, returning the row as it was
    pub async fn delete_item(&self, id: i32) -> Result<Item, ItemServiceError> {
        let item = self
            .store
            .delete(id)
            .await?
            .ok_or_else(|| ItemServiceError::item_not_found(id))?;

        tracing::debug!("Deleted item {}", id);
        Ok(item)
    }
}
