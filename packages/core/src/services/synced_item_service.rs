//! Synced Item Service - relational write followed by a graph write
//!
//! The relational store is the system of record. Each mutating operation
//! writes the relational row first and, only if that succeeded, issues one
//! graph call. The two writes are sequential and independent:
//!
//! - a relational failure means no graph call is made
//! - a graph failure is returned to the caller, but the relational write has
//!   already been committed and is not undone
//!
//! # Rename behavior
//!
//! [`SyncedItemService::update_item`] locates the graph node by the *new*
//! name. When the update renames the item, the existing node (still under the
//! old name) is not matched and the graph side is left untouched. That
//! zero-match case is indistinguishable from success for the caller.
//! Names are not unique, so every node carrying the new name receives the
//! description. Deletion uses the name of the deleted row, so it is unaffected.

use crate::db::{GraphStore, ItemStore};
use crate::models::{Item, ItemInput};
use crate::services::error::ItemServiceError;
use crate::services::{GraphItemService, ItemService};
use std::sync::Arc;

/// Item operations mirrored into the graph store
#[derive(Clone)]
pub struct SyncedItemService {
    items: ItemService,
    graph: Arc<dyn GraphStore>,
}

impl SyncedItemService {
    pub fn new(items: Arc<dyn ItemStore>, graph: Arc<dyn GraphStore>) -> Self {
        Self {
            items: ItemService::new(items),
            graph,
        }
    }

    /// Graph-only view over the same graph store
    pub fn graph_service(&self) -> GraphItemService {
        GraphItemService::new(self.graph.clone())
    }

    /// Insert the row, then create a graph node with the same fields
    pub async fn create_item(&self, input: &ItemInput) -> Result<Item, ItemServiceError> {
        let item = self.items.create_item(input).await?;

        if let Err(e) = self.graph.create(input).await {
            tracing::warn!(
                "Graph create failed after item {} was committed: {}",
                item.id,
                e
            );
            return Err(e.into());
        }

        Ok(item)
    }

    /// Read the relational row; the graph store is not consulted
    pub async fn get_item(&self, id: i32) -> Result<Item, ItemServiceError> {
        self.items.get_item(id).await
    }

    /// Replace the row, then set the description on every graph node carrying
    /// the new name
    pub async fn update_item(&self, id: i32, input: &ItemInput) -> Result<Item, ItemServiceError> {
        let item = self.items.update_item(id, input).await?;

        match self
            .graph
            .set_description(&item.name, &item.description)
            .await
        {
            Ok(0) => {
                tracing::warn!(
                    "No graph item named '{}' while syncing item {}; graph left unchanged",
                    item.name,
                    item.id
                );
            }
            Ok(matched) => {
                tracing::debug!("Synced item {} into {} graph node(s)", item.id, matched);
            }
            Err(e) => {
                tracing::warn!(
                    "Graph update failed after item {} was committed: {}",
                    item.id,
                    e
                );
                return Err(e.into());
            }
        }

        Ok(item)
    }

    /// Delete the row, then delete graph nodes with the deleted row's name
    pub async fn delete_item(&self, id: i32) -> Result<Item, ItemServiceError> {
        let item = self.items.delete_item(id).await?;

        if let Err(e) = self.graph.delete(&item.name).await {
            tracing::warn!(
                "Graph delete failed after item {} was removed: {}",
                item.id,
                e
            );
            return Err(e.into());
        }

        Ok(item)
    }
}
