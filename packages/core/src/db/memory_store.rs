//! In-memory store implementations
//!
//! Behave like the PostgreSQL and Neo4j stores for the purposes of the
//! service layer: ids are assigned monotonically and never reused, graph
//! names are not unique and lookups act on the first node in insertion order.

use crate::db::{DatabaseError, GraphStore, ItemStore};
use crate::models::{GraphItem, Item, ItemInput};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::Mutex;

#[derive(Default)]
struct ItemTable {
    last_id: i32,
    rows: BTreeMap<i32, Item>,
}

/// In-memory relational item store
#[derive(Default)]
pub struct InMemoryItemStore {
    table: Mutex<ItemTable>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows currently stored
    pub async fn len(&self) -> usize {
        self.table.lock().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn create(&self, input: &ItemInput) -> Result<Item, DatabaseError> {
        let mut table = self.table.lock().await;
        table.last_id += 1;

        let item = Item {
            id: table.last_id,
            name: input.name.clone(),
            description: input.description.clone(),
        };
        table.rows.insert(item.id, item.clone());

        Ok(item)
    }

    async fn get(&self, id: i32) -> Result<Option<Item>, DatabaseError> {
        Ok(self.table.lock().await.rows.get(&id).cloned())
    }

    async fn update(&self, id: i32, input: &ItemInput) -> Result<Option<Item>, DatabaseError> {
        let mut table = self.table.lock().await;

        Ok(table.rows.get_mut(&id).map(|row| {
            row.name = input.name.clone();
            row.description = input.description.clone();
            row.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<Option<Item>, DatabaseError> {
        Ok(self.table.lock().await.rows.remove(&id))
    }
}

/// In-memory graph item store
#[derive(Default)]
pub struct InMemoryGraphStore {
    nodes: Mutex<Vec<GraphItem>>,
}

impl InMemoryGraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All nodes in insertion order
    pub async fn nodes(&self) -> Vec<GraphItem> {
        self.nodes.lock().await.clone()
    }
}

#[async_trait]
impl GraphStore for InMemoryGraphStore {
    async fn create(&self, input: &ItemInput) -> Result<(), DatabaseError> {
        self.nodes.lock().await.push(GraphItem::from(input));
        Ok(())
    }

    async fn get(&self, name: &str) -> Result<Option<GraphItem>, DatabaseError> {
        let nodes = self.nodes.lock().await;
        Ok(nodes.iter().find(|node| node.name == name).cloned())
    }

    async fn update(
        &self,
        match_name: &str,
        input: &ItemInput,
    ) -> Result<Option<GraphItem>, DatabaseError> {
        let mut nodes = self.nodes.lock().await;

        Ok(nodes
            .iter_mut()
            .find(|node| node.name == match_name)
            .map(|node| {
                node.name = input.name.clone();
                node.description = input.description.clone();
                node.clone()
            }))
    }

    async fn set_description(&self, name: &str, description: &str) -> Result<u64, DatabaseError> {
        let mut matched = 0;

        for node in self.nodes.lock().await.iter_mut().filter(|node| node.name == name) {
            node.description = description.to_string();
            matched += 1;
        }

        Ok(matched)
    }

    async fn delete(&self, name: &str) -> Result<(), DatabaseError> {
        self.nodes.lock().await.retain(|node| node.name != name);
        Ok(())
    }
}
