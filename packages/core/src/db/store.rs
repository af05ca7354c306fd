//! Store Traits - Persistence Abstraction Layer
//!
//! The traits in this module sit between the services (business rules) and
//! the concrete backends. Services never see `sqlx` or `neo4rs` types.
//!
//! # Design Decisions
//!
//! 1. **Async-First**: All methods are async; both backends are network stores
//! 2. **Absence is `Option`**: Lookups that match nothing return `Ok(None)`;
//!    the service layer turns that into a not-found error where appropriate
//! 3. **Error Handling**: Backend failures surface as [`DatabaseError`]
//! 4. **No Transactions**: Each method is one auto-committed operation

use crate::db::DatabaseError;
use crate::models::{GraphItem, Item, ItemInput};
use async_trait::async_trait;

/// Relational item persistence keyed by store-assigned integer id
///
/// Implementations must be `Send + Sync` so a single handle can be shared by
/// all request handlers.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Insert a new row and return it with its assigned id
    async fn create(&self, input: &ItemInput) -> Result<Item, DatabaseError>;

    /// Fetch a row by id
    async fn get(&self, id: i32) -> Result<Option<Item>, DatabaseError>;

    /// Replace both fields of an existing row
    ///
    /// Returns `Ok(None)` when no row has this id.
    async fn update(&self, id: i32, input: &ItemInput) -> Result<Option<Item>, DatabaseError>;

    /// Remove a row, returning it as it was before deletion
    ///
    /// Returns `Ok(None)` when no row has this id.
    async fn delete(&self, id: i32) -> Result<Option<Item>, DatabaseError>;

    /// Release backend resources at shutdown
    async fn close(&self) {}
}

/// Graph item persistence keyed by node name
///
/// Names are not unique. Lookups and `update` act on the first matching node;
/// `set_description` and `delete` act on all of them.
#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Create a new `Item` node
    async fn create(&self, input: &ItemInput) -> Result<(), DatabaseError>;

    /// Fetch the first node named `name`
    async fn get(&self, name: &str) -> Result<Option<GraphItem>, DatabaseError>;

    /// Set name and description on the first node named `match_name`
    ///
    /// Returns `Ok(None)` when no node matched.
    async fn update(
        &self,
        match_name: &str,
        input: &ItemInput,
    ) -> Result<Option<GraphItem>, DatabaseError>;

    /// Set `description` on every node named `name`
    ///
    /// Returns the number of nodes matched; zero is not an error.
    async fn set_description(&self, name: &str, description: &str) -> Result<u64, DatabaseError>;

    /// Delete nodes named `name`
    ///
    /// Succeeds whether or not anything matched.
    async fn delete(&self, name: &str) -> Result<(), DatabaseError>;

    /// Release backend resources at shutdown
    async fn close(&self) {}
}
