//! Store Layer
//!
//! This module handles all store interactions:
//!
//! - [`ItemStore`] - relational item persistence (PostgreSQL in production)
//! - [`GraphStore`] - graph item persistence (Neo4j in production)
//! - In-memory implementations of both traits for tests and local runs
//!
//! # Architecture
//!
//! Store handles are created once at startup and injected into services as
//! `Arc<dyn ItemStore>` / `Arc<dyn GraphStore>`. There is no process-wide
//! connection state. Each call is a single auto-committed statement or a
//! single parameterized Cypher query; nothing here coordinates the two stores.

mod error;
mod memory_store;
mod neo4j_store;
mod postgres_store;
mod store;

pub use error::DatabaseError;
pub use memory_store::{InMemoryGraphStore, InMemoryItemStore};
pub use neo4j_store::Neo4jGraphStore;
pub use postgres_store::PgItemStore;
pub use store::{GraphStore, ItemStore};
