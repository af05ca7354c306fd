//! Database Error Types
//!
//! This module defines error types for store operations, covering both the
//! relational (PostgreSQL) and the graph (Neo4j) backend. "Not found" is not
//! an error at this layer: store methods return `Option` and the service
//! layer decides what absence means.

use thiserror::Error;

/// Store operation errors
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a store connection
    #[error("Failed to connect to {store}: {reason}")]
    ConnectionFailed { store: &'static str, reason: String },

    /// Failed to initialize the relational schema
    #[error("Failed to initialize database schema: {0}")]
    InitializationFailed(String),

    /// sqlx operation error
    #[error("Relational store operation failed: {0}")]
    Sql(#[from] sqlx::Error),

    /// neo4rs operation error
    #[error("Graph store operation failed: {0}")]
    Graph(#[from] neo4rs::Error),

    /// A graph record could not be decoded into an item
    #[error("Failed to decode graph record: {0}")]
    GraphDecode(String),
}

impl DatabaseError {
    /// Create a connection failed error
    pub fn connection_failed(store: &'static str, reason: impl Into<String>) -> Self {
        Self::ConnectionFailed {
            store,
            reason: reason.into(),
        }
    }

    /// Create an initialization failed error
    pub fn initialization_failed(msg: impl Into<String>) -> Self {
        Self::InitializationFailed(msg.into())
    }

    /// Create a graph decode error
    pub fn graph_decode(msg: impl Into<String>) -> Self {
        Self::GraphDecode(msg.into())
    }
}
