//! Service Layer Error Types
//!
//! This module defines error types for service-layer operations. Store
//! failures are wrapped as-is; absence by the relevant key becomes a
//! not-found variant.

use crate::db::DatabaseError;
use thiserror::Error;

/// Item service errors
#[derive(Error, Debug)]
pub enum ItemServiceError {
    /// No relational row with this id
    #[error("Item not found: {id}")]
    ItemNotFound { id: i32 },

    /// No graph node with this name
    #[error("Graph item not found: {name}")]
    GraphItemNotFound { name: String },

    /// Store operation failed
    #[error("Database operation failed: {0}")]
    DatabaseError(#[from] DatabaseError),
}

impl ItemServiceError {
    /// Create an item not found error
    pub fn item_not_found(id: i32) -> Self {
        Self::ItemNotFound { id }
    }

    /// Create a graph item not found error
    pub fn graph_item_not_found(name: impl Into<String>) -> Self {
        Self::GraphItemNotFound { name: name.into() }
    }

    /// True for either not-found variant
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ItemNotFound { .. } | Self::GraphItemNotFound { .. }
        )
    }
}

/// Reasons an LLM envelope could not be turned into JSON
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The envelope body is not JSON
    #[error("response envelope is not valid JSON: {0}")]
    InvalidEnvelope(String),

    /// The envelope has no `response` field
    #[error("response envelope has no `response` field")]
    MissingResponse,

    /// The `response` field is present but not a string
    #[error("`response` field is not a string")]
    ResponseNotString,

    /// The `response` string does not contain JSON
    #[error("`response` field does not contain valid JSON: {0}")]
    InvalidResponseJson(String),
}

/// LLM proxy errors
#[derive(Error, Debug)]
pub enum LlmError {
    /// The inference endpoint answered with a non-success status
    #[error("LLM endpoint returned status {status}: {body}")]
    UpstreamRejected { status: u16, body: String },

    /// The inference endpoint answered with an unusable payload
    #[error("Malformed LLM payload: {0}")]
    MalformedPayload(#[from] FormatError),

    /// The request never produced a response
    #[error("LLM request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
