//! ItemSync Core Business Logic Layer
//!
//! This crate provides the data model, store abstractions, and services behind
//! the ItemSync HTTP API.
//!
//! # Architecture
//!
//! - **Relational store**: PostgreSQL via `sqlx`, system of record for items
//! - **Graph store**: Neo4j via `neo4rs`, `(:Item {name, description})` nodes keyed by name
//! - **Synced writes**: relational write first, then a best-effort graph write (no atomicity)
//! - **LLM proxy**: Ollama generation endpoint with JSON payload normalization
//!
//! # Modules
//!
//! - [`models`] - Data structures (Item, ItemInput, GraphItem)
//! - [`db`] - Store traits and backend implementations
//! - [`services`] - Business services (ItemService, SyncedItemService, LlmService, ...)
//! - [`config`] - Environment-driven runtime configuration

pub mod config;
pub mod db;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use config::AppConfig;
pub use models::*;
pub use services::*;
