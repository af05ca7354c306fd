//! Business Services
//!
//! This module contains the business logic services:
//!
//! - `ItemService` - relational item CRUD
//! - `GraphItemService` - graph item CRUD keyed by name
//! - `SyncedItemService` - relational CRUD mirrored into the graph store
//! - `LlmService` - Ollama generation proxy with payload normalization
//!
//! Services sit between the store layer and the HTTP API and own the rules
//! about what absence and partial failure mean.

pub mod error;
pub mod graph_item_service;
pub mod item_service;
pub mod llm_service;
pub mod synced_item_service;

pub use error::{FormatError, ItemServiceError, LlmError};
pub use graph_item_service::GraphItemService;
pub use item_service::ItemService;
pub use llm_service::LlmService;
pub use synced_item_service::SyncedItemService;
