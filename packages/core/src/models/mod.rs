//! Data Models
//!
//! Plain data structures shared by the store layer, the services, and the
//! HTTP API. Serialization shapes match the JSON bodies exchanged with clients.

mod item;

pub use item::{GraphItem, Item, ItemInput};
