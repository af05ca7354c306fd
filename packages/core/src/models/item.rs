//! Item Models
//!
//! An item exists in two shapes:
//!
//! - [`Item`] - the relational row, identified by a store-assigned integer id
//! - [`GraphItem`] - the graph node, which has no id and is looked up by name
//!
//! Both are written from the same [`ItemInput`] request body.

use serde::{Deserialize, Serialize};

/// Relational item row
///
/// The `id` is assigned by the relational store on insert and is never reused
/// after deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub description: String,
}

/// Request body for creating or replacing an item
///
/// Updates are full replacements: both fields are always written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemInput {
    pub name: String,
    pub description: String,
}

impl ItemInput {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Graph item node (`(:Item {name, description})`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphItem {
    pub name: String,
    pub description: String,
}

impl From<&ItemInput> for GraphItem {
    fn from(input: &ItemInput) -> Self {
        Self {
            name: input.name.clone(),
            description: input.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_serializes_with_id() {
        let item = Item {
            id: 7,
            name: "widget".to_string(),
            description: "a small widget".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({"id": 7, "name": "widget", "description": "a small widget"})
        );
    }

    #[test]
    fn test_item_input_requires_both_fields() {
        let missing = serde_json::from_value::<ItemInput>(json!({"name": "widget"}));
        assert!(missing.is_err());

        let input: ItemInput =
            serde_json::from_value(json!({"name": "widget", "description": "d"})).unwrap();
        assert_eq!(input, ItemInput::new("widget", "d"));
    }

    #[test]
    fn test_graph_item_has_no_id() {
        let node = GraphItem::from(&ItemInput::new("widget", "d"));
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({"name": "widget", "description": "d"})
        );
    }
}
