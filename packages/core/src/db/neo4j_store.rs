//! Neo4jGraphStore - GraphStore Implementation for Neo4j
//!
//! Items are stored as `(:Item {name, description})` nodes. There is no
//! separate id; the name is the lookup key and is not unique.
//!
//! Every method checks a connection out of the driver pool, runs one
//! parameterized Cypher query, and hands the connection back when the call
//! returns. The pool guard is dropped on every exit path, error or not.

use crate::db::{DatabaseError, GraphStore};
use crate::models::{GraphItem, ItemInput};
use async_trait::async_trait;
use neo4rs::{query, Graph, Row};

const CREATE_ITEM: &str = "CREATE (a:Item {name: $name, description: $description})";

const GET_ITEM: &str = "MATCH (a:Item {name: $name})
     RETURN a.name AS name, a.description AS description
     LIMIT 1";

const UPDATE_ITEM: &str = "MATCH (a:Item {name: $match_name})
     WITH a LIMIT 1
     SET a.name = $name, a.description = $description
     RETURN a.name AS name, a.description AS description";

const SET_DESCRIPTION: &str = "MATCH (a:Item {name: $name})
     SET a.description = $description
     RETURN count(a) AS matched";

const DELETE_ITEM: &str = "MATCH (a:Item {name: $name}) DELETE a";

/// Neo4j-backed graph store
#[derive(Clone)]
pub struct Neo4jGraphStore {
    graph: Graph,
}

impl Neo4jGraphStore {
    /// Create a driver handle for `uri` with basic auth
    ///
    /// # Errors
    ///
    /// Returns an error if the driver rejects the connection settings.
    pub async fn connect(uri: &str, user: &str, password: &str) -> Result<Self, DatabaseError> {
        let graph = Graph::new(uri, user, password)
            .await
            .map_err(|e| DatabaseError::connection_failed("neo4j", e.to_string()))?;

        Ok(Self { graph })
    }

    /// Wrap an existing driver handle
    pub fn from_graph(graph: Graph) -> Self {
        Self { graph }
    }

    /// Run a query and decode at most one returned row
    async fn fetch_first(&self, q: neo4rs::Query) -> Result<Option<GraphItem>, DatabaseError> {
        let mut rows = self.graph.execute(q).await?;

        match rows.next().await? {
            Some(row) => decode_item(&row).map(Some),
            None => Ok(None),
        }
    }
}

fn decode_item(row: &Row) -> Result<GraphItem, DatabaseError> {
    let name: String = row
        .get("name")
        .map_err(|e| DatabaseError::graph_decode(format!("name: {}", e)))?;
    let description: String = row
        .get("description")
        .map_err(|e| DatabaseError::graph_decode(format!("description: {}", e)))?;

    Ok(GraphItem { name, description })
}

#[async_trait]
impl GraphStore for Neo4jGraphStore {
    async fn create(&self, input: &ItemInput) -> Result<(), DatabaseError> {
        self.graph
            .run(
                query(CREATE_ITEM)
                    .param("name", input.name.clone())
                    .param("description", input.description.clone()),
            )
            .await?;

        Ok(())
    }

    async fn get(&self, name: &str) -> Result<Option<GraphItem>, DatabaseError> {
        self.fetch_first(query(GET_ITEM).param("name", name.to_string()))
            .await
    }

    async fn update(
        &self,
        match_name: &str,
        input: &ItemInput,
    ) -> Result<Option<GraphItem>, DatabaseError> {
        self.fetch_first(
            query(UPDATE_ITEM)
                .param("match_name", match_name.to_string())
                .param("name", input.name.clone())
                .param("description", input.description.clone()),
        )
        .await
    }

    async fn set_description(&self, name: &str, description: &str) -> Result<u64, DatabaseError> {
        let mut rows = self
            .graph
            .execute(
                query(SET_DESCRIPTION)
                    .param("name", name.to_string())
                    .param("description", description.to_string()),
            )
            .await?;

        let matched: i64 = match rows.next().await? {
            Some(row) => row
                .get("matched")
                .map_err(|e| DatabaseError::graph_decode(format!("matched: {}", e)))?,
            None => 0,
        };

        Ok(u64::try_from(matched).unwrap_or(0))
    }

    async fn delete(&self, name: &str) -> Result<(), DatabaseError> {
        self.graph
            .run(query(DELETE_ITEM).param("name", name.to_string()))
            .await?;

        Ok(())
    }
}
