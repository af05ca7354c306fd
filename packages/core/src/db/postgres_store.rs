//! PgItemStore - ItemStore Implementation for PostgreSQL
//!
//! Items live in a single `items` table:
//!
//! ```sql
//! CREATE TABLE items (
//!     id          SERIAL PRIMARY KEY,
//!     name        VARCHAR,
//!     description VARCHAR
//! );
//! ```
//!
//! Every method is a single statement executed on a pooled connection, so
//! each write is committed as soon as the call returns. Update and delete use
//! `RETURNING` to report whether a row matched without a separate lookup.

use crate::db::{DatabaseError, ItemStore};
use crate::models::{Item, ItemInput};
use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};

const SCHEMA_STATEMENTS: [&str; 4] = [
    "CREATE TABLE IF NOT EXISTS items (
        id SERIAL PRIMARY KEY,
        name VARCHAR,
        description VARCHAR
    )",
    "CREATE INDEX IF NOT EXISTS ix_items_id ON items (id)",
    "CREATE INDEX IF NOT EXISTS ix_items_name ON items (name)",
    "CREATE INDEX IF NOT EXISTS ix_items_description ON items (description)",
];

/// PostgreSQL-backed item store
#[derive(Clone)]
pub struct PgItemStore {
    pool: PgPool,
}

impl PgItemStore {
    /// Create a store for `database_url` without opening a connection yet
    ///
    /// Connection problems (including an incomplete URL) surface on the first
    /// query rather than here.
    ///
    /// # Errors
    ///
    /// Returns an error only if the URL cannot be parsed.
    pub fn connect_lazy(database_url: &str) -> Result<Self, DatabaseError> {
        let pool = PgPoolOptions::new()
            .connect_lazy(database_url)
            .map_err(|e| DatabaseError::connection_failed("postgres", e.to_string()))?;

        Ok(Self { pool })
    }

    /// Wrap an existing pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the `items` table and its indexes if they do not exist
    pub async fn initialize_schema(&self) -> Result<(), DatabaseError> {
        for statement in SCHEMA_STATEMENTS {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| DatabaseError::initialization_failed(e.to_string()))?;
        }

        tracing::debug!("items schema ready");
        Ok(())
    }
}

#[async_trait]
impl ItemStore for PgItemStore {
    async fn create(&self, input: &ItemInput) -> Result<Item, DatabaseError> {
        let item = sqlx::query_as::<_, Item>(
            "INSERT INTO items (name, description) VALUES ($1, $2)
             RETURNING id, name, description",
        )
        .bind(&input.name)
        .bind(&input.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }

    async fn get(&self, id: i32) -> Result<Option<Item>, DatabaseError> {
        let item =
            sqlx::query_as::<_, Item>("SELECT id, name, description FROM items WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(item)
    }

    async fn update(&self, id: i32, input: &ItemInput) -> Result<Option<Item>, DatabaseError> {
        let item = sqlx::query_as::<_, Item>(
            "UPDATE items SET name = $2, description = $3 WHERE id = $1
             RETURNING id, name, description",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.description)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    async fn delete(&self, id: i32) -> Result<Option<Item>, DatabaseError> {
        let item = sqlx::query_as::<_, Item>(
            "DELETE FROM items WHERE id = $1 RETURNING id, name, description",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
