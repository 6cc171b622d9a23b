//! PostgreSQL document store.
//!
//! All collections share the `documents` table. Equality filters become a
//! JSONB containment test (`body @> $filter`), which the GIN index serves.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use jobportal_core::error::{AppError, ErrorKind};
use jobportal_core::result::AppResult;
use jobportal_core::traits::DocumentStore;
use jobportal_core::types::Filter;

/// Document store over a PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    /// Create a new store over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn db_error(message: &str, err: sqlx::Error) -> AppError {
    AppError::with_source(ErrorKind::Database, message.to_string(), err)
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert(&self, collection: &str, id: Uuid, doc: Value) -> AppResult<()> {
        let result = sqlx::query(
            "INSERT INTO documents (collection, id, body) VALUES ($1, $2, $3) \
             ON CONFLICT (collection, id) DO NOTHING",
        )
        .bind(collection)
        .bind(id)
        .bind(&doc)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.is_unique_violation() {
                    return AppError::conflict(format!(
                        "A document in '{collection}' already has this unique value"
                    ));
                }
            }
            db_error("Failed to insert document", e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::conflict(format!(
                "Document {id} already exists in '{collection}'"
            )));
        }
        Ok(())
    }

    async fn get(&self, collection: &str, id: Uuid) -> AppResult<Option<Value>> {
        sqlx::query_scalar::<_, Value>(
            "SELECT body FROM documents WHERE collection = $1 AND id = $2",
        )
        .bind(collection)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch document", e))
    }

    async fn find(&self, collection: &str, filter: &Filter) -> AppResult<Vec<Value>> {
        sqlx::query_scalar::<_, Value>(
            "SELECT body FROM documents \
             WHERE collection = $1 AND body @> $2 AND ($3::uuid[] IS NULL OR id = ANY($3)) \
             ORDER BY created_at DESC",
        )
        .bind(collection)
        .bind(filter.as_object())
        .bind(filter.ids.as_deref())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to query documents", e))
    }

    async fn replace(&self, collection: &str, id: Uuid, doc: Value) -> AppResult<bool> {
        sqlx::query(
            "UPDATE documents SET body = $3, updated_at = NOW() \
             WHERE collection = $1 AND id = $2",
        )
        .bind(collection)
        .bind(id)
        .bind(&doc)
        .execute(&self.pool)
        .await
        .map(|r| r.rows_affected() > 0)
        .map_err(|e| db_error("Failed to replace document", e))
    }

    async fn delete(&self, collection: &str, id: Uuid) -> AppResult<bool> {
        sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await
            .map(|r| r.rows_affected() > 0)
            .map_err(|e| db_error("Failed to delete document", e))
    }

    async fn delete_many(&self, collection: &str, filter: &Filter) -> AppResult<u64> {
        sqlx::query(
            "DELETE FROM documents \
             WHERE collection = $1 AND body @> $2 AND ($3::uuid[] IS NULL OR id = ANY($3))",
        )
        .bind(collection)
        .bind(filter.as_object())
        .bind(filter.ids.as_deref())
        .execute(&self.pool)
        .await
        .map(|r| r.rows_affected())
        .map_err(|e| db_error("Failed to delete documents", e))
    }

    async fn count(&self, collection: &str, filter: &Filter) -> AppResult<u64> {
        let n: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM documents \
             WHERE collection = $1 AND body @> $2 AND ($3::uuid[] IS NULL OR id = ANY($3))",
        )
        .bind(collection)
        .bind(filter.as_object())
        .bind(filter.ids.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("Failed to count documents", e))?;
        Ok(n as u64)
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| db_error("Health check failed", e))
    }
}
