//! Document store trait for pluggable persistence backends.

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::result::AppResult;
use crate::types::filter::Filter;

/// A collection-oriented document store.
///
/// Documents are JSON objects addressed by `(collection, id)`. Every
/// operation touches a single document atomically; nothing spans
/// documents or collections.
#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new document. Fails with a conflict if the id already exists.
    async fn insert(&self, collection: &str, id: Uuid, doc: Value) -> AppResult<()>;

    /// Fetch a document by id.
    async fn get(&self, collection: &str, id: Uuid) -> AppResult<Option<Value>>;

    /// Fetch all documents matching the filter.
    async fn find(&self, collection: &str, filter: &Filter) -> AppResult<Vec<Value>>;

    /// Replace an existing document. Returns `false` if it did not exist.
    async fn replace(&self, collection: &str, id: Uuid, doc: Value) -> AppResult<bool>;

    /// Delete a document by id. Returns `true` if it existed.
    async fn delete(&self, collection: &str, id: Uuid) -> AppResult<bool>;

    /// Delete every document matching the filter and return how many were removed.
    async fn delete_many(&self, collection: &str, filter: &Filter) -> AppResult<u64>;

    /// Count documents matching the filter.
    async fn count(&self, collection: &str, filter: &Filter) -> AppResult<u64>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
