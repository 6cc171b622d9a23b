//! Generic repository for any [`Document`] type.

use std::marker::PhantomData;
use std::sync::Arc;

use tracing::error;
use uuid::Uuid;

use jobportal_core::result::AppResult;
use jobportal_core::types::Filter;
use jobportal_entity::{Document, Owned};

use crate::connection::DatabaseHandle;

/// CRUD access to one collection, (de)serializing `T` at the boundary.
///
/// Query results are ordered newest first by `created_at`.
#[derive(Debug)]
pub struct Repository<T> {
    db: Arc<DatabaseHandle>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
            _marker: PhantomData,
        }
    }
}

impl<T: Document> Repository<T> {
    /// Create a new repository over the shared handle.
    pub fn new(db: Arc<DatabaseHandle>) -> Self {
        Self {
            db,
            _marker: PhantomData,
        }
    }

    /// Insert a new record.
    pub async fn create(&self, record: &T) -> AppResult<()> {
        let store = self.db.get().await?;
        let body = serde_json::to_value(record)?;
        store
            .insert(T::COLLECTION, record.id(), body)
            .await
            .inspect_err(|e| log_store_error(T::COLLECTION, "insert", e))
    }

    /// Find a record by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<T>> {
        let store = self.db.get().await?;
        let doc = store
            .get(T::COLLECTION, id)
            .await
            .inspect_err(|e| log_store_error(T::COLLECTION, "get", e))?;
        doc.map(serde_json::from_value).transpose().map_err(Into::into)
    }

    /// Find every record matching the filter, newest first.
    pub async fn find(&self, filter: &Filter) -> AppResult<Vec<T>> {
        let store = self.db.get().await?;
        let docs = store
            .find(T::COLLECTION, filter)
            .await
            .inspect_err(|e| log_store_error(T::COLLECTION, "find", e))?;
        let mut records = docs
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>()?;
        records.sort_by_key(|r| std::cmp::Reverse(r.created_at()));
        Ok(records)
    }

    /// All records in the collection.
    pub async fn find_all(&self) -> AppResult<Vec<T>> {
        self.find(&Filter::all()).await
    }

    /// Overwrite a stored record. Returns `false` if it no longer exists.
    pub async fn update(&self, record: &T) -> AppResult<bool> {
        let store = self.db.get().await?;
        let body = serde_json::to_value(record)?;
        store
            .replace(T::COLLECTION, record.id(), body)
            .await
            .inspect_err(|e| log_store_error(T::COLLECTION, "replace", e))
    }

    /// Delete a record by id.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let store = self.db.get().await?;
        store
            .delete(T::COLLECTION, id)
            .await
            .inspect_err(|e| log_store_error(T::COLLECTION, "delete", e))
    }

    /// Delete every record matching the filter.
    pub async fn delete_many(&self, filter: &Filter) -> AppResult<u64> {
        let store = self.db.get().await?;
        store
            .delete_many(T::COLLECTION, filter)
            .await
            .inspect_err(|e| log_store_error(T::COLLECTION, "delete_many", e))
    }

    /// Count records matching the filter.
    pub async fn count(&self, filter: &Filter) -> AppResult<u64> {
        let store = self.db.get().await?;
        store.count(T::COLLECTION, filter).await
    }
}

impl<T: Document + Owned> Repository<T> {
    /// Filter selecting records owned by `owner`.
    pub fn owned_by(owner: Uuid) -> Filter {
        Filter::all().eq_id(T::owner_field(), owner)
    }

    /// Records owned by `owner`, newest first.
    pub async fn find_owned_by(&self, owner: Uuid) -> AppResult<Vec<T>> {
        self.find(&Self::owned_by(owner)).await
    }
}

fn log_store_error(collection: &str, op: &str, err: &jobportal_core::AppError) {
    if err.kind.is_server_fault() {
        error!(collection, op, error = %err, "Document store operation failed");
    }
}
