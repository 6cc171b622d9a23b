//! In-memory document store backed by dashmap.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use jobportal_core::error::AppError;
use jobportal_core::result::AppResult;
use jobportal_core::traits::DocumentStore;
use jobportal_core::types::Filter;

/// Process-local document store. Contents are lost on restart.
///
/// Each collection is one shard entry, so a write to a collection holds
/// that collection's lock for the duration of the call.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: DashMap<String, HashMap<Uuid, Value>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(&self, collection: &str, id: Uuid, doc: Value) -> AppResult<()> {
        let mut docs = self.collections.entry(collection.to_string()).or_default();
        match docs.entry(id) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "Document {id} already exists in '{collection}'"
            ))),
            Entry::Vacant(slot) => {
                slot.insert(doc);
                Ok(())
            }
        }
    }

    async fn get(&self, collection: &str, id: Uuid) -> AppResult<Option<Value>> {
        Ok(self
            .collections
            .get(collection)
            .and_then(|docs| docs.get(&id).cloned()))
    }

    async fn find(&self, collection: &str, filter: &Filter) -> AppResult<Vec<Value>> {
        let Some(docs) = self.collections.get(collection) else {
            return Ok(Vec::new());
        };
        Ok(docs
            .iter()
            .filter(|(id, doc)| filter.matches(**id, doc))
            .map(|(_, doc)| doc.clone())
            .collect())
    }

    async fn replace(&self, collection: &str, id: Uuid, doc: Value) -> AppResult<bool> {
        let Some(mut docs) = self.collections.get_mut(collection) else {
            return Ok(false);
        };
        match docs.get_mut(&id) {
            Some(existing) => {
                *existing = doc;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, collection: &str, id: Uuid) -> AppResult<bool> {
        Ok(self
            .collections
            .get_mut(collection)
            .is_some_and(|mut docs| docs.remove(&id).is_some()))
    }

    async fn delete_many(&self, collection: &str, filter: &Filter) -> AppResult<u64> {
        let Some(mut docs) = self.collections.get_mut(collection) else {
            return Ok(0);
        };
        let before = docs.len();
        docs.retain(|id, doc| !filter.matches(*id, doc));
        let removed = (before - docs.len()) as u64;
        debug!(collection, removed, "Deleted documents");
        Ok(removed)
    }

    async fn count(&self, collection: &str, filter: &Filter) -> AppResult<u64> {
        Ok(self.collections.get(collection).map_or(0, |docs| {
            docs.iter()
                .filter(|(id, doc)| filter.matches(**id, doc))
                .count() as u64
        }))
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
