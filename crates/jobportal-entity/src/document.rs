//! Traits shared by every persisted document.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

/// A record stored as one document in a named collection.
pub trait Document: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection name.
    const COLLECTION: &'static str;

    /// Primary key.
    fn id(&self) -> Uuid;

    /// Creation time, used for newest-first ordering.
    fn created_at(&self) -> DateTime<Utc>;
}

/// A record carrying a reference to the user that owns it.
pub trait Owned {
    /// Name of the serialized field holding the owner reference.
    fn owner_field() -> &'static str
    where
        Self: Sized;

    /// The owning user, if the reference is set.
    fn owner_id(&self) -> Option<Uuid>;
}
