//! Equality filters for document queries.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A conjunction of top-level field equalities, optionally restricted to a set of ids.
///
/// An empty filter matches every document in the collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    /// `(field, value)` pairs that must all match.
    pub equals: Vec<(String, Value)>,
    /// When set, only documents whose id is in this list match.
    pub ids: Option<Vec<Uuid>>,
}

impl Filter {
    /// A filter that matches everything.
    pub fn all() -> Self {
        Self::default()
    }

    /// Require `field == value`.
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.equals.push((field.into(), value.into()));
        self
    }

    /// Require `field` to equal the given id.
    pub fn eq_id(self, field: impl Into<String>, id: Uuid) -> Self {
        self.eq(field, Value::String(id.to_string()))
    }

    /// Restrict to the given ids.
    pub fn ids(mut self, ids: impl IntoIterator<Item = Uuid>) -> Self {
        self.ids = Some(ids.into_iter().collect());
        self
    }

    /// Whether the document with this id and body satisfies the filter.
    pub fn matches(&self, id: Uuid, doc: &Value) -> bool {
        if let Some(ids) = &self.ids {
            if !ids.contains(&id) {
                return false;
            }
        }
        self.equals
            .iter()
            .all(|(field, expected)| doc.get(field) == Some(expected))
    }

    /// The equality conditions as one JSON object, for containment queries.
    pub fn as_object(&self) -> Value {
        let map = self
            .equals
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect::<serde_json::Map<_, _>>();
        Value::Object(map)
    }
}
