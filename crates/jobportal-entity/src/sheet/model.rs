//! Sheet model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::document::{Document, Owned};

/// A spreadsheet document. `cells` is stored opaquely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sheet {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub cells: serde_json::Value,
    #[serde(default)]
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Sheet {
    pub fn new(data: CreateSheet, created_by: Option<Uuid>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: data.name,
            cells: data.cells.unwrap_or_else(|| serde_json::json!([])),
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, update: UpdateSheet) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(cells) = update.cells {
            self.cells = cells;
        }
        self.updated_at = Utc::now();
    }
}

impl Document for Sheet {
    const COLLECTION: &'static str = "sheets";

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Owned for Sheet {
    fn owner_field() -> &'static str {
        "created_by"
    }

    fn owner_id(&self) -> Option<Uuid> {
        self.created_by
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSheet {
    pub name: String,
    pub cells: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSheet {
    pub name: Option<String>,
    pub cells: Option<serde_json::Value>,
}
