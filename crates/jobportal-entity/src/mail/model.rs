//! Mail model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::document::{Document, Owned};

/// A mail composed inside the portal. Delivery happens elsewhere; this is
/// the sender's record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mail {
    pub id: Uuid,
    /// Recipient addresses.
    pub recipients: Vec<String>,
    pub subject: String,
    pub body: String,
    /// Sender.
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Mail {
    pub fn new(data: CreateMail, created_by: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            recipients: data.recipients,
            subject: data.subject,
            body: data.body,
            created_by,
            created_at: Utc::now(),
        }
    }
}

impl Document for Mail {
    const COLLECTION: &'static str = "mails";

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Owned for Mail {
    fn owner_field() -> &'static str {
        "created_by"
    }

    fn owner_id(&self) -> Option<Uuid> {
        Some(self.created_by)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMail {
    pub recipients: Vec<String>,
    pub subject: String,
    pub body: String,
}
