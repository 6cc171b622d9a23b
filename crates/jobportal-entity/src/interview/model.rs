//! Interview model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::document::{Document, Owned};

/// A scheduled candidate interview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interview {
    /// Unique interview ID.
    pub id: Uuid,
    /// Candidate's name.
    pub candidate_name: String,
    /// Candidate's email.
    pub candidate_email: String,
    /// Related job posting, if any.
    #[serde(default)]
    pub job_id: Option<Uuid>,
    /// When the interview takes place.
    pub scheduled_at: DateTime<Utc>,
    /// Room or meeting link.
    #[serde(default)]
    pub location: Option<String>,
    /// Interviewer notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// The scheduling employee.
    pub created_by: Uuid,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Interview {
    /// Build a new interview owned by `created_by`.
    pub fn new(data: CreateInterview, created_by: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            candidate_name: data.candidate_name,
            candidate_email: data.candidate_email,
            job_id: data.job_id,
            scheduled_at: data.scheduled_at,
            location: data.location,
            notes: data.notes,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update. Ownership never changes.
    pub fn apply(&mut self, update: UpdateInterview) {
        if let Some(name) = update.candidate_name {
            self.candidate_name = name;
        }
        if let Some(email) = update.candidate_email {
            self.candidate_email = email;
        }
        if let Some(job_id) = update.job_id {
            self.job_id = Some(job_id);
        }
        if let Some(at) = update.scheduled_at {
            self.scheduled_at = at;
        }
        if let Some(location) = update.location {
            self.location = Some(location);
        }
        if let Some(notes) = update.notes {
            self.notes = Some(notes);
        }
        self.updated_at = Utc::now();
    }
}

impl Document for Interview {
    const COLLECTION: &'static str = "interviews";

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Owned for Interview {
    fn owner_field() -> &'static str {
        "created_by"
    }

    fn owner_id(&self) -> Option<Uuid> {
        Some(self.created_by)
    }
}

/// Data for scheduling an interview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInterview {
    pub candidate_name: String,
    pub candidate_email: String,
    pub job_id: Option<Uuid>,
    pub scheduled_at: DateTime<Utc>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

/// Partial interview update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateInterview {
    pub candidate_name: Option<String>,
    pub candidate_email: Option<String>,
    pub job_id: Option<Uuid>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub notes: Option<String>,
}
