//! Application model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::status::ApplicationStatus;
use crate::document::{Document, Owned};

/// A candidate's application to a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    /// Unique application ID.
    pub id: Uuid,
    /// The job applied to.
    pub job_id: Uuid,
    /// The applying user.
    pub applied_by: Uuid,
    /// Optional cover letter.
    #[serde(default)]
    pub cover_letter: Option<String>,
    /// Optional link to an uploaded resume.
    #[serde(default)]
    pub resume_url: Option<String>,
    /// Current status.
    #[serde(default)]
    pub status: ApplicationStatus,
    /// Submission timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Application {
    /// Build a pending application from `applied_by`.
    pub fn new(data: CreateApplication, applied_by: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            job_id: data.job_id,
            applied_by,
            cover_letter: data.cover_letter,
            resume_url: data.resume_url,
            status: ApplicationStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the application was already accepted.
    pub fn is_accepted(&self) -> bool {
        self.status == ApplicationStatus::Accepted
    }

    /// Move pending → accepted.
    pub fn accept(&mut self) {
        self.status = ApplicationStatus::Accepted;
        self.updated_at = Utc::now();
    }
}

impl Document for Application {
    const COLLECTION: &'static str = "applications";

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Owned for Application {
    fn owner_field() -> &'static str {
        "applied_by"
    }

    fn owner_id(&self) -> Option<Uuid> {
        Some(self.applied_by)
    }
}

/// Data for submitting an application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateApplication {
    pub job_id: Uuid,
    pub cover_letter: Option<String>,
    pub resume_url: Option<String>,
}
