//! Job posting model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::document::{Document, Owned};

/// A public job posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Unique job ID.
    pub id: Uuid,
    /// Posting title.
    pub title: String,
    /// Full description.
    pub description: String,
    /// Work location.
    pub location: String,
    /// Advertised salary, free text.
    #[serde(default)]
    pub salary: Option<String>,
    /// Employment type (full-time, contract, ...).
    pub job_type: String,
    /// Open slots; decremented when an application is accepted.
    pub openings: u32,
    /// Posting author.
    pub created_by: Uuid,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Job {
    /// Build a new posting owned by `created_by`.
    pub fn new(data: CreateJob, created_by: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: data.title,
            description: data.description,
            location: data.location,
            salary: data.salary,
            job_type: data.job_type,
            openings: data.openings,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update.
    pub fn apply(&mut self, update: UpdateJob) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(location) = update.location {
            self.location = location;
        }
        if let Some(salary) = update.salary {
            self.salary = Some(salary);
        }
        if let Some(job_type) = update.job_type {
            self.job_type = job_type;
        }
        if let Some(openings) = update.openings {
            self.openings = openings;
        }
        self.updated_at = Utc::now();
    }

    /// Consume one opening. Saturates at zero.
    pub fn fill_opening(&mut self) {
        self.openings = self.openings.saturating_sub(1);
        self.updated_at = Utc::now();
    }
}

impl Document for Job {
    const COLLECTION: &'static str = "jobs";

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Owned for Job {
    fn owner_field() -> &'static str {
        "created_by"
    }

    fn owner_id(&self) -> Option<Uuid> {
        Some(self.created_by)
    }
}

/// Data for creating a job posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJob {
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Location.
    pub location: String,
    /// Salary.
    pub salary: Option<String>,
    /// Employment type.
    pub job_type: String,
    /// Open slots.
    pub openings: u32,
}

/// Partial update for a job posting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateJob {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub job_type: Option<String>,
    pub openings: Option<u32>,
}
