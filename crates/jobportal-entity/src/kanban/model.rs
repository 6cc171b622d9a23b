//! Kanban task model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::status::TaskStatus;
use crate::document::{Document, Owned};

/// A task card. Ownership for access checks is the assignee, not the
/// creator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KanbanTask {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    /// Employee the task is assigned to.
    pub assigned_to: Uuid,
    /// Admin who created the card.
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl KanbanTask {
    pub fn new(data: CreateKanbanTask, created_by: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: data.title,
            description: data.description,
            status: data.status.unwrap_or_default(),
            due_date: data.due_date,
            assigned_to: data.assigned_to,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update. Reassignment is only honoured when
    /// `allow_reassign` is set.
    pub fn apply(&mut self, update: UpdateKanbanTask, allow_reassign: bool) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(due) = update.due_date {
            self.due_date = Some(due);
        }
        if allow_reassign {
            if let Some(assignee) = update.assigned_to {
                self.assigned_to = assignee;
            }
        }
        self.updated_at = Utc::now();
    }
}

impl Document for KanbanTask {
    const COLLECTION: &'static str = "kanban_tasks";

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Owned for KanbanTask {
    fn owner_field() -> &'static str {
        "assigned_to"
    }

    fn owner_id(&self) -> Option<Uuid> {
        Some(self.assigned_to)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateKanbanTask {
    pub title: String,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub due_date: Option<DateTime<Utc>>,
    pub assigned_to: Uuid,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateKanbanTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub due_date: Option<DateTime<Utc>>,
    pub assigned_to: Option<Uuid>,
}
