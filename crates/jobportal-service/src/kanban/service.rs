//! Kanban task service.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use jobportal_auth::{Action, PolicyEngine, ResourceKind};
use jobportal_core::error::AppError;
use jobportal_database::{Repository, UserRepository};
use jobportal_entity::kanban::{CreateKanbanTask, KanbanTask, UpdateKanbanTask};

use crate::access::{authorize_create, list_scoped, load_authorized};
use crate::context::RequestContext;

const KIND: ResourceKind = ResourceKind::Kanban;

/// Admins create and assign cards; assignees see and move their own.
#[derive(Debug, Clone)]
pub struct KanbanService {
    repo: Repository<KanbanTask>,
    users: Arc<UserRepository>,
    policy: Arc<PolicyEngine>,
}

impl KanbanService {
    /// Creates a new kanban service.
    pub fn new(
        repo: Repository<KanbanTask>,
        users: Arc<UserRepository>,
        policy: Arc<PolicyEngine>,
    ) -> Self {
        Self {
            repo,
            users,
            policy,
        }
    }

    /// Tasks visible to the caller: all for admins, assigned ones for employees.
    pub async fn list(&self, ctx: &RequestContext) -> Result<Vec<KanbanTask>, AppError> {
        list_scoped(&self.policy, ctx, &self.repo, KIND).await
    }

    /// One task.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> Result<KanbanTask, AppError> {
        load_authorized(&self.policy, ctx, &self.repo, KIND, Action::Read, id).await
    }

    /// Create a task assigned to an existing user.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        data: CreateKanbanTask,
    ) -> Result<KanbanTask, AppError> {
        let creator = authorize_create(&self.policy, ctx, KIND)?
            .ok_or_else(|| AppError::unauthorized("Authentication required"))?;
        self.require_assignee(data.assigned_to).await?;

        let task = KanbanTask::new(data, creator);
        self.repo.create(&task).await?;
        info!(task_id = %task.id, assigned_to = %task.assigned_to, "Kanban task created");
        Ok(task)
    }

    /// Edit a task. Only callers allowed to edit any card may reassign it.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        update: UpdateKanbanTask,
    ) -> Result<KanbanTask, AppError> {
        let mut task = load_authorized(&self.policy, ctx, &self.repo, KIND, Action::Update, id).await?;

        let may_reassign = self
            .policy
            .check_role(ctx.identity(), KIND, Action::Create)
            .is_ok();
        if may_reassign {
            if let Some(assignee) = update.assigned_to {
                self.require_assignee(assignee).await?;
            }
        }

        task.apply(update, may_reassign);
        if !self.repo.update(&task).await? {
            return Err(AppError::not_found("kanban not found"));
        }
        info!(task_id = %id, status = %task.status, "Kanban task updated");
        Ok(task)
    }

    /// Delete a task.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        load_authorized(&self.policy, ctx, &self.repo, KIND, Action::Delete, id).await?;
        self.repo.delete(id).await?;
        info!(task_id = %id, "Kanban task deleted");
        Ok(())
    }

    async fn require_assignee(&self, id: Uuid) -> Result<(), AppError> {
        match self.users.find_by_id(id).await? {
            Some(user) if user.role.is_staff() => Ok(()),
            Some(_) => Err(AppError::validation("Tasks can only be assigned to staff")),
            None => Err(AppError::validation("Assignee does not exist")),
        }
    }
}
