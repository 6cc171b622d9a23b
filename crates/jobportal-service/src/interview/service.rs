//! Interview service.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use jobportal_auth::{Action, PolicyEngine, ResourceKind};
use jobportal_core::error::AppError;
use jobportal_database::Repository;
use jobportal_entity::interview::{CreateInterview, Interview, UpdateInterview};

use crate::access::{authorize_create, list_scoped, load_authorized};
use crate::context::RequestContext;

const KIND: ResourceKind = ResourceKind::Interview;

/// Employees schedule interviews; admins oversee all of them.
#[derive(Debug, Clone)]
pub struct InterviewService {
    repo: Repository<Interview>,
    policy: Arc<PolicyEngine>,
}

impl InterviewService {
    /// Creates a new interview service.
    pub fn new(repo: Repository<Interview>, policy: Arc<PolicyEngine>) -> Self {
        Self { repo, policy }
    }

    /// Interviews visible to the caller.
    pub async fn list(&self, ctx: &RequestContext) -> Result<Vec<Interview>, AppError> {
        list_scoped(&self.policy, ctx, &self.repo, KIND).await
    }

    /// One interview.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> Result<Interview, AppError> {
        load_authorized(&self.policy, ctx, &self.repo, KIND, Action::Read, id).await
    }

    /// Schedule an interview owned by the caller.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        data: CreateInterview,
    ) -> Result<Interview, AppError> {
        let owner = authorize_create(&self.policy, ctx, KIND)?
            .ok_or_else(|| AppError::unauthorized("Authentication required"))?;

        let interview = Interview::new(data, owner);
        self.repo.create(&interview).await?;
        info!(interview_id = %interview.id, created_by = %owner, "Interview scheduled");
        Ok(interview)
    }

    /// Reschedule or edit an interview.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        update: UpdateInterview,
    ) -> Result<Interview, AppError> {
        let mut interview =
            load_authorized(&self.policy, ctx, &self.repo, KIND, Action::Update, id).await?;
        interview.apply(update);
        if !self.repo.update(&interview).await? {
            return Err(AppError::not_found("interview not found"));
        }
        info!(interview_id = %id, updated_by = ?ctx.subject_id(), "Interview updated");
        Ok(interview)
    }

    /// Cancel an interview.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        load_authorized(&self.policy, ctx, &self.repo, KIND, Action::Delete, id).await?;
        self.repo.delete(id).await?;
        info!(interview_id = %id, "Interview deleted");
        Ok(())
    }
}
