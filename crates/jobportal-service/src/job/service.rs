//! Job posting service.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use jobportal_auth::{Action, PolicyEngine, ResourceKind};
use jobportal_core::error::AppError;
use jobportal_database::Repository;
use jobportal_entity::job::{CreateJob, Job, UpdateJob};

use crate::access::{authorize_create, list_scoped, load_authorized};
use crate::context::RequestContext;

const KIND: ResourceKind = ResourceKind::Job;

/// Public job listings and their management.
#[derive(Debug, Clone)]
pub struct JobService {
    repo: Repository<Job>,
    policy: Arc<PolicyEngine>,
}

impl JobService {
    /// Creates a new job service.
    pub fn new(repo: Repository<Job>, policy: Arc<PolicyEngine>) -> Self {
        Self { repo, policy }
    }

    /// All postings, newest first. Open to anonymous callers.
    pub async fn list(&self, ctx: &RequestContext) -> Result<Vec<Job>, AppError> {
        list_scoped(&self.policy, ctx, &self.repo, KIND).await
    }

    /// One posting.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> Result<Job, AppError> {
        load_authorized(&self.policy, ctx, &self.repo, KIND, Action::Read, id).await
    }

    /// Publish a new posting.
    pub async fn create(&self, ctx: &RequestContext, data: CreateJob) -> Result<Job, AppError> {
        let author = authorize_create(&self.policy, ctx, KIND)?
            .ok_or_else(|| AppError::unauthorized("Authentication required"))?;

        let job = Job::new(data, author);
        self.repo.create(&job).await?;
        info!(job_id = %job.id, created_by = %author, "Job created");
        Ok(job)
    }

    /// Edit a posting.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        update: UpdateJob,
    ) -> Result<Job, AppError> {
        let mut job = load_authorized(&self.policy, ctx, &self.repo, KIND, Action::Update, id).await?;
        job.apply(update);
        self.persist(&job).await?;
        info!(job_id = %id, "Job updated");
        Ok(job)
    }

    /// Remove a posting. Applications referencing it are left in place.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        load_authorized(&self.policy, ctx, &self.repo, KIND, Action::Delete, id).await?;
        self.repo.delete(id).await?;
        info!(job_id = %id, "Job deleted");
        Ok(())
    }

    async fn persist(&self, job: &Job) -> Result<(), AppError> {
        if self.repo.update(job).await? {
            Ok(())
        } else {
            Err(AppError::not_found("job not found"))
        }
    }
}
