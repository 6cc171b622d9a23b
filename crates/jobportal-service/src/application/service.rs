//! Application service: submitting, reviewing and deciding on applications.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use jobportal_auth::{Action, PolicyEngine, ResourceKind};
use jobportal_core::error::AppError;
use jobportal_core::types::Filter;
use jobportal_database::Repository;
use jobportal_entity::application::{Application, CreateApplication};
use jobportal_entity::job::Job;

use crate::access::{authorize_create, list_scoped, load_authorized};
use crate::context::RequestContext;

const KIND: ResourceKind = ResourceKind::Application;

/// Handles job applications.
#[derive(Debug, Clone)]
pub struct ApplicationService {
    repo: Repository<Application>,
    jobs: Repository<Job>,
    policy: Arc<PolicyEngine>,
}

impl ApplicationService {
    /// Creates a new application service.
    pub fn new(
        repo: Repository<Application>,
        jobs: Repository<Job>,
        policy: Arc<PolicyEngine>,
    ) -> Self {
        Self { repo, jobs, policy }
    }

    /// Applications visible to the caller: staff see all, candidates their own.
    pub async fn list(&self, ctx: &RequestContext) -> Result<Vec<Application>, AppError> {
        list_scoped(&self.policy, ctx, &self.repo, KIND).await
    }

    /// One application.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> Result<Application, AppError> {
        load_authorized(&self.policy, ctx, &self.repo, KIND, Action::Read, id).await
    }

    /// Submit an application to an existing job. One per candidate per job.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        data: CreateApplication,
    ) -> Result<Application, AppError> {
        let applicant = authorize_create(&self.policy, ctx, KIND)?
            .ok_or_else(|| AppError::unauthorized("Authentication required"))?;

        if self.jobs.find_by_id(data.job_id).await?.is_none() {
            return Err(AppError::not_found("job not found"));
        }

        // The Postgres backend also enforces this with a unique index.
        let existing = Filter::all()
            .eq_id("job_id", data.job_id)
            .eq_id("applied_by", applicant);
        if self.repo.count(&existing).await? > 0 {
            return Err(AppError::conflict("You have already applied to this job"));
        }

        let application = Application::new(data, applicant);
        self.repo.create(&application).await?;
        info!(
            application_id = %application.id,
            job_id = %application.job_id,
            applied_by = %applicant,
            "Application submitted"
        );
        Ok(application)
    }

    /// Accept a pending application and consume one opening on its job.
    ///
    /// These are two independent writes; if the job was removed in the
    /// meantime the application stays accepted.
    pub async fn accept(&self, ctx: &RequestContext, id: Uuid) -> Result<Application, AppError> {
        let mut application =
            load_authorized(&self.policy, ctx, &self.repo, KIND, Action::Accept, id).await?;
        if application.is_accepted() {
            return Err(AppError::conflict("Application is already accepted"));
        }

        application.accept();
        if !self.repo.update(&application).await? {
            return Err(AppError::not_found("application not found"));
        }

        match self.jobs.find_by_id(application.job_id).await? {
            Some(mut job) => {
                job.fill_opening();
                self.jobs.update(&job).await?;
            }
            None => warn!(job_id = %application.job_id, "Accepted application for a missing job"),
        }

        info!(application_id = %id, "Application accepted");
        Ok(application)
    }

    /// Reject an application. Rejection deletes it.
    pub async fn reject(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        load_authorized(&self.policy, ctx, &self.repo, KIND, Action::Reject, id).await?;
        self.repo.delete(id).await?;
        info!(application_id = %id, "Application rejected");
        Ok(())
    }
}
