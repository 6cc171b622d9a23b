//! Sheet service. Sheets are open to every caller.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use jobportal_auth::{Action, PolicyEngine, ResourceKind};
use jobportal_core::error::AppError;
use jobportal_database::Repository;
use jobportal_entity::sheet::{CreateSheet, Sheet, UpdateSheet};

use crate::access::{authorize_create, list_scoped, load_authorized};
use crate::context::RequestContext;

const KIND: ResourceKind = ResourceKind::Sheet;

/// Shared spreadsheets, editable by anyone who can reach the API.
#[derive(Debug, Clone)]
pub struct SheetService {
    repo: Repository<Sheet>,
    policy: Arc<PolicyEngine>,
}

impl SheetService {
    /// Creates a new sheet service.
    pub fn new(repo: Repository<Sheet>, policy: Arc<PolicyEngine>) -> Self {
        Self { repo, policy }
    }

    /// Every sheet.
    pub async fn list(&self, ctx: &RequestContext) -> Result<Vec<Sheet>, AppError> {
        list_scoped(&self.policy, ctx, &self.repo, KIND).await
    }

    /// One sheet.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> Result<Sheet, AppError> {
        load_authorized(&self.policy, ctx, &self.repo, KIND, Action::Read, id).await
    }

    /// Create a sheet; anonymous sheets have no creator.
    pub async fn create(&self, ctx: &RequestContext, data: CreateSheet) -> Result<Sheet, AppError> {
        let creator = authorize_create(&self.policy, ctx, KIND)?;
        let sheet = Sheet::new(data, creator);
        self.repo.create(&sheet).await?;
        info!(sheet_id = %sheet.id, "Sheet created");
        Ok(sheet)
    }

    /// Rename a sheet or replace its cells.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        update: UpdateSheet,
    ) -> Result<Sheet, AppError> {
        let mut sheet = load_authorized(&self.policy, ctx, &self.repo, KIND, Action::Update, id).await?;
        sheet.apply(update);
        if !self.repo.update(&sheet).await? {
            return Err(AppError::not_found("sheet not found"));
        }
        Ok(sheet)
    }

    /// Delete a sheet.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        load_authorized(&self.policy, ctx, &self.repo, KIND, Action::Delete, id).await?;
        self.repo.delete(id).await?;
        info!(sheet_id = %id, "Sheet deleted");
        Ok(())
    }
}
