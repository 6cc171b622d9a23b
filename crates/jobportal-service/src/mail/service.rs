//! Mail service. Every mailbox is private to its sender.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use jobportal_auth::{Action, PolicyEngine, ResourceKind, Rule};
use jobportal_core::error::AppError;
use jobportal_core::types::Filter;
use jobportal_database::Repository;
use jobportal_entity::mail::{CreateMail, Mail};

use crate::access::{authorize_create, list_scoped, load_authorized};
use crate::context::RequestContext;

const KIND: ResourceKind = ResourceKind::Mail;

/// Handles the caller's sent mail.
#[derive(Debug, Clone)]
pub struct MailService {
    repo: Repository<Mail>,
    policy: Arc<PolicyEngine>,
}

impl MailService {
    /// Creates a new mail service.
    pub fn new(repo: Repository<Mail>, policy: Arc<PolicyEngine>) -> Self {
        Self { repo, policy }
    }

    /// The caller's mail.
    pub async fn list(&self, ctx: &RequestContext) -> Result<Vec<Mail>, AppError> {
        list_scoped(&self.policy, ctx, &self.repo, KIND).await
    }

    /// One of the caller's mails.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> Result<Mail, AppError> {
        load_authorized(&self.policy, ctx, &self.repo, KIND, Action::Read, id).await
    }

    /// Record a composed mail.
    pub async fn create(&self, ctx: &RequestContext, data: CreateMail) -> Result<Mail, AppError> {
        let sender = authorize_create(&self.policy, ctx, KIND)?
            .ok_or_else(|| AppError::unauthorized("Authentication required"))?;

        let mail = Mail::new(data, sender);
        self.repo.create(&mail).await?;
        info!(mail_id = %mail.id, recipients = mail.recipients.len(), "Mail stored");
        Ok(mail)
    }

    /// Delete one of the caller's mails.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        load_authorized(&self.policy, ctx, &self.repo, KIND, Action::Delete, id).await?;
        self.repo.delete(id).await?;
        info!(mail_id = %id, "Mail deleted");
        Ok(())
    }

    /// Delete every listed mail that the caller owns.
    ///
    /// Ids that do not exist or belong to someone else are skipped
    /// silently. Returns the number actually removed.
    pub async fn bulk_delete(&self, ctx: &RequestContext, ids: Vec<Uuid>) -> Result<u64, AppError> {
        let identity = ctx.require_identity()?;
        let rule = self.policy.check_role(Some(identity), KIND, Action::Delete)?;
        if ids.is_empty() {
            return Ok(0);
        }

        let filter = match rule {
            Rule::OwnerOnly => Repository::<Mail>::owned_by(identity.subject_id),
            _ => Filter::all(),
        }
        .ids(ids);
        let deleted = self.repo.delete_many(&filter).await?;
        info!(user_id = %identity.subject_id, deleted, "Bulk mail delete");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::test_support::{ctx, handle};
    use jobportal_core::error::ErrorKind;
    use jobportal_entity::user::Role;

    fn data(subject: &str) -> CreateMail {
        CreateMail {
            recipients: vec!["x@example.com".into()],
            subject: subject.into(),
            body: "body".into(),
        }
    }

    #[tokio::test]
    async fn test_bulk_delete_skips_foreign_ids() {
        let svc = MailService::new(Repository::new(handle()), Arc::new(PolicyEngine::new()));
        let me = ctx(Role::Employee);
        let other = ctx(Role::Admin);

        let m1 = svc.create(&me, data("one")).await.unwrap();
        let m2 = svc.create(&me, data("two")).await.unwrap();
        let foreign = svc.create(&other, data("theirs")).await.unwrap();

        let deleted = svc
            .bulk_delete(&me, vec![m1.id, foreign.id, Uuid::new_v4()])
            .await
            .unwrap();
        assert_eq!(deleted, 1);

        let left: Vec<_> = svc.list(&me).await.unwrap().into_iter().map(|m| m.id).collect();
        assert_eq!(left, vec![m2.id]);
        assert!(svc.get(&other, foreign.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_admin_cannot_read_employee_mail() {
        let svc = MailService::new(Repository::new(handle()), Arc::new(PolicyEngine::new()));
        let employee = ctx(Role::Employee);
        let mail = svc.create(&employee, data("private")).await.unwrap();

        let err = svc.get(&ctx(Role::Admin), mail.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
        let err = svc.create(&ctx(Role::User), data("nope")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }
}
