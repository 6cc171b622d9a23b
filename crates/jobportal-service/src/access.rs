//! Authorized data access helpers.
//!
//! [`load_authorized`] is the only way services load a record they are
//! about to return or mutate, which fixes the order of checks: role gate,
//! then fetch, then ownership.

use uuid::Uuid;

use jobportal_auth::{Action, PolicyEngine, ResourceKind, Scope};
use jobportal_core::error::AppError;
use jobportal_core::result::AppResult;
use jobportal_database::Repository;
use jobportal_entity::{Document, Owned};

use crate::context::RequestContext;

/// Load the record `id` and authorize `action` on it for the caller.
///
/// Fails with 401/403 from the role gate before touching the store, 404 if
/// the record does not exist, and 403 if ownership is required and the
/// caller is not the owner.
pub async fn load_authorized<T: Document + Owned>(
    policy: &PolicyEngine,
    ctx: &RequestContext,
    repo: &Repository<T>,
    kind: ResourceKind,
    action: Action,
    id: Uuid,
) -> AppResult<T> {
    policy.check_role(ctx.identity(), kind, action)?;

    let record = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("{kind} not found")))?;

    policy.decide(ctx.identity(), kind, action, Some(&record))?;
    Ok(record)
}

/// List the records of `kind` the caller may see, newest first.
pub async fn list_scoped<T: Document + Owned>(
    policy: &PolicyEngine,
    ctx: &RequestContext,
    repo: &Repository<T>,
    kind: ResourceKind,
) -> AppResult<Vec<T>> {
    match policy.list_scope(ctx.identity(), kind)? {
        Scope::All => repo.find_all().await,
        Scope::OwnedBy(owner) => repo.find_owned_by(owner).await,
    }
}

/// Role gate for a create, returning the caller's user ID when authenticated.
pub fn authorize_create(
    policy: &PolicyEngine,
    ctx: &RequestContext,
    kind: ResourceKind,
) -> AppResult<Option<Uuid>> {
    policy.check_role(ctx.identity(), kind, Action::Create)?;
    Ok(ctx.subject_id())
}
