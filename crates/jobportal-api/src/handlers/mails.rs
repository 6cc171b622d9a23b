//! Mail handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use jobportal_auth::{Action, ResourceKind};
use jobportal_entity::mail::Mail;

use crate::dto::request::{BulkDeleteRequest, CreateMailRequest};
use crate::dto::response::{ApiResponse, BulkDeleteResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{CurrentIdentity, JsonBody, parse_uuid};
use crate::state::AppState;

const KIND: ResourceKind = ResourceKind::Mail;

/// GET /api/mails
pub async fn list(
    State(state): State<AppState>,
    identity: CurrentIdentity,
) -> ApiResult<Json<ApiResponse<Vec<Mail>>>> {
    let items = state.mail_service.list(&identity.context()).await?;
    Ok(Json(ApiResponse::ok(items)))
}

/// GET /api/mails/{id}
pub async fn get(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Mail>>> {
    let ctx = identity.authorize(&state.policy, KIND, Action::Read)?;
    let id = parse_uuid(&id)?;
    let item = state.mail_service.get(&ctx, id).await?;
    Ok(Json(ApiResponse::ok(item)))
}

/// POST /api/mails
pub async fn create(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    body: JsonBody<CreateMailRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Mail>>)> {
    let ctx = identity.authorize(&state.policy, KIND, Action::Create)?;
    let req = body.parse()?;
    let item = state.mail_service.create(&ctx, req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(item))))
}

/// DELETE /api/mails/{id}
pub async fn delete(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    let ctx = identity.authorize(&state.policy, KIND, Action::Delete)?;
    let id = parse_uuid(&id)?;
    state.mail_service.delete(&ctx, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Mail deleted"))))
}

/// POST /api/mails/bulk-delete
///
/// Ids the caller does not own are skipped silently; `deleted_count`
/// counts only the mails actually removed.
pub async fn bulk_delete(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    body: JsonBody<BulkDeleteRequest>,
) -> ApiResult<Json<ApiResponse<BulkDeleteResponse>>> {
    let ctx = identity.authorize(&state.policy, KIND, Action::Delete)?;
    let req = body.parse()?;
    let deleted_count = state.mail_service.bulk_delete(&ctx, req.ids).await?;
    Ok(Json(ApiResponse::ok(BulkDeleteResponse { deleted_count })))
}
