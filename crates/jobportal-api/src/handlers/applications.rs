//! Job application handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use jobportal_auth::{Action, ResourceKind};
use jobportal_entity::application::Application;

use crate::dto::request::CreateApplicationRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{CurrentIdentity, JsonBody, parse_uuid};
use crate::state::AppState;

const KIND: ResourceKind = ResourceKind::Application;

/// GET /api/applications
pub async fn list(
    State(state): State<AppState>,
    identity: CurrentIdentity,
) -> ApiResult<Json<ApiResponse<Vec<Application>>>> {
    let items = state.application_service.list(&identity.context()).await?;
    Ok(Json(ApiResponse::ok(items)))
}

/// GET /api/applications/{id}
pub async fn get(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Application>>> {
    let ctx = identity.authorize(&state.policy, KIND, Action::Read)?;
    let id = parse_uuid(&id)?;
    let item = state.application_service.get(&ctx, id).await?;
    Ok(Json(ApiResponse::ok(item)))
}

/// POST /api/applications
pub async fn create(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    body: JsonBody<CreateApplicationRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Application>>)> {
    let ctx = identity.authorize(&state.policy, KIND, Action::Create)?;
    let req = body.parse()?;
    let item = state.application_service.create(&ctx, req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(item))))
}

/// POST /api/applications/{id}/accept
///
/// Marks the application accepted, then fills one opening on its job.
pub async fn accept(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Application>>> {
    let ctx = identity.authorize(&state.policy, KIND, Action::Accept)?;
    let id = parse_uuid(&id)?;
    let item = state.application_service.accept(&ctx, id).await?;
    Ok(Json(ApiResponse::ok(item)))
}

/// DELETE /api/applications/{id}
///
/// Rejecting an application removes it.
pub async fn reject(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    let ctx = identity.authorize(&state.policy, KIND, Action::Reject)?;
    let id = parse_uuid(&id)?;
    state.application_service.reject(&ctx, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Application rejected"))))
}
