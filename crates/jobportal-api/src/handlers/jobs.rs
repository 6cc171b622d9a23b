//! Job posting handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use jobportal_auth::{Action, ResourceKind};
use jobportal_entity::job::Job;

use crate::dto::request::{CreateJobRequest, UpdateJobRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{CurrentIdentity, JsonBody, parse_uuid};
use crate::state::AppState;

const KIND: ResourceKind = ResourceKind::Job;

/// GET /api/jobs
///
/// Public: anonymous visitors see every posting.
pub async fn list(
    State(state): State<AppState>,
    identity: CurrentIdentity,
) -> ApiResult<Json<ApiResponse<Vec<Job>>>> {
    let items = state.job_service.list(&identity.context()).await?;
    Ok(Json(ApiResponse::ok(items)))
}

/// GET /api/jobs/{id}
pub async fn get(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Job>>> {
    let ctx = identity.authorize(&state.policy, KIND, Action::Read)?;
    let id = parse_uuid(&id)?;
    let item = state.job_service.get(&ctx, id).await?;
    Ok(Json(ApiResponse::ok(item)))
}

/// POST /api/jobs
pub async fn create(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    body: JsonBody<CreateJobRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Job>>)> {
    let ctx = identity.authorize(&state.policy, KIND, Action::Create)?;
    let req = body.parse()?;
    let item = state.job_service.create(&ctx, req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(item))))
}

/// PUT /api/jobs/{id}
pub async fn update(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    Path(id): Path<String>,
    body: JsonBody<UpdateJobRequest>,
) -> ApiResult<Json<ApiResponse<Job>>> {
    let ctx = identity.authorize(&state.policy, KIND, Action::Update)?;
    let id = parse_uuid(&id)?;
    let req = body.parse()?;
    let item = state.job_service.update(&ctx, id, req.into()).await?;
    Ok(Json(ApiResponse::ok(item)))
}

/// DELETE /api/jobs/{id}
pub async fn delete(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    let ctx = identity.authorize(&state.policy, KIND, Action::Delete)?;
    let id = parse_uuid(&id)?;
    state.job_service.delete(&ctx, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Job deleted"))))
}
