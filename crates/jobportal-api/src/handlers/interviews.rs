//! Interview handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use jobportal_auth::{Action, ResourceKind};
use jobportal_entity::interview::Interview;

use crate::dto::request::{CreateInterviewRequest, UpdateInterviewRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{CurrentIdentity, JsonBody, parse_uuid};
use crate::state::AppState;

const KIND: ResourceKind = ResourceKind::Interview;

/// GET /api/interviews
pub async fn list(
    State(state): State<AppState>,
    identity: CurrentIdentity,
) -> ApiResult<Json<ApiResponse<Vec<Interview>>>> {
    let items = state.interview_service.list(&identity.context()).await?;
    Ok(Json(ApiResponse::ok(items)))
}

/// GET /api/interviews/{id}
pub async fn get(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Interview>>> {
    let ctx = identity.authorize(&state.policy, KIND, Action::Read)?;
    let id = parse_uuid(&id)?;
    let item = state.interview_service.get(&ctx, id).await?;
    Ok(Json(ApiResponse::ok(item)))
}

/// POST /api/interviews
pub async fn create(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    body: JsonBody<CreateInterviewRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Interview>>)> {
    let ctx = identity.authorize(&state.policy, KIND, Action::Create)?;
    let req = body.parse()?;
    let item = state.interview_service.create(&ctx, req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(item))))
}

/// PUT /api/interviews/{id}
pub async fn update(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    Path(id): Path<String>,
    body: JsonBody<UpdateInterviewRequest>,
) -> ApiResult<Json<ApiResponse<Interview>>> {
    let ctx = identity.authorize(&state.policy, KIND, Action::Update)?;
    let id = parse_uuid(&id)?;
    let req = body.parse()?;
    let item = state.interview_service.update(&ctx, id, req.into()).await?;
    Ok(Json(ApiResponse::ok(item)))
}

/// DELETE /api/interviews/{id}
pub async fn delete(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    let ctx = identity.authorize(&state.policy, KIND, Action::Delete)?;
    let id = parse_uuid(&id)?;
    state.interview_service.delete(&ctx, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Interview deleted"))))
}
