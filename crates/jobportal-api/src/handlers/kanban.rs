//! Kanban board handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use jobportal_auth::{Action, ResourceKind};
use jobportal_entity::kanban::KanbanTask;

use crate::dto::request::{CreateKanbanRequest, UpdateKanbanRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{CurrentIdentity, JsonBody, parse_uuid};
use crate::state::AppState;

const KIND: ResourceKind = ResourceKind::Kanban;

/// GET /api/kanban
pub async fn list(
    State(state): State<AppState>,
    identity: CurrentIdentity,
) -> ApiResult<Json<ApiResponse<Vec<KanbanTask>>>> {
    let items = state.kanban_service.list(&identity.context()).await?;
    Ok(Json(ApiResponse::ok(items)))
}

/// GET /api/kanban/{id}
pub async fn get(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<KanbanTask>>> {
    let ctx = identity.authorize(&state.policy, KIND, Action::Read)?;
    let id = parse_uuid(&id)?;
    let item = state.kanban_service.get(&ctx, id).await?;
    Ok(Json(ApiResponse::ok(item)))
}

/// POST /api/kanban
pub async fn create(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    body: JsonBody<CreateKanbanRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<KanbanTask>>)> {
    let ctx = identity.authorize(&state.policy, KIND, Action::Create)?;
    let req = body.parse()?;
    let item = state.kanban_service.create(&ctx, req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(item))))
}

/// PUT /api/kanban/{id}
///
/// Assignees may move their own cards; `assigned_to` is ignored unless the
/// caller may create cards.
pub async fn update(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    Path(id): Path<String>,
    body: JsonBody<UpdateKanbanRequest>,
) -> ApiResult<Json<ApiResponse<KanbanTask>>> {
    let ctx = identity.authorize(&state.policy, KIND, Action::Update)?;
    let id = parse_uuid(&id)?;
    let req = body.parse()?;
    let item = state.kanban_service.update(&ctx, id, req.into()).await?;
    Ok(Json(ApiResponse::ok(item)))
}

/// DELETE /api/kanban/{id}
pub async fn delete(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    let ctx = identity.authorize(&state.policy, KIND, Action::Delete)?;
    let id = parse_uuid(&id)?;
    state.kanban_service.delete(&ctx, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Task deleted"))))
}
