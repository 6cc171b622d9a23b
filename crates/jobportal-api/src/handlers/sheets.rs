//! Spreadsheet handlers. Sheets are open to every caller, anonymous included.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use jobportal_auth::{Action, ResourceKind};
use jobportal_entity::sheet::Sheet;

use crate::dto::request::{CreateSheetRequest, UpdateSheetRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{CurrentIdentity, JsonBody, parse_uuid};
use crate::state::AppState;

const KIND: ResourceKind = ResourceKind::Sheet;

/// GET /api/sheets
pub async fn list(
    State(state): State<AppState>,
    identity: CurrentIdentity,
) -> ApiResult<Json<ApiResponse<Vec<Sheet>>>> {
    let items = state.sheet_service.list(&identity.context()).await?;
    Ok(Json(ApiResponse::ok(items)))
}

/// GET /api/sheets/{id}
pub async fn get(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Sheet>>> {
    let ctx = identity.authorize(&state.policy, KIND, Action::Read)?;
    let id = parse_uuid(&id)?;
    let item = state.sheet_service.get(&ctx, id).await?;
    Ok(Json(ApiResponse::ok(item)))
}

/// POST /api/sheets
pub async fn create(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    body: JsonBody<CreateSheetRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Sheet>>)> {
    let ctx = identity.authorize(&state.policy, KIND, Action::Create)?;
    let req = body.parse()?;
    let item = state.sheet_service.create(&ctx, req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(item))))
}

/// PUT /api/sheets/{id}
pub async fn update(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    Path(id): Path<String>,
    body: JsonBody<UpdateSheetRequest>,
) -> ApiResult<Json<ApiResponse<Sheet>>> {
    let ctx = identity.authorize(&state.policy, KIND, Action::Update)?;
    let id = parse_uuid(&id)?;
    let req = body.parse()?;
    let item = state.sheet_service.update(&ctx, id, req.into()).await?;
    Ok(Json(ApiResponse::ok(item)))
}

/// DELETE /api/sheets/{id}
pub async fn delete(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    let ctx = identity.authorize(&state.policy, KIND, Action::Delete)?;
    let id = parse_uuid(&id)?;
    state.sheet_service.delete(&ctx, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Sheet deleted"))))
}
