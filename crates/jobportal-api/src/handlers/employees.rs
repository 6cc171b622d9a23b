//! Employee administration handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use jobportal_auth::{Action, ResourceKind};

use crate::dto::request::{CreateEmployeeRequest, EmployeeListQuery, UpdateEmployeeRequest};
use crate::dto::response::{ApiResponse, MessageResponse, UserResponse};
use crate::error::ApiResult;
use crate::extractors::{CurrentIdentity, JsonBody, parse_uuid};
use crate::state::AppState;

const KIND: ResourceKind = ResourceKind::Employee;

/// GET /api/employees?role=
pub async fn list(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    Query(query): Query<EmployeeListQuery>,
) -> ApiResult<Json<ApiResponse<Vec<UserResponse>>>> {
    let ctx = identity.authorize(&state.policy, KIND, Action::List)?;
    let role = query.role()?;
    let users = state.employee_service.list(&ctx, role).await?;
    Ok(Json(ApiResponse::ok(
        users.into_iter().map(UserResponse::from).collect(),
    )))
}

/// GET /api/employees/{id}
pub async fn get(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<UserResponse>>> {
    let ctx = identity.authorize(&state.policy, KIND, Action::Read)?;
    let id = parse_uuid(&id)?;
    let user = state.employee_service.get(&ctx, id).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// POST /api/employees
pub async fn create(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    body: JsonBody<CreateEmployeeRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<UserResponse>>)> {
    let ctx = identity.authorize(&state.policy, KIND, Action::Create)?;
    let req = body.parse()?;
    let user = state.employee_service.create(&ctx, req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(user.into()))))
}

/// PUT /api/employees/{id}
pub async fn update(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    Path(id): Path<String>,
    body: JsonBody<UpdateEmployeeRequest>,
) -> ApiResult<Json<ApiResponse<UserResponse>>> {
    let ctx = identity.authorize(&state.policy, KIND, Action::Update)?;
    let id = parse_uuid(&id)?;
    let req = body.parse()?;
    let user = state.employee_service.update(&ctx, id, req.into()).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// DELETE /api/employees/{id}
pub async fn delete(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    let ctx = identity.authorize(&state.policy, KIND, Action::Delete)?;
    let id = parse_uuid(&id)?;
    state.employee_service.delete(&ctx, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Employee deleted"))))
}
