//! Auth handlers: signup, login, logout, me.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::cookie::CookieJar;

use crate::dto::request::{LoginRequest, SignupRequest};
use crate::dto::response::{ApiResponse, MessageResponse, UserResponse};
use crate::error::ApiResult;
use crate::extractors::{CurrentIdentity, ValidatedJson};
use crate::session::{expired_session_cookie, session_cookie};
use crate::state::AppState;

/// POST /api/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(req): ValidatedJson<SignupRequest>,
) -> ApiResult<(StatusCode, CookieJar, Json<ApiResponse<UserResponse>>)> {
    let session = state.auth_service.signup(req.into()).await?;
    let jar = jar.add(session_cookie(&state.config.session, session.token));
    Ok((
        StatusCode::CREATED,
        jar,
        Json(ApiResponse::ok(session.user.into())),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult<(CookieJar, Json<ApiResponse<UserResponse>>)> {
    let session = state.auth_service.login(req.into()).await?;
    let jar = jar.add(session_cookie(&state.config.session, session.token));
    Ok((jar, Json(ApiResponse::ok(session.user.into()))))
}

/// POST /api/auth/logout
///
/// Always succeeds; the browser is told to drop the cookie.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<ApiResponse<MessageResponse>>) {
    let jar = jar.add(expired_session_cookie(&state.config.session));
    (jar, Json(ApiResponse::ok(MessageResponse::new("Logged out"))))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    identity: CurrentIdentity,
) -> ApiResult<Json<ApiResponse<UserResponse>>> {
    let user = state.auth_service.me(&identity.context()).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}
