//! Health check handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
///
/// Opens the store on first call, like any other request would.
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    let store = match state.db.get().await {
        Ok(store) => match store.health_check().await {
            Ok(true) => "ok",
            Ok(false) => "degraded",
            Err(e) => {
                tracing::warn!(error = %e, "Store health check failed");
                "degraded"
            }
        },
        Err(e) => {
            tracing::warn!(error = %e, "Store unavailable");
            "unavailable"
        }
    };

    Json(ApiResponse::ok(HealthResponse {
        status: if store == "ok" { "ok" } else { "degraded" }.to_string(),
        store: store.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
