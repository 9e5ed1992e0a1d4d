//! Health check handler.

use axum::Json;
use axum::extract::State;

use catalog_core::error::AppError;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::error::{ApiErrorResponse, ApiResult};
use crate::state::AppState;

/// GET /api/health
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "Service and database are up", body = ApiResponse<HealthResponse>),
        (status = 503, description = "Database unreachable", body = ApiErrorResponse)
    )
)]
pub async fn health(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<HealthResponse>>> {
    if !state.db.health_check().await? {
        return Err(AppError::service_unavailable("Database health check returned no row").into());
    }

    Ok(Json(ApiResponse::ok(
        "service healthy",
        HealthResponse {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database: "connected".to_string(),
        },
    )))
}
