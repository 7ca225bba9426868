//! Health check handler.

use axum::Json;
use axum::extract::State;

use explorer_core::error::AppError;

use crate::dto::response::HealthResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    state.folder_store.health_check().await.map_err(|e| {
        tracing::warn!(error = %e, "Database health check failed");
        AppError::service_unavailable("Database unavailable")
    })?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: "connected".to_string(),
    }))
}
