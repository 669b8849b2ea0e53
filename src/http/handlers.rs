//! Handlers owned by the composition root itself.
//!
//! Feature-specific handlers live with their routers under
//! [`crate::routes`]; only the liveness endpoint is defined here.

use axum::Json;
use chrono::{SecondsFormat, Utc};

use super::dto::HealthResponse;
use super::error::AppError;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /api/health
///
/// Liveness probe. Deliberately takes no state: it must answer 200 for as
/// long as the process runs, even when storage is unreachable.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
