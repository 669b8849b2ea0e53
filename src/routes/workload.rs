//! Workload routes.
//!
//! Read-only view over the allocation entries produced by the planning
//! system; balancing logic lives outside this service.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::http::dto::WorkloadEntry;
use crate::http::handlers::HandlerResult;
use crate::http::state::AppState;

pub const PREFIX: &str = "/api/workload";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_workload))
        .route("/user/{id}", get(workload_for_user))
}

/// GET /api/workload
async fn list_workload(State(state): State<AppState>) -> HandlerResult<Vec<WorkloadEntry>> {
    let entries = state.repository.list_workload().await?;
    Ok(Json(entries))
}

/// GET /api/workload/user/{id}
async fn workload_for_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HandlerResult<Vec<WorkloadEntry>> {
    let entries = state.repository.workload_for_user(id).await?;
    Ok(Json(entries))
}
