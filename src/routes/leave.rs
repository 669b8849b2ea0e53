//! Leave request routes.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::http::dto::{LeaveQuery, LeaveRequest, NewLeaveRequest};
use crate::http::error::AppError;
use crate::http::handlers::HandlerResult;
use crate::http::state::AppState;

pub const PREFIX: &str = "/api/leave";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_leave).post(submit_leave))
        .route("/{id}", get(get_leave))
}

/// GET /api/leave
///
/// List leave requests, optionally filtered by `user_id`.
async fn list_leave(
    State(state): State<AppState>,
    Query(query): Query<LeaveQuery>,
) -> HandlerResult<Vec<LeaveRequest>> {
    let requests = state.repository.list_leave_requests(query.user_id).await?;
    Ok(Json(requests))
}

/// POST /api/leave
///
/// Submit a new leave request. The request starts out pending.
async fn submit_leave(
    State(state): State<AppState>,
    Json(new): Json<NewLeaveRequest>,
) -> Result<(StatusCode, Json<LeaveRequest>), AppError> {
    let request = state.repository.create_leave_request(new).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// GET /api/leave/{id}
async fn get_leave(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HandlerResult<LeaveRequest> {
    let request = state.repository.get_leave_request(id).await?;
    Ok(Json(request))
}
