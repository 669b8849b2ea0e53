//! Notification routes.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::http::dto::{NewNotification, Notification, NotificationQuery};
use crate::http::error::AppError;
use crate::http::handlers::HandlerResult;
use crate::http::state::AppState;

pub const PREFIX: &str = "/api/notifications";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_notifications).post(push_notification))
        .route("/{id}/read", post(mark_read))
}

/// GET /api/notifications?user_id=N
async fn list_notifications(
    State(state): State<AppState>,
    Query(query): Query<NotificationQuery>,
) -> HandlerResult<Vec<Notification>> {
    let notifications = state.repository.list_notifications(query.user_id).await?;
    Ok(Json(notifications))
}

/// POST /api/notifications
async fn push_notification(
    State(state): State<AppState>,
    Json(new): Json<NewNotification>,
) -> Result<(StatusCode, Json<Notification>), AppError> {
    let notification = state.repository.push_notification(new).await?;
    Ok((StatusCode::CREATED, Json(notification)))
}

/// POST /api/notifications/{id}/read
async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HandlerResult<Notification> {
    let notification = state.repository.mark_notification_read(id).await?;
    Ok(Json(notification))
}
