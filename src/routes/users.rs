//! User record routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::http::dto::{NewUser, User};
use crate::http::error::AppError;
use crate::http::handlers::HandlerResult;
use crate::http::state::AppState;

pub const PREFIX: &str = "/api/users";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{id}", get(get_user))
}

/// GET /api/users
async fn list_users(State(state): State<AppState>) -> HandlerResult<Vec<User>> {
    let users = state.repository.list_users().await?;
    Ok(Json(users))
}

/// POST /api/users
///
/// Create a user record. Email addresses must be unique.
async fn create_user(
    State(state): State<AppState>,
    Json(new): Json<NewUser>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let user = state.repository.create_user(new).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/users/{id}
async fn get_user(State(state): State<AppState>, Path(id): Path<i64>) -> HandlerResult<User> {
    let user = state.repository.get_user(id).await?;
    Ok(Json(user))
}
