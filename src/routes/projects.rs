//! Project routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::http::dto::{NewProject, Project};
use crate::http::error::AppError;
use crate::http::handlers::HandlerResult;
use crate::http::state::AppState;

pub const PREFIX: &str = "/api/projects";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_projects).post(create_project))
        .route("/{id}", get(get_project))
}

/// GET /api/projects
async fn list_projects(State(state): State<AppState>) -> HandlerResult<Vec<Project>> {
    let projects = state.repository.list_projects().await?;
    Ok(Json(projects))
}

/// POST /api/projects
async fn create_project(
    State(state): State<AppState>,
    Json(new): Json<NewProject>,
) -> Result<(StatusCode, Json<Project>), AppError> {
    let project = state.repository.create_project(new).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/projects/{id}
async fn get_project(State(state): State<AppState>, Path(id): Path<i64>) -> HandlerResult<Project> {
    let project = state.repository.get_project(id).await?;
    Ok(Json(project))
}
