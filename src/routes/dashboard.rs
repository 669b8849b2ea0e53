//! Dashboard routes.

use axum::{extract::State, routing::get, Json, Router};

use crate::http::dto::DashboardSummary;
use crate::http::handlers::HandlerResult;
use crate::http::state::AppState;

pub const PREFIX: &str = "/api/dashboard";

pub fn router() -> Router<AppState> {
    Router::new().route("/summary", get(summary))
}

/// GET /api/dashboard/summary
///
/// Aggregate counts backing the dashboard landing view.
async fn summary(State(state): State<AppState>) -> HandlerResult<DashboardSummary> {
    let summary = state.repository.dashboard_summary().await?;
    Ok(Json(summary))
}
