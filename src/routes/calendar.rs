//! Calendar routes.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::http::dto::{CalendarEvent, CalendarQuery};
use crate::http::error::AppError;
use crate::http::handlers::HandlerResult;
use crate::http::state::AppState;

pub const PREFIX: &str = "/api/calendar";

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_events))
}

/// GET /api/calendar
///
/// List calendar events, optionally restricted to an inclusive `from`/`to`
/// date range. Both bounds must be supplied together.
async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> HandlerResult<Vec<CalendarEvent>> {
    let range = match (query.from, query.to) {
        (Some(from), Some(to)) if from <= to => Some((from, to)),
        (Some(_), Some(_)) => {
            return Err(AppError::BadRequest(
                "`from` must not be after `to`".to_string(),
            ))
        }
        (None, None) => None,
        _ => {
            return Err(AppError::BadRequest(
                "`from` and `to` must be given together".to_string(),
            ))
        }
    };
    let events = state.repository.list_events(range).await?;
    Ok(Json(events))
}
