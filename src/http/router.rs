//! Router configuration for the HTTP API.
//!
//! The composition root: takes the resolved configuration and an ordered
//! table of feature router mounts, layers the cross-cutting middleware
//! around them (CORS, body validation, tracing), and produces the axum
//! router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::middleware::validate_body;
use super::spa;
use super::state::AppState;
use crate::config::AppConfig;

/// One entry of the routing table: a URL prefix and the collaborator
/// router owning that path space.
///
/// Dispatch is data, not control flow: the table is evaluated in
/// registration order and the first matching prefix wins, so it can be
/// exercised in tests without booting a network listener.
pub struct RouterMount {
    pub prefix: &'static str,
    pub router: Router<AppState>,
}

impl RouterMount {
    pub fn new(prefix: &'static str, router: Router<AppState>) -> Self {
        Self { prefix, router }
    }
}

/// Create the main application router with all routes and middleware.
///
/// Middleware applies to every request, outermost first: CORS (permissive,
/// short-circuits preflight), body validation (rejects malformed JSON/form
/// bodies with 400 before any collaborator runs), request tracing.
///
/// In production mode, requests unmatched by any mount fall through to the
/// static asset directory and finally to the SPA index document. In any
/// other mode unmatched requests get a plain 404.
pub fn create_router(config: &AppConfig, mounts: Vec<RouterMount>, state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut api = Router::new();
    for mount in mounts {
        api = api.nest(mount.prefix, mount.router);
    }

    let app = api
        .route("/api/health", get(handlers::health_check))
        .layer(axum::middleware::from_fn(validate_body))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    if config.mode.serves_frontend() {
        app.fallback_service(spa::frontend_service(&config.static_dir))
    } else {
        app
    }
}
