//! Workforce API Server Binary
//!
//! Process entry point for the workforce-management REST API. It resolves
//! configuration, initializes the repository, composes the HTTP router, and
//! starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin workforce-server
//!
//! # Production mode with the bundled frontend
//! APP_ENV=production STATIC_DIR=client/build cargo run --bin workforce-server
//! ```
//!
//! # Environment Variables
//!
//! - `PORT`: listening port (default: 5000)
//! - `APP_ENV`: `production` enables the static/SPA fallback
//! - `STATIC_DIR`: frontend bundle directory (default: client/build)
//! - `RUST_LOG`: log filter (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use workforce_rust::config::AppConfig;
use workforce_rust::db;
use workforce_rust::http::{create_router, AppState};
use workforce_rust::routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up a .env file when present; absence is fine.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    info!("Starting workforce API server");

    // Configuration is resolved exactly once, here, and passed down.
    let config = AppConfig::from_env().context("invalid server configuration")?;

    // Storage must be ready before the listener opens. Failure here is
    // fatal: exit non-zero instead of serving half-initialized.
    db::init_repository().context("repository initialization failed")?;
    let repository = Arc::clone(db::repository()?);
    info!("Repository initialized");

    let state = AppState::new(repository);
    let app = create_router(&config, routes::mounts(), state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("Server running on port {}", config.port);
    if config.mode.serves_frontend() {
        info!("Serving frontend from {}", config.static_dir.display());
    }

    axum::serve(listener, app).await?;

    Ok(())
}
