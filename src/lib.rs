//! # Workforce Management Backend
//!
//! HTTP API server for a workforce-management application: leave requests,
//! user records, projects, workload, calendar, dashboard summaries, and
//! notifications.
//!
//! The crate is the composition layer of the service. It assembles an
//! axum application from a fixed, ordered table of feature routers, layers
//! the cross-cutting middleware around them (CORS, body validation, request
//! tracing), and exposes liveness and single-page-application fallback
//! behavior. Feature routers talk to persistence through the
//! [`db::WorkforceRepository`] trait, so storage backends can be swapped
//! without touching the HTTP surface.
//!
//! ## Architecture
//!
//! - [`config`]: typed runtime configuration, resolved once at process entry
//! - [`http`]: axum router composition, middleware, and error mapping
//! - [`routes`]: the seven feature routers and their mount table
//! - [`db`]: repository trait, domain records, and the in-memory backend

pub mod config;
pub mod db;
pub mod http;
pub mod routes;
