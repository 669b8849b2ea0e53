//! HTTP server module.
//!
//! Provides the axum-based composition root for the workforce API: router
//! assembly, cross-cutting middleware, shared state, and the error-to-
//! response mapping used by every handler.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  Composition root (router.rs)                             │
//! │  - ordered prefix mount table                             │
//! │  - CORS, body validation, tracing                         │
//! │  - health endpoint, SPA fallback (production)             │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Feature routers (crate::routes)                          │
//! │  - per-domain handlers                                    │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Repository seam (crate::db)                              │
//! │  - WorkforceRepository trait                              │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod spa;
pub mod state;

pub use router::{create_router, RouterMount};
pub use state::AppState;
