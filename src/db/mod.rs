//! Persistence layer.
//!
//! Feature routers never touch storage directly; they go through the
//! [`WorkforceRepository`] trait so backends can be swapped without touching
//! the HTTP surface. The crate ships an in-memory implementation
//! ([`repositories::local`]); a database-backed implementation plugs in
//! behind the same trait.
//!
//! The process owns a single repository instance, initialized once at
//! startup before the server accepts requests. Initialization failure is
//! fatal: the binary logs the error and exits non-zero rather than serving
//! half-initialized.

pub mod models;
pub mod repositories;
pub mod repository;

pub use models::{
    CalendarEvent, DashboardSummary, LeaveRequest, LeaveStatus, NewLeaveRequest, NewNotification,
    NewProject, NewUser, Notification, Project, User, WorkloadEntry,
};
pub use repositories::LocalRepository;
pub use repository::{RepositoryError, RepositoryResult, WorkforceRepository};

use anyhow::{Context, Result};
use std::sync::{Arc, OnceLock};

/// Global repository instance, initialized once per process.
static REPOSITORY: OnceLock<Arc<dyn WorkforceRepository>> = OnceLock::new();

/// Initialize the process-wide repository.
///
/// Idempotent: the first call wins, later calls are no-ops. Must complete
/// before the server starts accepting requests that depend on storage.
pub fn init_repository() -> Result<()> {
    if REPOSITORY.get().is_some() {
        return Ok(());
    }

    let repo = Arc::new(LocalRepository::new()) as Arc<dyn WorkforceRepository>;
    let _ = REPOSITORY.set(repo);
    Ok(())
}

/// Get the process-wide repository instance.
pub fn repository() -> Result<&'static Arc<dyn WorkforceRepository>> {
    REPOSITORY
        .get()
        .context("repository not initialized; call init_repository() first")
}
