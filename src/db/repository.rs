//! Repository trait and error types.
//!
//! The HTTP layer only ever talks to persistence through
//! [`WorkforceRepository`], so storage backends can be swapped without
//! touching any handler. The in-memory implementation lives in
//! [`crate::db::repositories::local`].

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use super::models::{
    CalendarEvent, DashboardSummary, LeaveRequest, NewLeaveRequest, NewNotification, NewProject,
    NewUser, Notification, Project, User, WorkloadEntry,
};

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested record does not exist.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },
    /// The operation conflicts with existing data.
    #[error("{0}")]
    Conflict(String),
    /// The backend itself failed.
    #[error("storage failure: {0}")]
    Storage(String),
}

impl RepositoryError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        RepositoryError::NotFound { entity, id }
    }
}

/// Storage operations required by the feature routers.
#[async_trait]
pub trait WorkforceRepository: Send + Sync {
    /// Whether the backend is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    // ---- users ----
    async fn list_users(&self) -> RepositoryResult<Vec<User>>;
    async fn get_user(&self, id: i64) -> RepositoryResult<User>;
    async fn create_user(&self, new: NewUser) -> RepositoryResult<User>;

    // ---- leave ----
    /// List leave requests, optionally restricted to one user.
    async fn list_leave_requests(&self, user_id: Option<i64>)
        -> RepositoryResult<Vec<LeaveRequest>>;
    async fn get_leave_request(&self, id: i64) -> RepositoryResult<LeaveRequest>;
    async fn create_leave_request(&self, new: NewLeaveRequest) -> RepositoryResult<LeaveRequest>;

    // ---- projects ----
    async fn list_projects(&self) -> RepositoryResult<Vec<Project>>;
    async fn get_project(&self, id: i64) -> RepositoryResult<Project>;
    async fn create_project(&self, new: NewProject) -> RepositoryResult<Project>;

    // ---- workload ----
    async fn list_workload(&self) -> RepositoryResult<Vec<WorkloadEntry>>;
    async fn workload_for_user(&self, user_id: i64) -> RepositoryResult<Vec<WorkloadEntry>>;

    // ---- calendar ----
    /// List calendar events, optionally restricted to an inclusive date range.
    async fn list_events(
        &self,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> RepositoryResult<Vec<CalendarEvent>>;

    // ---- notifications ----
    async fn list_notifications(&self, user_id: i64) -> RepositoryResult<Vec<Notification>>;
    async fn push_notification(&self, new: NewNotification) -> RepositoryResult<Notification>;
    async fn mark_notification_read(&self, id: i64) -> RepositoryResult<Notification>;

    // ---- dashboard ----
    async fn dashboard_summary(&self) -> RepositoryResult<DashboardSummary>;
}
