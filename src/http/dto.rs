//! Data Transfer Objects for the HTTP API.
//!
//! The domain records already derive Serialize/Deserialize and are used
//! directly as response bodies; this module re-exports them and adds the
//! envelope and query types that exist only at the HTTP surface.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Re-export the domain records that cross the wire unchanged.
pub use crate::db::models::{
    CalendarEvent, DashboardSummary, LeaveRequest, LeaveStatus, NewLeaveRequest, NewNotification,
    NewProject, NewUser, Notification, Project, User, WorkloadEntry,
};

/// Response body for `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok" while the process is running
    pub status: String,
    /// Current server time, ISO-8601
    pub timestamp: String,
}

/// Query parameters for `GET /api/leave`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeaveQuery {
    /// Restrict results to one user
    #[serde(default)]
    pub user_id: Option<i64>,
}

/// Query parameters for `GET /api/calendar`.
///
/// `from` and `to` must be given together; the range is inclusive.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalendarQuery {
    #[serde(default)]
    pub from: Option<NaiveDate>,
    #[serde(default)]
    pub to: Option<NaiveDate>,
}

/// Query parameters for `GET /api/notifications`.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationQuery {
    pub user_id: i64,
}
