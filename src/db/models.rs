//! Domain records crossing the repository seam.
//!
//! These are plain serde types shared by the repository trait and the HTTP
//! layer. `New*` variants are the draft shapes accepted on create; the
//! repository assigns ids and server-side timestamps.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A member of the workforce.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Free-form role label, e.g. "engineer" or "manager".
    pub role: String,
}

/// Draft user accepted by `POST /api/users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Lifecycle of a leave request.
///
/// New requests always start out `Pending`; approval flows live outside
/// this service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

/// A request for time off.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaveRequest {
    pub id: i64,
    pub user_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Leave category, e.g. "vacation" or "sick".
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub status: LeaveStatus,
    pub submitted_at: DateTime<Utc>,
}

/// Draft leave request accepted by `POST /api/leave`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLeaveRequest {
    pub user_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub kind: String,
    #[serde(default)]
    pub reason: Option<String>,
}

/// A project staff can be allocated to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
}

/// Draft project accepted by `POST /api/projects`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProject {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
}

/// Weekly allocation of one user to one project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkloadEntry {
    pub id: i64,
    pub user_id: i64,
    pub project_id: i64,
    pub allocated_hours: f32,
}

/// An entry on the shared team calendar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarEvent {
    pub id: i64,
    pub title: String,
    pub date: NaiveDate,
    /// Event category, e.g. "leave", "deadline", "meeting".
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

/// A message delivered to one user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: i64,
    pub user_id: i64,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Draft notification accepted by `POST /api/notifications`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewNotification {
    pub user_id: i64,
    pub message: String,
}

/// Aggregate counts backing the dashboard landing view.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_users: usize,
    pub total_projects: usize,
    pub pending_leave_requests: usize,
    pub unread_notifications: usize,
}
