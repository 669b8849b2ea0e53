//! In-memory repository implementation.
//!
//! Stores all records in process memory behind an `RwLock`, giving tests and
//! local development a fast, deterministic, isolated backend. Ids are
//! assigned from per-entity counters starting at 1.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::db::models::*;
use crate::db::repository::{RepositoryError, RepositoryResult, WorkforceRepository};

/// In-memory workforce repository.
#[derive(Clone, Default)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

#[derive(Default)]
struct LocalData {
    users: HashMap<i64, User>,
    leave_requests: HashMap<i64, LeaveRequest>,
    projects: HashMap<i64, Project>,
    workload: Vec<WorkloadEntry>,
    events: Vec<CalendarEvent>,
    notifications: HashMap<i64, Notification>,

    next_id: i64,
}

impl LocalData {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

impl LocalRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a workload entry directly, bypassing the trait surface.
    ///
    /// Workload allocations are produced by a planning system outside this
    /// service; this helper exists so development and tests can seed them.
    pub fn add_workload_entry(&self, user_id: i64, project_id: i64, allocated_hours: f32) -> i64 {
        let mut data = self.data.write().expect("repository lock poisoned");
        let id = data.next_id();
        data.workload.push(WorkloadEntry {
            id,
            user_id,
            project_id,
            allocated_hours,
        });
        id
    }

    /// Insert a calendar event directly, bypassing the trait surface.
    pub fn add_event(
        &self,
        title: impl Into<String>,
        date: NaiveDate,
        kind: impl Into<String>,
        user_id: Option<i64>,
    ) -> i64 {
        let mut data = self.data.write().expect("repository lock poisoned");
        let id = data.next_id();
        data.events.push(CalendarEvent {
            id,
            title: title.into(),
            date,
            kind: kind.into(),
            user_id,
        });
        id
    }
}

#[async_trait]
impl WorkforceRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }

    async fn list_users(&self) -> RepositoryResult<Vec<User>> {
        let data = self.data.read().expect("repository lock poisoned");
        let mut users: Vec<User> = data.users.values().cloned().collect();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn get_user(&self, id: i64) -> RepositoryResult<User> {
        let data = self.data.read().expect("repository lock poisoned");
        data.users
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("user", id))
    }

    async fn create_user(&self, new: NewUser) -> RepositoryResult<User> {
        let mut data = self.data.write().expect("repository lock poisoned");
        if data.users.values().any(|u| u.email == new.email) {
            return Err(RepositoryError::Conflict(format!(
                "a user with email {} already exists",
                new.email
            )));
        }
        let id = data.next_id();
        let user = User {
            id,
            name: new.name,
            email: new.email,
            role: new.role,
        };
        data.users.insert(id, user.clone());
        Ok(user)
    }

    async fn list_leave_requests(
        &self,
        user_id: Option<i64>,
    ) -> RepositoryResult<Vec<LeaveRequest>> {
        let data = self.data.read().expect("repository lock poisoned");
        let mut requests: Vec<LeaveRequest> = data
            .leave_requests
            .values()
            .filter(|r| user_id.is_none_or(|uid| r.user_id == uid))
            .cloned()
            .collect();
        requests.sort_by_key(|r| r.id);
        Ok(requests)
    }

    async fn get_leave_request(&self, id: i64) -> RepositoryResult<LeaveRequest> {
        let data = self.data.read().expect("repository lock poisoned");
        data.leave_requests
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("leave request", id))
    }

    async fn create_leave_request(&self, new: NewLeaveRequest) -> RepositoryResult<LeaveRequest> {
        let mut data = self.data.write().expect("repository lock poisoned");
        if !data.users.contains_key(&new.user_id) {
            return Err(RepositoryError::not_found("user", new.user_id));
        }
        if new.end_date < new.start_date {
            return Err(RepositoryError::Conflict(
                "leave request ends before it starts".to_string(),
            ));
        }
        let id = data.next_id();
        let request = LeaveRequest {
            id,
            user_id: new.user_id,
            start_date: new.start_date,
            end_date: new.end_date,
            kind: new.kind,
            reason: new.reason,
            status: LeaveStatus::Pending,
            submitted_at: Utc::now(),
        };
        data.leave_requests.insert(id, request.clone());
        Ok(request)
    }

    async fn list_projects(&self) -> RepositoryResult<Vec<Project>> {
        let data = self.data.read().expect("repository lock poisoned");
        let mut projects: Vec<Project> = data.projects.values().cloned().collect();
        projects.sort_by_key(|p| p.id);
        Ok(projects)
    }

    async fn get_project(&self, id: i64) -> RepositoryResult<Project> {
        let data = self.data.read().expect("repository lock poisoned");
        data.projects
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("project", id))
    }

    async fn create_project(&self, new: NewProject) -> RepositoryResult<Project> {
        let mut data = self.data.write().expect("repository lock poisoned");
        let id = data.next_id();
        let project = Project {
            id,
            name: new.name,
            description: new.description,
            deadline: new.deadline,
        };
        data.projects.insert(id, project.clone());
        Ok(project)
    }

    async fn list_workload(&self) -> RepositoryResult<Vec<WorkloadEntry>> {
        let data = self.data.read().expect("repository lock poisoned");
        Ok(data.workload.clone())
    }

    async fn workload_for_user(&self, user_id: i64) -> RepositoryResult<Vec<WorkloadEntry>> {
        let data = self.data.read().expect("repository lock poisoned");
        if !data.users.contains_key(&user_id) {
            return Err(RepositoryError::not_found("user", user_id));
        }
        Ok(data
            .workload
            .iter()
            .filter(|w| w.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn list_events(
        &self,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> RepositoryResult<Vec<CalendarEvent>> {
        let data = self.data.read().expect("repository lock poisoned");
        let mut events: Vec<CalendarEvent> = data
            .events
            .iter()
            .filter(|e| range.is_none_or(|(from, to)| e.date >= from && e.date <= to))
            .cloned()
            .collect();
        events.sort_by_key(|e| (e.date, e.id));
        Ok(events)
    }

    async fn list_notifications(&self, user_id: i64) -> RepositoryResult<Vec<Notification>> {
        let data = self.data.read().expect("repository lock poisoned");
        let mut notifications: Vec<Notification> = data
            .notifications
            .values()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();
        notifications.sort_by_key(|n| n.id);
        Ok(notifications)
    }

    async fn push_notification(&self, new: NewNotification) -> RepositoryResult<Notification> {
        let mut data = self.data.write().expect("repository lock poisoned");
        if !data.users.contains_key(&new.user_id) {
            return Err(RepositoryError::not_found("user", new.user_id));
        }
        let id = data.next_id();
        let notification = Notification {
            id,
            user_id: new.user_id,
            message: new.message,
            read: false,
            created_at: Utc::now(),
        };
        data.notifications.insert(id, notification.clone());
        Ok(notification)
    }

    async fn mark_notification_read(&self, id: i64) -> RepositoryResult<Notification> {
        let mut data = self.data.write().expect("repository lock poisoned");
        let notification = data
            .notifications
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::not_found("notification", id))?;
        notification.read = true;
        Ok(notification.clone())
    }

    async fn dashboard_summary(&self) -> RepositoryResult<DashboardSummary> {
        let data = self.data.read().expect("repository lock poisoned");
        Ok(DashboardSummary {
            total_users: data.users.len(),
            total_projects: data.projects.len(),
            pending_leave_requests: data
                .leave_requests
                .values()
                .filter(|r| r.status == LeaveStatus::Pending)
                .count(),
            unread_notifications: data.notifications.values().filter(|n| !n.read).count(),
        })
    }
}
