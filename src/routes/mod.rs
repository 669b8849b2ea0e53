//! Feature routers and their mount table.
//!
//! Each submodule owns one business domain and exposes a mountable axum
//! router covering its whole prefixed path space. [`mounts`] returns the
//! fixed, ordered routing table the composition root installs; the order
//! here is the order prefixes are evaluated in.

pub mod calendar;
pub mod dashboard;
pub mod leave;
pub mod notifications;
pub mod projects;
pub mod users;
pub mod workload;

use crate::http::RouterMount;

/// The routing table: prefix -> feature router, in mount order.
pub fn mounts() -> Vec<RouterMount> {
    vec![
        RouterMount::new(leave::PREFIX, leave::router()),
        RouterMount::new(users::PREFIX, users::router()),
        RouterMount::new(projects::PREFIX, projects::router()),
        RouterMount::new(workload::PREFIX, workload::router()),
        RouterMount::new(calendar::PREFIX, calendar::router()),
        RouterMount::new(dashboard::PREFIX, dashboard::router()),
        RouterMount::new(notifications::PREFIX, notifications::router()),
    ]
}
