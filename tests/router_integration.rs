//! Integration tests for the composed router.
//!
//! These exercise the full middleware and dispatch stack by driving the
//! axum router directly with `tower::ServiceExt::oneshot`; no network
//! listener is involved.

use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    extract::Request,
    http::{header, Method, StatusCode},
    routing::any,
    Router,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use workforce_rust::config::{AppConfig, AppMode};
use workforce_rust::db::repositories::LocalRepository;
use workforce_rust::db::{self, RepositoryResult};
use workforce_rust::http::{create_router, AppState, RouterMount};
use workforce_rust::routes;

/// One request observed by a probe collaborator.
#[derive(Debug, Clone)]
struct Hit {
    collaborator: &'static str,
    method: Method,
    path: String,
    echo_header: Option<String>,
    body: Vec<u8>,
}

type HitLog = Arc<Mutex<Vec<Hit>>>;

/// A collaborator router that records every request it receives.
///
/// Covers the mount root and all subpaths, like a real feature router
/// owning its whole prefixed path space.
fn probe_router(name: &'static str, log: HitLog) -> Router<AppState> {
    let record = move |req: Request| {
        let log = log.clone();
        async move {
            let method = req.method().clone();
            let path = req.uri().path().to_string();
            let echo_header = req
                .headers()
                .get("x-echo")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            let body = req
                .into_body()
                .collect()
                .await
                .expect("probe body read")
                .to_bytes()
                .to_vec();
            log.lock().unwrap().push(Hit {
                collaborator: name,
                method,
                path,
                echo_header,
                body,
            });
            StatusCode::OK
        }
    };
    Router::new()
        .route("/", any(record.clone()))
        .route("/{*rest}", any(record))
}

const PREFIXES: [&str; 7] = [
    "/api/leave",
    "/api/users",
    "/api/projects",
    "/api/workload",
    "/api/calendar",
    "/api/dashboard",
    "/api/notifications",
];

fn probe_app(mode: AppMode, log: HitLog) -> Router {
    let mounts = PREFIXES
        .iter()
        .map(|&prefix| {
            let name = prefix.trim_start_matches("/api/");
            // Leak is fine in tests; probe names must be 'static.
            let name: &'static str = Box::leak(name.to_string().into_boxed_str());
            RouterMount::new(prefix, probe_router(name, log.clone()))
        })
        .collect();
    let state = AppState::new(Arc::new(LocalRepository::new()));
    create_router(&AppConfig::with_mode(mode), mounts, state)
}

async fn body_json(body: Body) -> serde_json::Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_returns_ok_with_iso_timestamp() {
    let state = AppState::new(Arc::new(LocalRepository::new()));
    let app = create_router(
        &AppConfig::with_mode(AppMode::Test),
        routes::mounts(),
        state,
    );

    let before = chrono::Utc::now();
    let response = app
        .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let after = chrono::Utc::now();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");

    let timestamp = chrono::DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap())
        .expect("timestamp must be ISO-8601")
        .with_timezone(&chrono::Utc);
    assert!(timestamp >= before - chrono::Duration::seconds(1));
    assert!(timestamp <= after + chrono::Duration::seconds(1));
}

/// A repository whose every operation fails, standing in for unreachable
/// storage.
struct OfflineRepository;

#[async_trait::async_trait]
impl workforce_rust::db::WorkforceRepository for OfflineRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Err(offline())
    }
    async fn list_users(&self) -> RepositoryResult<Vec<db::User>> {
        Err(offline())
    }
    async fn get_user(&self, _id: i64) -> RepositoryResult<db::User> {
        Err(offline())
    }
    async fn create_user(&self, _new: db::NewUser) -> RepositoryResult<db::User> {
        Err(offline())
    }
    async fn list_leave_requests(
        &self,
        _user_id: Option<i64>,
    ) -> RepositoryResult<Vec<db::LeaveRequest>> {
        Err(offline())
    }
    async fn get_leave_request(&self, _id: i64) -> RepositoryResult<db::LeaveRequest> {
        Err(offline())
    }
    async fn create_leave_request(
        &self,
        _new: db::NewLeaveRequest,
    ) -> RepositoryResult<db::LeaveRequest> {
        Err(offline())
    }
    async fn list_projects(&self) -> RepositoryResult<Vec<db::Project>> {
        Err(offline())
    }
    async fn get_project(&self, _id: i64) -> RepositoryResult<db::Project> {
        Err(offline())
    }
    async fn create_project(&self, _new: db::NewProject) -> RepositoryResult<db::Project> {
        Err(offline())
    }
    async fn list_workload(&self) -> RepositoryResult<Vec<db::WorkloadEntry>> {
        Err(offline())
    }
    async fn workload_for_user(&self, _user_id: i64) -> RepositoryResult<Vec<db::WorkloadEntry>> {
        Err(offline())
    }
    async fn list_events(
        &self,
        _range: Option<(chrono::NaiveDate, chrono::NaiveDate)>,
    ) -> RepositoryResult<Vec<db::CalendarEvent>> {
        Err(offline())
    }
    async fn list_notifications(&self, _user_id: i64) -> RepositoryResult<Vec<db::Notification>> {
        Err(offline())
    }
    async fn push_notification(
        &self,
        _new: db::NewNotification,
    ) -> RepositoryResult<db::Notification> {
        Err(offline())
    }
    async fn mark_notification_read(&self, _id: i64) -> RepositoryResult<db::Notification> {
        Err(offline())
    }
    async fn dashboard_summary(&self) -> RepositoryResult<db::DashboardSummary> {
        Err(offline())
    }
}

fn offline() -> workforce_rust::db::RepositoryError {
    workforce_rust::db::RepositoryError::Storage("repository offline".to_string())
}

#[tokio::test]
async fn health_succeeds_while_storage_is_down() {
    let state = AppState::new(Arc::new(OfflineRepository));
    let app = create_router(
        &AppConfig::with_mode(AppMode::Test),
        routes::mounts(),
        state,
    );

    // Health stays green even though storage is unreachable...
    let response = app
        .clone()
        .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // ...while routes that do need storage surface a server error.
    let response = app
        .oneshot(Request::get("/api/users").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn each_prefix_dispatches_to_its_collaborator_only() {
    for prefix in PREFIXES {
        let log: HitLog = Arc::new(Mutex::new(Vec::new()));
        let app = probe_app(AppMode::Test, log.clone());

        let uri = format!("{prefix}/some/sub/path");
        let response = app
            .oneshot(Request::get(uri.as_str()).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "prefix {prefix}");

        let hits = log.lock().unwrap();
        assert_eq!(hits.len(), 1, "exactly one collaborator for {prefix}");
        assert_eq!(hits[0].collaborator, prefix.trim_start_matches("/api/"));
    }
}

#[tokio::test]
async fn requests_are_forwarded_intact() {
    let log: HitLog = Arc::new(Mutex::new(Vec::new()));
    let app = probe_app(AppMode::Test, log.clone());

    let payload = serde_json::json!({"user_id": 1, "kind": "vacation"});
    let response = app
        .oneshot(
            Request::post("/api/leave/drafts")
                .header(header::CONTENT_TYPE, "application/json")
                .header("x-echo", "forwarded")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let hits = log.lock().unwrap();
    assert_eq!(hits.len(), 1);
    let hit = &hits[0];
    assert_eq!(hit.collaborator, "leave");
    assert_eq!(hit.method, Method::POST);
    assert_eq!(hit.path, "/drafts");
    assert_eq!(hit.echo_header.as_deref(), Some("forwarded"));
    let forwarded: serde_json::Value = serde_json::from_slice(&hit.body).unwrap();
    assert_eq!(forwarded, payload);
}

#[tokio::test]
async fn malformed_json_never_reaches_a_collaborator() {
    let log: HitLog = Arc::new(Mutex::new(Vec::new()));
    let app = probe_app(AppMode::Test, log.clone());

    let response = app
        .oneshot(
            Request::post("/api/users")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"name\": oops"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(log.lock().unwrap().is_empty(), "collaborator must not run");
}

#[tokio::test]
async fn form_bodies_are_parsed_and_forwarded() {
    let log: HitLog = Arc::new(Mutex::new(Vec::new()));
    let app = probe_app(AppMode::Test, log.clone());

    let response = app
        .oneshot(
            Request::post("/api/projects")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("name=apollo&description=moonshot"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let hits = log.lock().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].body, b"name=apollo&description=moonshot");
}

#[tokio::test]
async fn cross_origin_requests_get_permissive_headers() {
    let log: HitLog = Arc::new(Mutex::new(Vec::new()));
    let app = probe_app(AppMode::Test, log.clone());

    let response = app
        .oneshot(
            Request::get("/api/health")
                .header(header::ORIGIN, "https://elsewhere.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn preflight_short_circuits_before_collaborators() {
    let log: HitLog = Arc::new(Mutex::new(Vec::new()));
    let app = probe_app(AppMode::Test, log.clone());

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/users")
                .header(header::ORIGIN, "https://elsewhere.example")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(
        response.status().is_success(),
        "preflight must succeed, got {}",
        response.status()
    );
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    assert!(log.lock().unwrap().is_empty(), "collaborator must not run");
}

#[tokio::test]
async fn unmatched_path_is_404_outside_production() {
    let log: HitLog = Arc::new(Mutex::new(Vec::new()));
    let app = probe_app(AppMode::Development, log.clone());

    let response = app
        .oneshot(
            Request::get("/some/unknown/path")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn production_serves_spa_index_for_unmatched_paths() {
    let static_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        static_dir.path().join("index.html"),
        "<!doctype html><html><body><div id=\"root\"></div></body></html>",
    )
    .unwrap();
    std::fs::write(static_dir.path().join("main.js"), "console.log(\"app\");").unwrap();

    let config = AppConfig {
        mode: AppMode::Production,
        static_dir: static_dir.path().to_path_buf(),
        ..AppConfig::default()
    };
    let state = AppState::new(Arc::new(LocalRepository::new()));
    let app = create_router(&config, routes::mounts(), state);

    // A static asset resolves directly.
    let response = app
        .clone()
        .oneshot(Request::get("/main.js").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"console.log(\"app\");");

    // Anything else falls back to the SPA entry document.
    let response = app
        .oneshot(
            Request::get("/some/client/route")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("<div id=\"root\">"));
}

#[tokio::test]
async fn api_routes_win_over_spa_fallback_in_production() {
    let static_dir = tempfile::tempdir().unwrap();
    std::fs::write(static_dir.path().join("index.html"), "<html></html>").unwrap();

    let config = AppConfig {
        mode: AppMode::Production,
        static_dir: static_dir.path().to_path_buf(),
        ..AppConfig::default()
    };
    let state = AppState::new(Arc::new(LocalRepository::new()));
    let app = create_router(&config, routes::mounts(), state);

    let response = app
        .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn occupied_port_fails_to_bind() {
    let first = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = first.local_addr().unwrap();

    // The port is held by `first`; a second bind must surface an error
    // instead of reporting a successful startup.
    let second = tokio::net::TcpListener::bind(addr).await;
    assert!(second.is_err());
}
