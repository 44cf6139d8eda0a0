//! In-process stand-in for the admin API, served by axum on an ephemeral
//! port so the real reqwest client is exercised end to end.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, RawQuery, State};
use axum::http::{HeaderMap, StatusCode, header::AUTHORIZATION};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use shared::models::AdminUser;
use shared::{AdminClient, SessionStore};

pub const API_PREFIX: &str = "/api/v1";
pub const TOKEN: &str = "test-token";
pub const PASSWORD: &str = "correct-horse";

/// Serves `app` and returns its API base URL.
pub async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });
    format!("http://{addr}{API_PREFIX}")
}

/// Base URL of a port nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{addr}{API_PREFIX}")
}

/// Requests observed by the fake backend.
#[derive(Debug, Clone, Default)]
pub struct Seen {
    requests: Arc<Mutex<Vec<Observed>>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observed {
    pub path: String,
    pub authorization: Option<String>,
    pub query: Option<String>,
}

impl Seen {
    fn record(&self, path: &str, headers: &HeaderMap, query: Option<String>) {
        let authorization = headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        self.requests.lock().expect("seen lock").push(Observed {
            path: path.to_string(),
            authorization,
            query,
        });
    }

    pub fn all(&self) -> Vec<Observed> {
        self.requests.lock().expect("seen lock").clone()
    }

    pub fn count(&self) -> usize {
        self.requests.lock().expect("seen lock").len()
    }

    pub fn last(&self) -> Option<Observed> {
        self.all().pop()
    }
}

pub fn admin_user() -> AdminUser {
    serde_json::from_value(admin_json()).expect("admin fixture")
}

pub fn admin_json() -> Value {
    json!({"id": 1, "email": "admin@cauhec.org", "firstName": "Ada", "lastName": "Admin", "role": "admin"})
}

pub fn login_success() -> Value {
    json!({"status": "success", "token": TOKEN, "user": admin_json()})
}

/// A store already holding a valid session.
pub fn signed_in_store() -> SessionStore {
    let store = SessionStore::in_memory();
    store.save(TOKEN, &admin_user()).expect("seed session");
    store
}

pub fn signed_in_client(base_url: &str) -> AdminClient {
    AdminClient::new(base_url, signed_in_store())
}

fn unauthorized() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"status": "error", "message": "Invalid or expired token"})),
    )
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == format!("Bearer {TOKEN}"))
}

macro_rules! guarded {
    ($seen:expr, $path:expr, $headers:expr, $query:expr, $body:expr) => {{
        $seen.record($path, &$headers, $query);
        if !authorized(&$headers) {
            return unauthorized();
        }
        (StatusCode::OK, Json($body))
    }};
}

/// The happy-path backend covering every endpoint the client calls.
pub fn backend(seen: Seen) -> Router {
    let admin = Router::new()
        .route("/admin/login", post(login))
        .route("/admin/stats", get(stats))
        .route("/admin/charts/preceptors-vs-students", get(chart))
        .route("/admin/all-connections", get(connections))
        .route("/admin/users-list/", get(users))
        .route("/admin/view-user", get(view_user))
        .route("/admin/institutions", get(institutions))
        .route("/admin/add-institution", post(add_institution))
        .route("/admin/profiles", get(profiles))
        .route("/admin/create", post(create_admin))
        .route("/admin/profile/{id}", delete(delete_profile))
        .with_state(seen);
    Router::new().nest(API_PREFIX, admin)
}

/// A relay that accepts `POST /relay?<encoded target>` and answers a login.
pub fn relay(seen: Seen) -> Router {
    Router::new()
        .route("/relay", post(relay_login))
        .with_state(seen)
}

async fn login(
    State(seen): State<Seen>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    seen.record("/admin/login", &headers, None);
    if body.get("password").and_then(Value::as_str) == Some(PASSWORD) {
        (StatusCode::OK, Json(login_success()))
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"status": "error", "message": "Invalid credentials"})),
        )
    }
}

async fn relay_login(
    State(seen): State<Seen>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> (StatusCode, Json<Value>) {
    seen.record("/relay", &headers, query);
    (StatusCode::OK, Json(login_success()))
}

async fn stats(State(seen): State<Seen>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    guarded!(seen, "/admin/stats", headers, None, json!({
        "status": "success",
        "data": {
            "activeConnections": {"count": 124, "change": 12.5},
            "activeClinicalRotations": {"count": "38", "change": "-3"},
            "totalPreceptors": {"count": 2150, "change": 0},
            "totalStudents": {"count": 5230, "change": "4.2%"}
        }
    }))
}

async fn chart(State(seen): State<Seen>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    guarded!(seen, "/admin/charts/preceptors-vs-students", headers, None, json!({
        "status": "success",
        "data": {
            "months": ["Jan", "Feb", "Mar", "Apr"],
            "students": [3, 5, 8, 13],
            "preceptors": [1, 2, 3, 40]
        }
    }))
}

async fn connections(State(seen): State<Seen>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    guarded!(seen, "/admin/all-connections", headers, None, json!({
        "status": "success",
        "data": [{
            "id": 5,
            "student": {"id": 12, "fullName": "Olivia Young", "email": "olivia@gsu.edu"},
            "preceptor": {"id": 30, "firstName": "David", "lastName": "Smith", "email": "dsmith@clinic.org"},
            "requestDate": "2025-02-14T08:30:00.000Z",
            "connectionDate": "2025-02-15T09:00:00.000Z"
        }]
    }))
}

async fn users(
    State(seen): State<Seen>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    let role = params.get("role").cloned().unwrap_or_default();
    let data = if role == "student" {
        json!([{
            "id": 12,
            "firstName": "Elaina",
            "lastName": "McAdams",
            "email": "elainamhall@mail.fresnostate.edu",
            "role": "student",
            "schoolName": "California State University - Fresno",
            "createdAt": "2024-01-16T10:42:13.000Z"
        }])
    } else {
        json!([])
    };
    guarded!(seen, "/admin/users-list/", headers, Some(format!("role={role}")), json!({
        "status": "success",
        "data": data
    }))
}

async fn view_user(
    State(seen): State<Seen>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    let id = params.get("id").cloned().unwrap_or_default();
    seen.record("/admin/view-user", &headers, Some(format!("id={id}")));
    if !authorized(&headers) {
        return unauthorized();
    }
    if id != "12" {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"status": "error", "message": "User not found"})),
        );
    }
    (
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "user": {
                "id": 12,
                "fullName": "Elaina McAdams",
                "email": "elainamhall@mail.fresnostate.edu",
                "role": "Student",
                "majorClinicalProgramType": "Registered Nurse",
                "schoolName": "Loyola Marymount University - Baldwin Park",
                "state": "California",
                "createdAt": "2024-01-16T10:42:13.000Z",
                "updatedAt": "2024-01-16T10:42:13.000Z"
            }
        })),
    )
}

async fn institutions(
    State(seen): State<Seen>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> (StatusCode, Json<Value>) {
    guarded!(seen, "/admin/institutions", headers, query, json!({
        "status": "success",
        "data": {
            "institutions": [{
                "id": 3,
                "schoolName": "Georgia State University",
                "type": "University",
                "state": "Georgia",
                "city": "Atlanta"
            }]
        }
    }))
}

async fn add_institution(
    State(seen): State<Seen>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    guarded!(seen, "/admin/add-institution", headers, None, json!({
        "status": "success",
        "schoolLocation": {
            "id": 44,
            "name": body.get("name").cloned().unwrap_or(Value::Null),
            "type": body.get("type").cloned().unwrap_or(Value::Null),
            "state": body.get("state").cloned().unwrap_or(Value::Null),
            "city": body.get("city").cloned().unwrap_or(Value::Null),
            "createdAt": "2025-03-01T00:00:00.000Z"
        }
    }))
}

async fn profiles(State(seen): State<Seen>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    guarded!(seen, "/admin/profiles", headers, None, json!({
        "status": "success",
        "data": [
            {"id": 1, "email": "admin@cauhec.org", "role": "admin", "firstName": "Ada", "lastName": "Admin"},
            {"id": 2, "email": "karishma@gmail.com", "role": "admin"}
        ]
    }))
}

async fn create_admin(
    State(seen): State<Seen>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    guarded!(seen, "/admin/create", headers, None, json!({
        "status": "success",
        "user": {
            "id": 9,
            "email": body.get("email").cloned().unwrap_or(Value::Null),
            "role": "admin"
        }
    }))
}

async fn delete_profile(
    State(seen): State<Seen>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> (StatusCode, Json<Value>) {
    guarded!(seen, &format!("/admin/profile/{id}"), headers, None, json!({
        "status": "success",
        "message": "Profile deleted"
    }))
}

/// Serves a single `path` that answers GET and POST with `status` and `body`.
pub async fn serve_fixed(path: &str, status: StatusCode, body: Value) -> String {
    let route = format!("{API_PREFIX}{path}");
    let app = Router::new().route(
        &route,
        get({
            let body = body.clone();
            move || async move { (status, Json(body)) }
        })
        .post(move || async move { (status, Json(body)) }),
    );
    serve(app).await
}
