use std::time::Duration;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tokio::net::TcpListener;
use uuid::Uuid;

pub mod fixtures;

use fixtures::{UserRecord, PER_PAGE, RESOURCES, TOKEN, USERS};

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<usize>,
    pub delay: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Longest `?delay=` the fixture server honors.
pub const MAX_DELAY_SECS: u64 = 10;

type Reply = (StatusCode, Json<Value>);

pub fn app() -> Router {
    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route(
            "/api/users/{id}",
            get(get_user)
                .put(update_user)
                .patch(update_user)
                .delete(delete_user),
        )
        .route("/api/unknown", get(list_resources))
        .route("/api/unknown/{id}", get(get_resource))
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        .fallback(not_found)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn now() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

fn not_found_reply() -> Reply {
    (StatusCode::NOT_FOUND, Json(json!({})))
}

fn error_reply(message: &str) -> Reply {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
}

fn page_reply<T: serde::Serialize>(records: &[T], page: usize) -> Json<Value> {
    Json(json!({
        "page": page,
        "per_page": PER_PAGE,
        "total": records.len(),
        "total_pages": fixtures::total_pages(records.len()),
        "data": fixtures::page_of(records, page),
    }))
}

async fn not_found() -> Reply {
    not_found_reply()
}

async fn list_users(Query(params): Query<ListParams>) -> Json<Value> {
    if let Some(secs) = params.delay {
        let secs = secs.min(MAX_DELAY_SECS);
        tracing::debug!(secs, "delaying user list");
        tokio::time::sleep(Duration::from_secs(secs)).await;
    }
    page_reply(&USERS, params.page.unwrap_or(1))
}

async fn list_resources(Query(params): Query<ListParams>) -> Json<Value> {
    page_reply(&RESOURCES, params.page.unwrap_or(1))
}

async fn get_user(Path(id): Path<String>) -> Reply {
    match id.parse().ok().and_then(fixtures::user) {
        Some(user) => (StatusCode::OK, Json(json!({ "data": user }))),
        None => not_found_reply(),
    }
}

async fn get_resource(Path(id): Path<String>) -> Reply {
    match id.parse().ok().and_then(fixtures::resource) {
        Some(resource) => (StatusCode::OK, Json(json!({ "data": resource }))),
        None => not_found_reply(),
    }
}

/// Echo the submitted object with a generated `id` and `createdAt`.
async fn create_user(Json(mut body): Json<Map<String, Value>>) -> Reply {
    body.insert("id".to_string(), Value::String(Uuid::new_v4().to_string()));
    body.insert("createdAt".to_string(), Value::String(now()));
    (StatusCode::CREATED, Json(Value::Object(body)))
}

async fn update_user(Path(_id): Path<String>, Json(mut body): Json<Map<String, Value>>) -> Json<Value> {
    body.insert("updatedAt".to_string(), Value::String(now()));
    Json(Value::Object(body))
}

async fn delete_user(Path(_id): Path<String>) -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Shared credential checks. Password presence is checked before the user
/// lookup, so an unknown email without a password still reports the password.
fn authenticate(creds: &Credentials, unknown_user: &str) -> Result<&'static UserRecord, Reply> {
    let email = creds
        .email
        .as_deref()
        .filter(|e| !e.is_empty())
        .ok_or_else(|| error_reply("Missing email or username"))?;
    if creds.password.as_deref().is_none_or(str::is_empty) {
        return Err(error_reply("Missing password"));
    }
    fixtures::user_by_email(email).ok_or_else(|| error_reply(unknown_user))
}

async fn register(Json(creds): Json<Credentials>) -> Reply {
    match authenticate(&creds, "Note: Only defined users succeed registration") {
        Ok(user) => (StatusCode::OK, Json(json!({ "id": user.id, "token": TOKEN }))),
        Err(reply) => reply,
    }
}

async fn login(Json(creds): Json<Credentials>) -> Reply {
    match authenticate(&creds, "user not found") {
        Ok(_) => (StatusCode::OK, Json(json!({ "token": TOKEN }))),
        Err(reply) => reply,
    }
}
