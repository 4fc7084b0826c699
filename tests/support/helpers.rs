// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use chrono::{TimeZone, Utc};
use serde_json::Value;

use super::mocks;
use restaurant_core::application::ports::{security::PasswordHasher, time::Clock};
use restaurant_core::application::services::ApplicationServices;
use restaurant_core::domain::user::UserRepository;
use restaurant_core::infrastructure::{repositories::InMemoryUserRepository, time::FixedClock};
use restaurant_core::presentation::http::{
    routes::{RouteTable, build_router, build_router_with_table},
    state::HttpState,
};

pub const REGISTER_PATH: &str = "/api/auth/register";
pub const TEST_BODY_LIMIT: usize = 64 * 1024;

pub fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()))
}

pub fn build_state_with(
    user_repo: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
) -> HttpState {
    let services = Arc::new(ApplicationServices::new(
        user_repo,
        password_hasher,
        fixed_clock(),
    ));
    HttpState {
        services,
        max_body_bytes: TEST_BODY_LIMIT,
    }
}

pub fn build_test_state() -> HttpState {
    build_state_with(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(mocks::DummyPasswordHasher),
    )
}

pub fn make_test_router() -> axum::Router {
    build_router(build_test_state())
}

pub fn make_router_with(
    user_repo: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
) -> axum::Router {
    build_router(build_state_with(user_repo, password_hasher))
}

pub fn make_router_with_table(table: RouteTable) -> axum::Router {
    build_router_with_table(table, build_test_state())
}

pub fn john_doe() -> Value {
    serde_json::json!({
        "first_name": "John",
        "last_name": "Doe",
        "email": "john.doe@example.com",
        "password": "password123",
        "phone": "12345678901",
    })
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    raw_request(method, uri, body.to_string())
}

pub fn raw_request(method: Method, uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn read_json(resp: Response) -> Value {
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    serde_json::from_slice(&body_bytes).expect("expected a JSON body")
}

/// Assert that a response is an AppError body with the expected status and
/// code, and return the parsed body for further checks.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_code: &str) -> Value {
    assert_eq!(resp.status(), expected_status);
    let json = read_json(resp).await;

    assert_eq!(json["code"], expected_code, "unexpected body: {json}");
    assert!(json["type"].is_string(), "missing type in {json}");
    assert!(
        json["message"].as_str().is_some_and(|m| !m.is_empty()),
        "expected a non-empty message in {json}"
    );
    json
}
