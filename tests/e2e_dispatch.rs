use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::json;
use tower::util::ServiceExt as _;

mod support;

use support::{REGISTER_PATH, assert_error_response, json_request, john_doe, read_json};

#[tokio::test]
async fn get_on_register_is_method_not_allowed() {
    let app = support::make_test_router();

    let req = Request::builder()
        .method(Method::GET)
        .uri(REGISTER_PATH)
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    let body = assert_error_response(resp, StatusCode::BAD_REQUEST, "METHOD_NOT_ALLOWED").await;
    assert_eq!(
        body["details"],
        json!({
            "method": "GET",
            "path": "/api/auth/register",
            "reason": "Method GET is not allowed for path /api/auth/register",
        })
    );
}

#[tokio::test]
async fn every_other_method_on_a_known_path_is_method_not_allowed() {
    let app = support::make_test_router();

    for method in [Method::PUT, Method::PATCH, Method::DELETE, Method::OPTIONS] {
        let resp = app
            .clone()
            .oneshot(json_request(method.clone(), REGISTER_PATH, &john_doe()))
            .await
            .unwrap();
        let body =
            assert_error_response(resp, StatusCode::BAD_REQUEST, "METHOD_NOT_ALLOWED").await;
        assert_eq!(body["details"]["method"], method.as_str());
    }

    let resp = app
        .oneshot(json_request(Method::POST, "/health", &json!({})))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::BAD_REQUEST, "METHOD_NOT_ALLOWED").await;
}

#[tokio::test]
async fn unknown_path_is_route_not_found() {
    let app = support::make_test_router();

    let resp = app
        .oneshot(json_request(Method::POST, "/api/auth/unknown", &john_doe()))
        .await
        .unwrap();

    let body = assert_error_response(resp, StatusCode::NOT_FOUND, "ROUTE_NOT_FOUND").await;
    assert_eq!(body["type"], "NOT_FOUND");
    assert_eq!(
        body["details"],
        json!({ "path": "/api/auth/unknown", "reason": "Route /api/auth/unknown not found" })
    );
}

#[tokio::test]
async fn unknown_path_is_route_not_found_regardless_of_method() {
    let app = support::make_test_router();

    for method in [Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
        for path in ["/api/auth/login", "/api/auth/register/", "/users", "/"] {
            let req = Request::builder()
                .method(method.clone())
                .uri(path)
                .body(Body::empty())
                .unwrap();
            let resp = app.clone().oneshot(req).await.unwrap();
            assert_error_response(resp, StatusCode::NOT_FOUND, "ROUTE_NOT_FOUND").await;
        }
    }
}

#[tokio::test]
async fn query_string_does_not_affect_path_matching() {
    let app = support::make_test_router();

    let resp = app
        .oneshot(json_request(
            Method::POST,
            "/api/auth/register?source=web",
            &john_doe(),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn health_reports_ok() {
    let app = support::make_test_router();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await, json!({ "status": "ok" }));
}
