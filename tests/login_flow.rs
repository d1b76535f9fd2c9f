mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{Canned, containers_ok, login_ok};

#[tokio::test]
async fn test_login_stores_token_and_redirects_home() {
    let stub = common::spawn_stub_api(login_ok("abc"), containers_ok(json!([]))).await;
    let server = common::create_test_server(&stub.base_url);

    let response = server
        .post("/")
        .form(&[("username", "alice"), ("password", "s3cret")])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/home");

    let set_cookie = response.header("set-cookie");
    assert_eq!(common::cookie_pair(set_cookie.to_str().unwrap()), "token=abc");

    assert_eq!(
        stub.recorded.login_bodies(),
        vec![json!({"username": "alice", "password": "s3cret"})]
    );
}

#[tokio::test]
async fn test_login_401_shows_server_message() {
    let stub = common::spawn_stub_api(
        Canned::json(StatusCode::UNAUTHORIZED, json!({"message": "bad creds"})),
        containers_ok(json!([])),
    )
    .await;
    let server = common::create_test_server(&stub.base_url);

    let response = server
        .post("/")
        .form(&[("username", "alice"), ("password", "nope")])
        .await;

    response.assert_status_ok();
    assert!(response.headers().get("set-cookie").is_none());
    assert!(response.headers().get("location").is_none());
    assert!(
        response
            .text()
            .contains(r#"<div class="alert" role="alert">bad creds</div>"#)
    );
}

#[tokio::test]
async fn test_login_error_without_body_uses_fallback() {
    let stub = common::spawn_stub_api(
        Canned::raw(StatusCode::INTERNAL_SERVER_ERROR, ""),
        containers_ok(json!([])),
    )
    .await;
    let server = common::create_test_server(&stub.base_url);

    let response = server
        .post("/")
        .form(&[("username", "alice"), ("password", "pw")])
        .await;

    assert!(
        response
            .text()
            .contains("Login failed. Please check your credentials.")
    );
}

#[tokio::test]
async fn test_login_error_with_unparsable_body_uses_fallback() {
    let stub = common::spawn_stub_api(
        Canned::raw(StatusCode::BAD_GATEWAY, "<html>upstream down</html>"),
        containers_ok(json!([])),
    )
    .await;
    let server = common::create_test_server(&stub.base_url);

    let response = server
        .post("/")
        .form(&[("username", "alice"), ("password", "pw")])
        .await;

    let body = response.text();
    assert!(body.contains("Login failed. Please check your credentials."));
    assert!(!body.contains("upstream down"));
}

#[tokio::test]
async fn test_login_network_failure_asks_to_try_later() {
    let base_url = common::unreachable_base_url().await;
    let server = common::create_test_server(&base_url);

    let response = server
        .post("/")
        .form(&[("username", "alice"), ("password", "pw")])
        .await;

    response.assert_status_ok();
    assert!(response.headers().get("set-cookie").is_none());
    assert!(
        response
            .text()
            .contains("An error occurred during login. Please try again later.")
    );
}

#[tokio::test]
async fn test_login_success_without_token_is_not_a_session() {
    let stub = common::spawn_stub_api(
        Canned::json(StatusCode::OK, json!({"message": "ok"})),
        containers_ok(json!([])),
    )
    .await;
    let server = common::create_test_server(&stub.base_url);

    let response = server
        .post("/")
        .form(&[("username", "alice"), ("password", "pw")])
        .await;

    response.assert_status_ok();
    assert!(response.headers().get("set-cookie").is_none());
    assert!(
        response
            .text()
            .contains("An error occurred during login. Please try again later.")
    );
}

#[tokio::test]
async fn test_empty_password_never_reaches_the_api() {
    let stub = common::spawn_stub_api(login_ok("abc"), containers_ok(json!([]))).await;
    let server = common::create_test_server(&stub.base_url);

    let response = server
        .post("/")
        .form(&[("username", "alice"), ("password", "")])
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("Username and password are required."));
    assert!(stub.recorded.login_bodies().is_empty());
}

#[tokio::test]
async fn test_login_submissions_are_throttled_per_ip() {
    let stub = common::spawn_stub_api(login_ok("abc"), containers_ok(json!([]))).await;
    let server = common::create_rate_limited_server(&stub.base_url, 60, 2);

    let mut statuses = Vec::new();
    for _ in 0..3 {
        let response = server
            .post("/")
            .form(&[("username", "alice"), ("password", "pw")])
            .await;
        statuses.push(response.status_code());
    }

    assert_eq!(
        statuses,
        vec![
            StatusCode::SEE_OTHER,
            StatusCode::SEE_OTHER,
            StatusCode::TOO_MANY_REQUESTS
        ]
    );
    assert_eq!(stub.recorded.login_bodies().len(), 2);

    server.get("/").await.assert_status_ok();
}
