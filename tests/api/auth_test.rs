//! Authentication API integration tests
//!
//! Tests for the registration and login endpoints, including duplicate
//! handling and the deliberately vague login failures.

use axum::http::StatusCode;
use serde_json::json;

use bookshelf::auth::{LoginForm, TokenResponse};

use crate::assert_contains;
use crate::common::auth_helpers::create_test_user;
use crate::common::server::create_test_app;

fn register_body(username: &str, email: &str, password: &str) -> serde_json::Value {
    json!({
        "username": username,
        "email": email,
        "password": password,
    })
}

fn login_form(username: &str, password: &str) -> LoginForm {
    LoginForm {
        username: username.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_register_success() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/auth/register")
        .json(&register_body("alice", "alice@example.com", "password123"))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "User registered successfully");
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = create_test_app().await;

    app.server
        .post("/auth/register")
        .json(&register_body("alice", "alice@example.com", "password123"))
        .await;

    let response = app
        .server
        .post("/auth/register")
        .json(&register_body("alice", "other@example.com", "password123"))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Username already registered");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = create_test_app().await;

    app.server
        .post("/auth/register")
        .json(&register_body("alice", "shared@example.com", "password123"))
        .await;

    let response = app
        .server
        .post("/auth/register")
        .json(&register_body("bob", "shared@example.com", "password123"))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Email already registered");
}

#[tokio::test]
async fn test_register_concurrent_duplicates_single_winner() {
    let app = create_test_app().await;

    // Two identical registrations racing; the unique index decides
    let (first, second) = tokio::join!(
        app.server
            .post("/auth/register")
            .json(&register_body("racer", "racer@example.com", "password123")),
        app.server
            .post("/auth/register")
            .json(&register_body("racer", "racer@example.com", "password123")),
    );

    let statuses = [first.status_code(), second.status_code()];
    let winners = statuses.iter().filter(|s| **s == StatusCode::OK).count();
    let losers = statuses
        .iter()
        .filter(|s| **s == StatusCode::BAD_REQUEST)
        .count();

    assert_eq!(winners, 1, "exactly one registration must succeed");
    assert_eq!(losers, 1, "the other must fail as a duplicate");
}

#[tokio::test]
async fn test_register_rejects_bad_fields() {
    let app = create_test_app().await;

    // Email without '@'
    let response = app
        .server
        .post("/auth/register")
        .json(&register_body("alice", "not-an-email", "password123"))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["field"], "email");

    // Short password
    let response = app
        .server
        .post("/auth/register")
        .json(&register_body("alice", "alice@example.com", "short"))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["field"], "password");

    // Username starting with a digit
    let response = app
        .server
        .post("/auth/register")
        .json(&register_body("9lives", "nine@example.com", "password123"))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["field"], "username");
}

#[tokio::test]
async fn test_register_rejects_missing_fields() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/auth/register")
        .json(&json!({ "username": "alice" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_login_success() {
    let app = create_test_app().await;
    create_test_user(app.db.pool(), "alice", "password123")
        .await
        .unwrap();

    let response = app
        .server
        .post("/auth/login")
        .form(&login_form("alice", "password123"))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: TokenResponse = response.json();
    assert_eq!(body.token_type, "bearer");
    assert!(!body.access_token.is_empty());
}

#[tokio::test]
async fn test_registered_user_can_log_in() {
    let app = create_test_app().await;

    app.server
        .post("/auth/register")
        .json(&register_body("fresh", "fresh@example.com", "password123"))
        .await;

    let response = app
        .server
        .post("/auth/login")
        .form(&login_form("fresh", "password123"))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = create_test_app().await;
    create_test_user(app.db.pool(), "alice", "password123")
        .await
        .unwrap();

    let unknown_user = app
        .server
        .post("/auth/login")
        .form(&login_form("ghost", "password123"))
        .await;
    let wrong_password = app
        .server
        .post("/auth/login")
        .form(&login_form("alice", "wrong-password"))
        .await;

    assert_eq!(unknown_user.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.status_code(), StatusCode::UNAUTHORIZED);

    // Same status, same body; no username probing
    assert_eq!(unknown_user.text(), wrong_password.text());
    assert_contains!(unknown_user.text(), "Incorrect username or password");

    // Both carry the bearer challenge
    for response in [&unknown_user, &wrong_password] {
        let challenge = response
            .headers()
            .get("www-authenticate")
            .expect("401 must carry WWW-Authenticate");
        assert_eq!(challenge, "Bearer");
    }
}
