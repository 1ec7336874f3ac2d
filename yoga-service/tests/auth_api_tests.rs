mod common;

use auth::TokenCodec;
use chrono::Duration;
use chrono::Utc;
use common::TestApp;
use common::TEST_TOKEN_LIFETIME_MS;
use reqwest::StatusCode;
use serde_json::json;
use serde_json::Value;

#[tokio::test]
async fn test_login_success_returns_token_and_profile() {
    let app = TestApp::spawn().await;
    app.register("test@example.com", "password123").await;

    let response = app.login("test@example.com", "password123").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["type"], "Bearer");
    assert_eq!(body["id"], 1);
    assert_eq!(body["username"], "test@example.com");
    assert_eq!(body["firstName"], "John");
    assert_eq!(body["lastName"], "Doe");
    assert_eq!(body["admin"], false);
    assert!(body.get("password").is_none());

    let token = body["token"].as_str().unwrap();
    assert!(app.authenticator.validate_token(token));
    assert_eq!(
        app.authenticator.subject_of(token).unwrap(),
        "test@example.com"
    );
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::spawn().await;
    app.register("test@example.com", "password123").await;

    let response = app.login("test@example.com", "wrongpassword").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.unwrap();
    assert!(body.get("token").is_none());
    assert_eq!(body["status"], 401);
    assert_eq!(body["error"], "Unauthorized");
    assert_eq!(body["message"], "Bad credentials");
    assert_eq!(body["path"], "/api/auth/login");
}

#[tokio::test]
async fn test_login_unknown_user_looks_like_wrong_password() {
    let app = TestApp::spawn().await;
    app.register("test@example.com", "password123").await;

    let unknown: Value = app
        .login("ghost@example.com", "password123")
        .await
        .json()
        .await
        .unwrap();
    let wrong: Value = app
        .login("test@example.com", "wrongpassword")
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(unknown, wrong);
}

#[tokio::test]
async fn test_login_blank_fields() {
    let app = TestApp::spawn().await;

    let response = app.login("", "").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_success_stores_hash_once() {
    let app = TestApp::spawn().await;

    let response = app.register("new@example.com", "password123").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "message": "User registered successfully!" }));

    assert_eq!(app.users.create_calls(), 1);
    let stored = app.users.stored("new@example.com").unwrap();
    assert_ne!(stored.password_hash, "password123");
    assert!(stored.password_hash.starts_with("$argon2id$"));
    assert!(!stored.admin);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::spawn().await;
    app.register("taken@example.com", "password123").await;

    let response = app.register("taken@example.com", "otherpassword").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Error: Email is already taken!" }));
    assert_eq!(app.users.create_calls(), 1);
}

#[tokio::test]
async fn test_register_invalid_fields() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "email": "not-an-email",
            "firstName": "John",
            "lastName": "Doe",
            "password": "password123",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "email": "short@example.com",
            "firstName": "Jo",
            "lastName": "Doe",
            "password": "password123",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.register("weak@example.com", "12345").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(app.users.create_calls(), 0);
}

#[tokio::test]
async fn test_protected_route_with_valid_token() {
    let app = TestApp::spawn().await;
    let (token, _) = app.signed_in_user("test@example.com").await;

    let response = app
        .get_authenticated("/api/session", &token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_protected_route_without_token() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/session").send().await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], 401);
    assert_eq!(body["error"], "Unauthorized");
    assert_eq!(
        body["message"],
        "Full authentication is required to access this resource"
    );
    assert_eq!(body["path"], "/api/session");
}

#[tokio::test]
async fn test_protected_route_with_expired_token() {
    let app = TestApp::spawn().await;
    app.signed_in_user("test@example.com").await;

    let issued_at = Utc::now() - Duration::milliseconds(TEST_TOKEN_LIFETIME_MS) - Duration::hours(1);
    let expired = app
        .authenticator
        .token_codec()
        .issue_at("test@example.com", issued_at)
        .unwrap();

    let response = app
        .get_authenticated("/api/teacher", &expired)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], 401);
    assert_eq!(body["path"], "/api/teacher");
}

#[tokio::test]
async fn test_protected_route_with_rejected_tokens() {
    let app = TestApp::spawn().await;
    app.signed_in_user("test@example.com").await;

    let foreign_codec = TokenCodec::new(&[42u8; 64], TEST_TOKEN_LIFETIME_MS).unwrap();
    let foreign = foreign_codec.issue("test@example.com").unwrap();

    for token in ["", "not-a-token", "a.b.c", "a.b.c.d", foreign.as_str()] {
        let response = app
            .get("/api/session")
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "token {:?}", token);
    }
}

#[tokio::test]
async fn test_non_bearer_scheme_is_ignored() {
    let app = TestApp::spawn().await;
    let (token, _) = app.signed_in_user("test@example.com").await;

    let response = app
        .get("/api/session")
        .header("Authorization", format!("Token {}", token))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_for_deleted_user_is_rejected() {
    let app = TestApp::spawn().await;
    let (token, id) = app.signed_in_user("test@example.com").await;

    let response = app
        .delete_authenticated(&format!("/api/user/{}", id), &token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    assert!(app.authenticator.validate_token(token.as_str()));
    let response = app
        .get_authenticated("/api/session", &token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_public_routes_ignore_bad_tokens() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/register")
        .bearer_auth("garbage")
        .json(&json!({
            "email": "new@example.com",
            "firstName": "John",
            "lastName": "Doe",
            "password": "password123",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
