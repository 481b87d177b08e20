//! Integration tests for authentication: token validation and the admin
//! route guard. Nothing here touches the database -- the guard rejects a
//! request before any repository runs.

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use common::{body_json, get, send};
use vodboard_api::auth::jwt::generate_access_token;

/// Mint a token signed with the test secret.
fn test_token() -> String {
    let config = common::test_config();
    generate_access_token(1, "admin@example.com", &config.jwt)
        .expect("token generation should succeed")
}

// ---------------------------------------------------------------------------
// Test: missing Authorization header is rejected
// ---------------------------------------------------------------------------

#[tokio::test]
async fn logout_without_token_returns_401() {
    let app = common::build_test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/auth/logout")
        .body(Body::empty())
        .unwrap();

    let response = send(app, request).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

// ---------------------------------------------------------------------------
// Test: malformed and garbage tokens are rejected
// ---------------------------------------------------------------------------

#[tokio::test]
async fn malformed_bearer_token_returns_401() {
    for auth_value in ["Bearer not-a-jwt", "Basic abc123"] {
        let app = common::build_test_app();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/auth/logout")
            .header(header::AUTHORIZATION, auth_value)
            .body(Body::empty())
            .unwrap();

        let response = send(app, request).await;
        assert_eq!(
            response.status(),
            StatusCode::UNAUTHORIZED,
            "auth value {auth_value:?} must be rejected"
        );
    }
}

// ---------------------------------------------------------------------------
// Test: a valid token passes the guard
// ---------------------------------------------------------------------------

#[tokio::test]
async fn logout_with_valid_token_returns_204() {
    let app = common::build_test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/auth/logout")
        .header(header::AUTHORIZATION, format!("Bearer {}", test_token()))
        .body(Body::empty())
        .unwrap();

    let response = send(app, request).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

// ---------------------------------------------------------------------------
// Test: admin console routes are behind the guard
// ---------------------------------------------------------------------------

#[tokio::test]
async fn admin_listing_requires_auth() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/admin/videos").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Test: input validation runs after auth but before any query
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bulk_delete_with_empty_selection_returns_400() {
    let app = common::build_test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/admin/videos/bulk-delete")
        .header(header::AUTHORIZATION, format!("Bearer {}", test_token()))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"ids":[]}"#))
        .unwrap();

    let response = send(app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}
