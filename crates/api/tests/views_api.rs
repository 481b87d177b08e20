//! Integration tests for the database-free parts of the `/views` surface.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};

// ---------------------------------------------------------------------------
// Test: static pages are served by slug
// ---------------------------------------------------------------------------

#[tokio::test]
async fn static_pages_resolve_by_slug() {
    for (slug, title) in [
        ("about", "About Us"),
        ("tos", "Terms of Service"),
        ("privacy", "Privacy Policy"),
    ] {
        let app = common::build_test_app();
        let response = get(app, &format!("/api/v1/views/pages/{slug}")).await;

        assert_eq!(response.status(), StatusCode::OK, "page {slug}");

        let json = body_json(response).await;
        assert_eq!(json["slug"], slug);
        assert_eq!(json["title"], title);
        assert!(json["body"].as_str().is_some_and(|b| !b.is_empty()));
    }
}

// ---------------------------------------------------------------------------
// Test: unknown static page slug is a JSON 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_static_page_returns_404() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/views/pages/qna").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}
