pub mod admin;
pub mod auth;
pub mod health;
pub mod views;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /views/home                    home page payload
/// /views/boards/{slug}           board grid, first page
/// /views/boards/{slug}/{page}    board grid, given page
/// /views/watch/{slug}            watch page payload
/// /views/pages/{slug}            static pages (about, tos, privacy)
///
/// /boards                        board menu (public)
///
/// /auth/login                    login (public)
/// /auth/logout                   logout (requires auth)
///
/// /admin/boards                  create (admin only)
/// /admin/boards/{id}             update, delete
/// /admin/boards/{id}/move        reorder menu (POST)
/// /admin/videos                  list (?search=&page=), create
/// /admin/videos/{id}             update, delete
/// /admin/videos/bulk-delete      delete a selected set (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Public view payloads, one per rendered page.
        .nest("/views", views::router())
        // Public board menu.
        .route("/boards", get(handlers::boards::list))
        // Authentication.
        .nest("/auth", auth::router())
        // Admin console.
        .nest("/admin", admin::router())
}
