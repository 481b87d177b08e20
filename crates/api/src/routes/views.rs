//! Route definitions for the public `/views` surface.
//!
//! One endpoint per rendered page; the client-side paths `/`,
//! `/{boardSlug}`, `/{boardSlug}/{page}`, `/watch/{slug}`, `/about`,
//! `/tos`, and `/privacy` each map onto exactly one of these.

use axum::routing::get;
use axum::Router;

use crate::handlers::views;
use crate::state::AppState;

/// Routes mounted at `/views`.
///
/// ```text
/// GET /home                   -> home (board menu + ad grid)
/// GET /boards/{slug}          -> board grid, first page
/// GET /boards/{slug}/{page}   -> board grid, given page
/// GET /watch/{slug}           -> watch page payload
/// GET /pages/{slug}           -> static page (about, tos, privacy)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/home", get(views::home))
        .route("/boards/{slug}", get(views::board))
        .route("/boards/{slug}/{page}", get(views::board_page))
        .route("/watch/{slug}", get(views::watch))
        .route("/pages/{slug}", get(views::static_page))
}
