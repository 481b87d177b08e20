//! Route definitions for the `/admin` console resources.
//!
//! Every handler behind these routes takes the [`AuthAdmin`] extractor, so
//! an unauthenticated request never reaches a repository.
//!
//! [`AuthAdmin`]: crate::middleware::auth::AuthAdmin

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{boards, videos};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// POST   /boards                -> create board (slug from name)
/// PUT    /boards/{id}           -> update board fields
/// DELETE /boards/{id}           -> delete board (cascades to videos)
/// POST   /boards/{id}/move      -> swap with menu neighbour (up/down)
///
/// GET    /videos                -> paginated console listing (?search=&page=)
/// POST   /videos                -> create video (slug from title)
/// PUT    /videos/{id}           -> update video fields
/// DELETE /videos/{id}           -> delete one video
/// POST   /videos/bulk-delete    -> delete a selected set
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/boards", post(boards::create))
        .route(
            "/boards/{id}",
            put(boards::update).delete(boards::delete),
        )
        .route("/boards/{id}/move", post(boards::move_board))
        .route("/videos", get(videos::list).post(videos::create))
        .route(
            "/videos/{id}",
            put(videos::update).delete(videos::delete),
        )
        .route("/videos/bulk-delete", post(videos::bulk_delete))
}
