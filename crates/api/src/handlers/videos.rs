//! Handlers for the admin console's `/admin/videos` operations.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use vodboard_core::error::CoreError;
use vodboard_core::paging::{total_pages, validate_page, PageWindow, ADMIN_PAGE_SIZE};
use vodboard_core::slug::derive_slug;
use vodboard_core::types::DbId;
use vodboard_db::models::video::{AdminVideoRow, CreateVideo, UpdateVideo, Video};
use vodboard_db::repositories::{BoardRepo, VideoRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::query::AdminVideoParams;
use crate::response::Paginated;
use crate::state::AppState;

/// GET /api/v1/admin/videos?search=&page=
///
/// Newest-first console listing across all boards, optionally filtered by a
/// case-insensitive substring match on the title. Out-of-range pages are
/// rejected, not clamped.
pub async fn list(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Query(params): Query<AdminVideoParams>,
) -> AppResult<Json<Paginated<AdminVideoRow>>> {
    let page = params.page.unwrap_or(1);
    let search = params
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let total_count = VideoRepo::count_admin(&state.pool, search).await?;
    validate_page(page, total_pages(total_count, ADMIN_PAGE_SIZE))?;

    let window = PageWindow::for_page(page, ADMIN_PAGE_SIZE);
    let items = VideoRepo::page_admin(&state.pool, search, window.limit, window.offset).await?;

    Ok(Json(Paginated::new(items, page, ADMIN_PAGE_SIZE, total_count)))
}

/// POST /api/v1/admin/videos
///
/// Create a video. The slug is derived from the title unless supplied
/// explicitly; either way it is normalized before insertion, and a
/// collision with an existing slug surfaces as 409.
pub async fn create(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Json(input): Json<CreateVideo>,
) -> AppResult<(StatusCode, Json<Video>)> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Title must not be empty".into(),
        )));
    }
    if input.video_url.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Video URL must not be empty".into(),
        )));
    }

    // The FK would also catch this, but an explicit check turns a broken
    // board reference into a 400 instead of a 500.
    BoardRepo::find_by_id(&state.pool, input.board_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!(
                "Board {} does not exist",
                input.board_id
            )))
        })?;

    let slug = derive_slug(input.slug.as_deref(), &input.title)?;
    let video = VideoRepo::create(&state.pool, &input, &slug).await?;

    tracing::info!(video_id = video.id, slug = %video.slug, "Video created");
    Ok((StatusCode::CREATED, Json(video)))
}

/// PUT /api/v1/admin/videos/{id}
///
/// Partial update. A supplied slug is normalized; when only the title
/// changes, the slug is re-derived from it, mirroring creation.
pub async fn update(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateVideo>,
) -> AppResult<Json<Video>> {
    if let Some(board_id) = input.board_id {
        BoardRepo::find_by_id(&state.pool, board_id)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Validation(format!(
                    "Board {board_id} does not exist"
                )))
            })?;
    }

    let slug = match (input.slug.as_deref(), input.title.as_deref()) {
        (Some(explicit), _) => Some(derive_slug(Some(explicit), "")?),
        (None, Some(title)) => Some(derive_slug(None, title)?),
        (None, None) => None,
    };

    let video = VideoRepo::update(&state.pool, id, &input, slug.as_deref())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Video", id }))?;
    Ok(Json(video))
}

/// DELETE /api/v1/admin/videos/{id}
pub async fn delete(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = VideoRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Video", id }))
    }
}

/// Request body for `POST /admin/videos/bulk-delete`.
#[derive(Debug, Deserialize)]
pub struct BulkDeleteRequest {
    pub ids: Vec<DbId>,
}

/// Response for a bulk delete.
#[derive(Debug, Serialize)]
pub struct BulkDeleteResponse {
    pub deleted: u64,
}

/// POST /api/v1/admin/videos/bulk-delete
///
/// Delete the selected set in one statement. An empty selection is rejected.
pub async fn bulk_delete(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Json(input): Json<BulkDeleteRequest>,
) -> AppResult<Json<BulkDeleteResponse>> {
    if input.ids.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "No video ids supplied".into(),
        )));
    }

    let deleted = VideoRepo::delete_many(&state.pool, &input.ids).await?;
    tracing::info!(count = deleted, "Videos bulk-deleted");
    Ok(Json(BulkDeleteResponse { deleted }))
}
