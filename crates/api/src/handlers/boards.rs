//! Handlers for the `/boards` resource and its admin console operations.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use vodboard_core::error::CoreError;
use vodboard_core::slug::derive_slug;
use vodboard_core::types::DbId;
use vodboard_db::models::board::{Board, CreateBoard, UpdateBoard};
use vodboard_db::repositories::BoardRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

/// GET /api/v1/boards
///
/// All boards in menu order. Public; feeds the sidebar on every page.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Board>>> {
    let boards = BoardRepo::list(&state.pool).await?;
    Ok(Json(boards))
}

/// POST /api/v1/admin/boards
///
/// Create a board at the end of the menu order. The slug is derived from
/// the name unless supplied explicitly; either way it is normalized before
/// insertion.
pub async fn create(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Json(input): Json<CreateBoard>,
) -> AppResult<(StatusCode, Json<Board>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Board name must not be empty".into(),
        )));
    }

    let slug = derive_slug(input.slug.as_deref(), &input.name)?;
    let board = BoardRepo::create(&state.pool, &input, &slug).await?;

    tracing::info!(board_id = board.id, slug = %board.slug, "Board created");
    Ok((StatusCode::CREATED, Json(board)))
}

/// PUT /api/v1/admin/boards/{id}
///
/// Partial update; a supplied slug is normalized first.
pub async fn update(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateBoard>,
) -> AppResult<Json<Board>> {
    if let Some(raw) = input.slug.take() {
        input.slug = Some(derive_slug(Some(raw.as_str()), "")?);
    }
    if let Some(name) = input.name.as_deref() {
        if name.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "Board name must not be empty".into(),
            )));
        }
    }

    let board = BoardRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Board", id }))?;
    Ok(Json(board))
}

/// DELETE /api/v1/admin/boards/{id}
///
/// Removes the board and, via FK cascade, every video on it.
pub async fn delete(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = BoardRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Board", id }))
    }
}

/// Direction for a menu reorder.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    Up,
    Down,
}

/// Request body for `POST /admin/boards/{id}/move`.
#[derive(Debug, Deserialize)]
pub struct MoveBoardRequest {
    pub direction: MoveDirection,
}

/// POST /api/v1/admin/boards/{id}/move
///
/// Swap the board with its menu neighbour in the given direction. Moving
/// past either end is a no-op; the response is always the full list in its
/// (possibly unchanged) new order.
pub async fn move_board(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<MoveBoardRequest>,
) -> AppResult<Json<Vec<Board>>> {
    let boards = BoardRepo::list(&state.pool).await?;
    let index = boards
        .iter()
        .position(|b| b.id == id)
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Board", id }))?;

    let swap_index = match input.direction {
        MoveDirection::Up => index.checked_sub(1),
        MoveDirection::Down => {
            let next = index + 1;
            (next < boards.len()).then_some(next)
        }
    };

    if let Some(swap_index) = swap_index {
        BoardRepo::swap_positions(&state.pool, &boards[index], &boards[swap_index]).await?;
    }

    let boards = BoardRepo::list(&state.pool).await?;
    Ok(Json(boards))
}
