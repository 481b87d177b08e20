//! One endpoint per rendered page.
//!
//! Each public view maps to a single GET returning everything the page
//! renders: the board menu, the resolved entity, and the page of content.
//! Every payload echoes the navigation key it was computed for (`nav`), so
//! a client that fires overlapping requests can drop any response whose key
//! no longer matches its latest navigation.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use vodboard_core::ads::{home_grid_creatives, AdCreative, AdZone, BANNER_ZONES};
use vodboard_core::pages::{find_page, StaticPage};
use vodboard_core::paging::{
    total_pages, validate_page, PageWindow, BOARD_PAGE_SIZE, RELATED_MAX, RELATED_POOL_LIMIT,
};
use vodboard_core::player::{classify_source, PlayerSource};
use vodboard_core::related::sample_related;
use vodboard_core::resolve::{resolve_by_slug, SlugLookup};
use vodboard_core::seo::{video_json_ld, VideoMeta};
use vodboard_db::models::board::Board;
use vodboard_db::models::video::{RelatedVideo, Video};
use vodboard_db::repositories::{BoardRepo, VideoRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// How a board slug resolved, serialized for the client to branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// The slug matched a board.
    Found,
    /// The board list is loaded and the slug is genuinely absent.
    Missing,
    /// The board list itself is empty; nothing can resolve yet.
    Unloaded,
}

impl<T> From<&SlugLookup<'_, T>> for Resolution {
    fn from(lookup: &SlugLookup<'_, T>) -> Self {
        match lookup {
            SlugLookup::Found(_) => Resolution::Found,
            SlugLookup::Missing => Resolution::Missing,
            SlugLookup::Unloaded => Resolution::Unloaded,
        }
    }
}

/// Window metadata for one page of a board grid.
#[derive(Debug, Serialize)]
pub struct PageMeta {
    pub page: i64,
    pub page_size: i64,
    pub total_count: i64,
    pub total_pages: i64,
}

/// Navigation key echoed in board view payloads.
#[derive(Debug, Serialize)]
pub struct BoardNav {
    pub board_slug: String,
    pub page: i64,
}

/// Navigation key echoed in watch view payloads.
#[derive(Debug, Serialize)]
pub struct WatchNav {
    pub slug: String,
}

/// GET /api/v1/views/home
#[derive(Debug, Serialize)]
pub struct HomeView {
    pub boards: Vec<Board>,
    pub ad_grid: Vec<AdCreative>,
}

/// GET /api/v1/views/boards/{slug}[/{page}]
#[derive(Debug, Serialize)]
pub struct BoardView {
    pub nav: BoardNav,
    pub boards: Vec<Board>,
    pub resolution: Resolution,
    pub board: Option<Board>,
    pub videos: Vec<Video>,
    pub page: Option<PageMeta>,
}

/// GET /api/v1/views/watch/{slug}
#[derive(Debug, Serialize)]
pub struct WatchView {
    pub nav: WatchNav,
    pub boards: Vec<Board>,
    pub video: Video,
    pub board: Board,
    pub player: PlayerSource,
    pub related: Vec<RelatedVideo>,
    pub banner_zones: &'static [AdZone],
    pub json_ld: Value,
}

/// GET /api/v1/views/home
///
/// The landing page: board menu plus the static ad grid.
pub async fn home(State(state): State<AppState>) -> AppResult<Json<HomeView>> {
    let boards = BoardRepo::list(&state.pool).await?;
    Ok(Json(HomeView {
        boards,
        ad_grid: home_grid_creatives(),
    }))
}

/// GET /api/v1/views/boards/{slug}
///
/// First page of a board grid.
pub async fn board(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<BoardView>> {
    board_view(state, slug, 1).await
}

/// GET /api/v1/views/boards/{slug}/{page}
pub async fn board_page(
    State(state): State<AppState>,
    Path((slug, page)): Path<(String, i64)>,
) -> AppResult<Json<BoardView>> {
    board_view(state, slug, page).await
}

/// Shared board-view assembly.
///
/// The board list is fetched wholesale (it is small and bounded) and the
/// slug resolved locally; only the video page is a windowed query. The
/// resolution tri-state goes out explicitly rather than collapsing
/// "unknown board" and "menu not loaded" into one empty screen.
async fn board_view(state: AppState, slug: String, page: i64) -> AppResult<Json<BoardView>> {
    let boards = BoardRepo::list(&state.pool).await?;

    let lookup = resolve_by_slug(&boards, &slug, |b: &Board| &b.slug);
    let resolution = Resolution::from(&lookup);
    let board = match lookup {
        SlugLookup::Found(b) => Some(b.clone()),
        SlugLookup::Missing | SlugLookup::Unloaded => None,
    };

    let (videos, page_meta) = match &board {
        Some(board) => {
            let total_count = VideoRepo::count_by_board(&state.pool, board.id).await?;
            let pages = total_pages(total_count, BOARD_PAGE_SIZE);
            validate_page(page, pages)?;

            let window = PageWindow::for_page(page, BOARD_PAGE_SIZE);
            let videos =
                VideoRepo::page_by_board(&state.pool, board.id, window.limit, window.offset)
                    .await?;
            (
                videos,
                Some(PageMeta {
                    page,
                    page_size: BOARD_PAGE_SIZE,
                    total_count,
                    total_pages: pages,
                }),
            )
        }
        None => (Vec::new(), None),
    };

    Ok(Json(BoardView {
        nav: BoardNav {
            board_slug: slug,
            page,
        },
        boards,
        resolution,
        board,
        videos,
        page: page_meta,
    }))
}

/// GET /api/v1/views/watch/{slug}
///
/// The watch page: the video (a point query; the full video set is never
/// loaded), its board, a freshly sampled related rail, player
/// classification, sidebar ad zones, and the structured-data block.
pub async fn watch(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<WatchView>> {
    let boards = BoardRepo::list(&state.pool).await?;

    let video = VideoRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No video with slug '{slug}'")))?;

    let board = BoardRepo::find_by_id(&state.pool, video.board_id)
        .await?
        .ok_or_else(|| {
            AppError::InternalError(format!(
                "Video {} references missing board {}",
                video.id, video.board_id
            ))
        })?;

    let candidates =
        VideoRepo::related_pool(&state.pool, board.id, &slug, RELATED_POOL_LIMIT).await?;
    let related = sample_related(candidates, &slug, RELATED_MAX, |v: &RelatedVideo| &v.slug);

    let player = classify_source(&video.video_url);
    let json_ld = video_json_ld(
        &VideoMeta {
            title: &video.title,
            description: video.description.as_deref(),
            thumbnail_url: video.thumbnail_url.as_deref(),
            video_url: &video.video_url,
            slug: &video.slug,
            uploaded_at: video.created_at,
        },
        &state.config.public_base_url,
        &state.config.site_name,
    );

    Ok(Json(WatchView {
        nav: WatchNav { slug },
        boards,
        video,
        board,
        player,
        related,
        banner_zones: BANNER_ZONES,
        json_ld,
    }))
}

/// GET /api/v1/views/pages/{slug}
///
/// Static content pages (about, tos, privacy).
pub async fn static_page(Path(slug): Path<String>) -> AppResult<Json<&'static StaticPage>> {
    find_page(&slug)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No page with slug '{slug}'")))
}
