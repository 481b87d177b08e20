//! Repository for the `videos` table.

use sqlx::PgPool;
use vodboard_core::types::DbId;

use crate::models::video::{AdminVideoRow, CreateVideo, RelatedVideo, UpdateVideo, Video};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, description, slug, video_url, thumbnail_url, board_id, created_at, updated_at";

/// Columns for the admin listing, joined with the owning board's name.
const ADMIN_COLUMNS: &str = "v.id, v.title, v.description, v.slug, v.video_url, \
     v.thumbnail_url, v.board_id, b.name AS board_name, v.created_at, v.updated_at";

/// Provides CRUD, pagination, and search operations for videos.
pub struct VideoRepo;

impl VideoRepo {
    /// Insert a new video, returning the created row.
    ///
    /// `slug` is passed separately because the handler derives it from the
    /// title when the input carries none.
    pub async fn create(
        pool: &PgPool,
        input: &CreateVideo,
        slug: &str,
    ) -> Result<Video, sqlx::Error> {
        let query = format!(
            "INSERT INTO videos (title, description, slug, video_url, thumbnail_url, board_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(slug)
            .bind(&input.video_url)
            .bind(&input.thumbnail_url)
            .bind(input.board_id)
            .fetch_one(pool)
            .await
    }

    /// Find a video by its routing slug (point query; the full video set is
    /// never loaded into memory).
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE slug = $1");
        sqlx::query_as::<_, Video>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Find a video by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE id = $1");
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// One page of a board's videos, newest first.
    pub async fn page_by_board(
        pool: &PgPool,
        board_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Video>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM videos
             WHERE board_id = $1
             ORDER BY created_at DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(board_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Total number of videos on a board.
    pub async fn count_by_board(pool: &PgPool, board_id: DbId) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM videos WHERE board_id = $1")
            .bind(board_id)
            .fetch_one(pool)
            .await?;
        Ok(count.0)
    }

    /// Candidate pool for the related rail: other videos on the same board,
    /// capped at `limit` rows. The caller shuffles and truncates in process.
    pub async fn related_pool(
        pool: &PgPool,
        board_id: DbId,
        exclude_slug: &str,
        limit: i64,
    ) -> Result<Vec<RelatedVideo>, sqlx::Error> {
        sqlx::query_as::<_, RelatedVideo>(
            "SELECT id, slug, title, thumbnail_url FROM videos
             WHERE board_id = $1 AND slug <> $2
             LIMIT $3",
        )
        .bind(board_id)
        .bind(exclude_slug)
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// One page of the admin listing: all videos, newest first, with the
    /// owning board's name; optionally filtered by a case-insensitive
    /// substring match on the title.
    pub async fn page_admin(
        pool: &PgPool,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<AdminVideoRow>, sqlx::Error> {
        let query = format!(
            "SELECT {ADMIN_COLUMNS}
             FROM videos v
             JOIN boards b ON b.id = v.board_id
             WHERE ($1::TEXT IS NULL OR v.title ILIKE $1)
             ORDER BY v.created_at DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, AdminVideoRow>(&query)
            .bind(search.map(|s| format!("%{s}%")))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Row count behind [`Self::page_admin`] for the same filter.
    pub async fn count_admin(pool: &PgPool, search: Option<&str>) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM videos WHERE ($1::TEXT IS NULL OR title ILIKE $1)",
        )
        .bind(search.map(|s| format!("%{s}%")))
        .fetch_one(pool)
        .await?;
        Ok(count.0)
    }

    /// Update a video. Only non-`None` fields in `input` are applied;
    /// the slug is passed separately because the handler re-derives it.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVideo,
        slug: Option<&str>,
    ) -> Result<Option<Video>, sqlx::Error> {
        let query = format!(
            "UPDATE videos SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                video_url = COALESCE($4, video_url),
                thumbnail_url = COALESCE($5, thumbnail_url),
                board_id = COALESCE($6, board_id),
                slug = COALESCE($7, slug)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.video_url)
            .bind(&input.thumbnail_url)
            .bind(input.board_id)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Delete a video by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM videos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a set of videos by ID. Returns the number of rows removed.
    pub async fn delete_many(pool: &PgPool, ids: &[DbId]) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM videos WHERE id = ANY($1)")
            .bind(ids)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
