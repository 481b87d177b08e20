//! Repository for the `boards` table.

use sqlx::PgPool;
use vodboard_core::types::DbId;

use crate::models::board::{Board, CreateBoard, UpdateBoard};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, slug, category, position, created_at, updated_at";

/// Provides CRUD and ordering operations for boards.
pub struct BoardRepo;

impl BoardRepo {
    /// Insert a new board at the end of the menu order, returning the row.
    ///
    /// `slug` is passed separately because the handler derives it from the
    /// name when the input carries none.
    pub async fn create(
        pool: &PgPool,
        input: &CreateBoard,
        slug: &str,
    ) -> Result<Board, sqlx::Error> {
        let query = format!(
            "INSERT INTO boards (name, slug, category, position)
             VALUES ($1, $2, $3, (SELECT COALESCE(MAX(position) + 1, 0) FROM boards))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Board>(&query)
            .bind(&input.name)
            .bind(slug)
            .bind(&input.category)
            .fetch_one(pool)
            .await
    }

    /// List all boards in menu order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Board>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM boards ORDER BY position ASC");
        sqlx::query_as::<_, Board>(&query).fetch_all(pool).await
    }

    /// Find a board by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Board>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM boards WHERE id = $1");
        sqlx::query_as::<_, Board>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a board by its routing slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Board>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM boards WHERE slug = $1");
        sqlx::query_as::<_, Board>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Update a board. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBoard,
    ) -> Result<Option<Board>, sqlx::Error> {
        let query = format!(
            "UPDATE boards SET
                name = COALESCE($2, name),
                category = COALESCE($3, category),
                slug = COALESCE($4, slug)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Board>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.category)
            .bind(&input.slug)
            .fetch_optional(pool)
            .await
    }

    /// Delete a board by ID. Owned videos go with it (FK cascade).
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM boards WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Swap the menu positions of two boards in a single transaction, so a
    /// concurrent reader never observes a duplicated position.
    pub async fn swap_positions(pool: &PgPool, a: &Board, b: &Board) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("UPDATE boards SET position = $2 WHERE id = $1")
            .bind(a.id)
            .bind(b.position)
            .execute(&mut *tx)
            .await?;
        sqlx::query("UPDATE boards SET position = $2 WHERE id = $1")
            .bind(b.id)
            .bind(a.position)
            .execute(&mut *tx)
            .await?;
        tx.commit().await
    }
}
