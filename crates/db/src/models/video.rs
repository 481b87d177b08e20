//! Video entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vodboard_core::types::{DbId, Timestamp};

/// A video row from the `videos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Video {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub slug: String,
    /// Direct media file or embeddable third-party URL.
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub board_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Narrow row for the related-video rail (only what the rail renders).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RelatedVideo {
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub thumbnail_url: Option<String>,
}

/// A video joined with its owning board's name, for the admin console table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AdminVideoRow {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub slug: String,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub board_id: DbId,
    pub board_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new video.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVideo {
    pub title: String,
    pub description: Option<String>,
    pub board_id: DbId,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    /// Derived from `title` if omitted.
    pub slug: Option<String>,
}

/// DTO for updating an existing video. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateVideo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub board_id: Option<DbId>,
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub slug: Option<String>,
}
