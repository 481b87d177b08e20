//! Board entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vodboard_core::types::{DbId, Timestamp};

/// A board row from the `boards` table.
///
/// Boards are the site's categories. `position` defines the strict menu
/// order; `slug` is the unique routing key.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Board {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub category: Option<String>,
    pub position: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new board.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBoard {
    pub name: String,
    pub category: Option<String>,
    /// Derived from `name` if omitted.
    pub slug: Option<String>,
}

/// DTO for updating an existing board. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBoard {
    pub name: Option<String>,
    pub category: Option<String>,
    pub slug: Option<String>,
}
