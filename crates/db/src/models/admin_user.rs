//! Admin account model.

use serde::Serialize;
use sqlx::FromRow;
use vodboard_core::types::{DbId, Timestamp};

/// An admin account row from the `admin_users` table.
///
/// The password hash is never serialized into API responses.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AdminUser {
    pub id: DbId,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
