//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// `?search=&page=` for the admin video listing.
#[derive(Debug, Deserialize)]
pub struct AdminVideoParams {
    /// Case-insensitive substring match on the title.
    pub search: Option<String>,
    pub page: Option<i64>,
}
