use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Constructed once at startup and passed by reference to every handler;
/// there are no module-level singletons. Cheaply cloneable (the pool is an
/// `Arc` internally).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: vodboard_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
