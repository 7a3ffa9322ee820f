use std::sync::Arc;

use pointcloud_cache::AnnotationCache;

use crate::config::ServerConfig;

/// Shared application state for the handler role, available to all Axum
/// handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: pointcloud_db::DbPool,
    /// Annotation cache provider (Redis in production, in-memory in tests).
    pub cache: Arc<dyn AnnotationCache>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
