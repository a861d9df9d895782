use std::sync::Arc;

use crate::config::ServerConfig;
use crate::storage::ImageStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference counted and everything else sits
/// behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: showcase_db::DbPool,
    /// Server configuration (JWT settings, registration code, upload limits).
    pub config: Arc<ServerConfig>,
    /// Local blob store for preview images.
    pub images: Arc<ImageStore>,
}

impl AppState {
    pub fn new(pool: showcase_db::DbPool, config: ServerConfig) -> Self {
        let images = ImageStore::new(config.storage_dir.clone(), config.max_upload_bytes);
        Self {
            pool,
            config: Arc::new(config),
            images: Arc::new(images),
        }
    }
}
