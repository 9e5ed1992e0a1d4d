//! Application state shared across all handlers.

use std::sync::Arc;

use catalog_core::config::AppConfig;
use catalog_database::DatabasePool;
use catalog_database::repositories::{CategoryRepository, DetailRepository, ProductRepository};

/// Immutable state handed to every handler through Axum's `State`
/// extractor. Cloning is cheap: everything sits behind an `Arc` or is a
/// pool handle.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Configuration the server was started with.
    pub config: Arc<AppConfig>,
    /// Connection pool, used directly for health checks.
    pub db: DatabasePool,
    /// Category repository.
    pub categories: Arc<CategoryRepository>,
    /// Product repository.
    pub products: Arc<ProductRepository>,
    /// Product detail (join) repository.
    pub details: Arc<DetailRepository>,
}

impl AppState {
    /// Build the state and its repositories over one pool.
    pub fn new(config: AppConfig, db: DatabasePool) -> Self {
        let pool = db.pool().clone();
        Self {
            config: Arc::new(config),
            categories: Arc::new(CategoryRepository::new(pool.clone())),
            products: Arc::new(ProductRepository::new(pool.clone())),
            details: Arc::new(DetailRepository::new(pool)),
            db,
        }
    }
}
