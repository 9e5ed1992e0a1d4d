//! Read-only product/category join.

use sqlx::SqlitePool;
use tracing::debug;

use catalog_core::result::AppResult;
use catalog_entity::detail::Detail;

use super::crud::contains_pattern;
use crate::error::map_sqlx_error;

const SELECT_DETAILS: &str = "SELECT c.category_id, p.product_id, p.name, p.description, \
     p.price_cents, p.quantity, c.category_name \
     FROM products p \
     INNER JOIN categories c ON c.category_id = p.category_id";

/// Repository for the denormalized product detail view.
///
/// Inner-join semantics: a product whose category row is missing never
/// appears in any result. Empty results are returned as empty vectors.
#[derive(Debug, Clone)]
pub struct DetailRepository {
    pool: SqlitePool,
}

impl DetailRepository {
    /// Create a new detail repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All products joined with their category, ordered by product name.
    pub async fn find_all(&self) -> AppResult<Vec<Detail>> {
        debug!("Listing product details");
        sqlx::query_as::<_, Detail>(&format!("{SELECT_DETAILS} ORDER BY p.name"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to list product details", e))
    }

    /// Joined rows whose product name contains `fragment`.
    pub async fn find_by_name(&self, fragment: &str) -> AppResult<Vec<Detail>> {
        debug!(fragment, "Searching product details by name");
        sqlx::query_as::<_, Detail>(&format!(
            "{SELECT_DETAILS} WHERE p.name LIKE ? ESCAPE '\\' ORDER BY p.name"
        ))
        .bind(contains_pattern(fragment))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to search product details", e))
    }
}
