//! Product repository.
//!
//! Besides the shared CRUD contract, products carry stock adjustment:
//!
//! - [`update_stock`](SqlRepository::update_stock) takes units out of
//!   stock. The decrement is guarded in the same statement, so stock never
//!   drops below zero; an oversized request fails with `Conflict`.
//! - [`cancel_stock_update`](SqlRepository::cancel_stock_update) puts units
//!   back, compensating an earlier decrement. The increment is guarded the
//!   same way, so stock never exceeds `i32::MAX`.

use tracing::{debug, info};

use catalog_core::error::AppError;
use catalog_core::result::AppResult;
use catalog_core::traits::Repository;
use catalog_entity::product::Product;

use super::crud::{Record, RecordQuery, SqlRepository};
use crate::error::map_sqlx_error;

/// Repository for product CRUD and stock operations.
pub type ProductRepository = SqlRepository<Product>;

impl Record for Product {
    const ENTITY: &'static str = "Product";
    const TABLE: &'static str = "products";
    const ID_COLUMN: &'static str = "product_id";
    const NAME_COLUMN: &'static str = "name";
    const COLUMNS: &'static [&'static str] =
        &["category_id", "name", "description", "price_cents", "quantity"];

    fn id(&self) -> i64 {
        self.product_id
    }

    fn bind_fields<'q>(&'q self, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        query
            .bind(self.category_id)
            .bind(&self.name)
            .bind(&self.description)
            .bind(self.price)
            .bind(self.quantity)
    }
}

impl SqlRepository<Product> {
    /// Take `quantity` units out of stock and return the updated product.
    pub async fn update_stock(&self, id: i64, quantity: i32) -> AppResult<Product> {
        ensure_positive(quantity)?;
        debug!(id, quantity, "Decrementing product stock");

        let updated = sqlx::query_as::<_, Product>(
            "UPDATE products SET quantity = quantity - ?1 \
             WHERE product_id = ?2 AND quantity >= ?1 RETURNING *",
        )
        .bind(quantity)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to update product stock", e))?;

        if let Some(product) = updated {
            info!(id, quantity, remaining = product.quantity, "Product stock decremented");
            return Ok(product);
        }

        // The guard rejected the row: tell a missing product apart from a
        // short one.
        match self.find_by_id(&id).await? {
            None => Err(Self::not_found(id)),
            Some(product) if !product.has_stock_for(quantity) => Err(AppError::conflict(format!(
                "Insufficient stock for product {id}: requested {quantity}, available {}",
                product.quantity
            ))),
            Some(_) => Err(AppError::conflict(format!(
                "Stock for product {id} changed concurrently, retry the request"
            ))),
        }
    }

    /// Return `quantity` units to stock and return the updated product.
    pub async fn cancel_stock_update(&self, id: i64, quantity: i32) -> AppResult<Product> {
        ensure_positive(quantity)?;
        debug!(id, quantity, "Restoring product stock");

        let restored = sqlx::query_as::<_, Product>(
            "UPDATE products SET quantity = quantity + ?1 \
             WHERE product_id = ?2 AND quantity <= ?3 - ?1 RETURNING *",
        )
        .bind(quantity)
        .bind(id)
        .bind(i32::MAX)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to restore product stock", e))?;

        if let Some(product) = restored {
            info!(id, quantity, remaining = product.quantity, "Product stock restored");
            return Ok(product);
        }

        match self.find_by_id(&id).await? {
            None => Err(Self::not_found(id)),
            Some(product) => Err(AppError::conflict(format!(
                "Restoring {quantity} units to product {id} would exceed the stock limit, current stock {}",
                product.quantity
            ))),
        }
    }
}

fn ensure_positive(quantity: i32) -> AppResult<()> {
    if quantity <= 0 {
        return Err(AppError::validation(format!(
            "Quantity must be greater than zero, got {quantity}"
        )));
    }
    Ok(())
}
