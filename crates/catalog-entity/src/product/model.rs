//! Product entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::money::Money;

/// A catalog product belonging to one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    /// Storage-assigned identifier. Ignored on insert.
    pub product_id: i64,
    /// Owning category.
    pub category_id: i64,
    /// Product name.
    pub name: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Unit price, stored as `price_cents`.
    #[sqlx(rename = "price_cents")]
    pub price: Money,
    /// Units in stock.
    pub quantity: i32,
}

impl Product {
    /// Whether `requested` units can be taken from stock.
    pub fn has_stock_for(&self, requested: i32) -> bool {
        requested <= self.quantity
    }
}
