//! Detail (product joined with category) read model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::money::Money;

/// A product row denormalized with its category name.
///
/// Computed per query from an inner join; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Detail {
    /// Category identifier.
    pub category_id: i64,
    /// Product identifier.
    pub product_id: i64,
    /// Product name.
    pub name: String,
    /// Product description.
    pub description: Option<String>,
    /// Unit price, stored as `price_cents`.
    #[sqlx(rename = "price_cents")]
    pub price: Money,
    /// Units in stock.
    pub quantity: i32,
    /// Name of the owning category.
    pub category_name: String,
}
