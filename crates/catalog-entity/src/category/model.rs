//! Category entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Category {
    /// Storage-assigned identifier. Ignored on insert.
    pub category_id: i64,
    /// Display name.
    pub category_name: String,
}

impl Category {
    /// Build a category that has not been persisted yet.
    pub fn new(category_name: impl Into<String>) -> Self {
        Self {
            category_id: 0,
            category_name: category_name.into(),
        }
    }
}
