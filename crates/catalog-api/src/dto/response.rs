//! Response DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use catalog_entity::category::Category;
use catalog_entity::detail::Detail;
use catalog_entity::product::Product;

/// Message sent with successful reads.
pub const DATA_MESSAGE: &str = "request data successful";
/// Message sent with successful updates.
pub const UPDATE_MESSAGE: &str = "request update successful";
/// Message sent with successful deletes.
pub const DELETE_MESSAGE: &str = "request delete successful";

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Whether the request was successful.
    pub success: bool,
    /// Human-readable outcome.
    pub message: String,
    /// Response data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response carrying `data`.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }
}

/// Success response without data, sent for deletes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Always `true`.
    pub success: bool,
    /// Human-readable outcome.
    pub message: String,
}

impl MessageResponse {
    /// Creates a successful response.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Category as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    /// Category ID.
    #[serde(rename = "CategoryID")]
    pub category_id: i64,
    /// Category name.
    #[serde(rename = "CategoryName")]
    pub category_name: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            category_id: category.category_id,
            category_name: category.category_name,
        }
    }
}

/// Product as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    /// Product ID.
    #[serde(rename = "ProductID")]
    pub product_id: i64,
    /// Owning category.
    #[serde(rename = "CategoryID")]
    pub category_id: i64,
    /// Product name.
    #[serde(rename = "Name")]
    pub name: String,
    /// Description, `null` when unset.
    #[serde(rename = "Description")]
    pub description: Option<String>,
    /// Unit price.
    #[serde(rename = "Price", with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64, example = 4.75)]
    pub price: Decimal,
    /// Units in stock.
    #[serde(rename = "Quantity")]
    pub quantity: i32,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            product_id: product.product_id,
            category_id: product.category_id,
            name: product.name,
            description: product.description,
            price: product.price.to_decimal(),
            quantity: product.quantity,
        }
    }
}

/// Product joined with its category name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DetailResponse {
    /// Category ID.
    #[serde(rename = "CategoryID")]
    pub category_id: i64,
    /// Product ID.
    #[serde(rename = "ProductID")]
    pub product_id: i64,
    /// Product name.
    #[serde(rename = "Name")]
    pub name: String,
    /// Product description.
    #[serde(rename = "Description")]
    pub description: Option<String>,
    /// Unit price.
    #[serde(rename = "Price", with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64, example = 4.75)]
    pub price: Decimal,
    /// Units in stock.
    #[serde(rename = "Quantity")]
    pub quantity: i32,
    /// Name of the owning category.
    #[serde(rename = "CategoryName")]
    pub category_name: String,
}

impl From<Detail> for DetailResponse {
    fn from(detail: Detail) -> Self {
        Self {
            category_id: detail.category_id,
            product_id: detail.product_id,
            name: detail.name,
            description: detail.description,
            price: detail.price.to_decimal(),
            quantity: detail.quantity,
            category_name: detail.category_name,
        }
    }
}

/// Health check payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Database connectivity.
    pub database: String,
}
