//! Request DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use catalog_core::error::AppError;
use catalog_core::result::AppResult;
use catalog_entity::category::Category;
use catalog_entity::money::Money;
use catalog_entity::product::Product;

/// Create category request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    /// Category name.
    #[serde(rename = "CategoryName", alias = "categoryName")]
    pub category_name: String,
}

/// Update category request. The id selects the row to replace.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateCategoryRequest {
    /// Category ID.
    #[serde(rename = "CategoryID", alias = "categoryID", alias = "categoryId")]
    pub category_id: i64,
    /// New category name.
    #[serde(rename = "CategoryName", alias = "categoryName")]
    pub category_name: String,
}

/// Create product request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    /// Owning category.
    #[serde(rename = "CategoryID", alias = "categoryID", alias = "categoryId")]
    pub category_id: i64,
    /// Product name.
    #[serde(rename = "Name", alias = "name")]
    pub name: String,
    /// Optional description.
    #[serde(rename = "Description", alias = "description", default)]
    pub description: Option<String>,
    /// Unit price, at most two decimal places.
    #[serde(
        rename = "Price",
        alias = "price",
        with = "rust_decimal::serde::arbitrary_precision"
    )]
    #[schema(value_type = f64, example = 4.75)]
    pub price: Decimal,
    /// Units in stock.
    #[serde(rename = "Quantity", alias = "quantity")]
    pub quantity: i32,
}

/// Update product request. Every field is replaced.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    /// Product ID.
    #[serde(rename = "ProductID", alias = "productID", alias = "productId")]
    pub product_id: i64,
    /// Owning category.
    #[serde(rename = "CategoryID", alias = "categoryID", alias = "categoryId")]
    pub category_id: i64,
    /// Product name.
    #[serde(rename = "Name", alias = "name")]
    pub name: String,
    /// Optional description.
    #[serde(rename = "Description", alias = "description", default)]
    pub description: Option<String>,
    /// Unit price, at most two decimal places.
    #[serde(
        rename = "Price",
        alias = "price",
        with = "rust_decimal::serde::arbitrary_precision"
    )]
    #[schema(value_type = f64, example = 4.75)]
    pub price: Decimal,
    /// Units in stock.
    #[serde(rename = "Quantity", alias = "quantity")]
    pub quantity: i32,
}

/// Stock adjustment request, used for both decrement and cancel.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateStockRequest {
    /// Product ID.
    #[serde(rename = "ProductID", alias = "productID", alias = "productId")]
    pub product_id: i64,
    /// Units to take out of (or return to) stock.
    #[serde(rename = "Quantity", alias = "quantity")]
    pub quantity: i32,
}

fn to_money(price: Decimal) -> AppResult<Money> {
    Money::try_from(price).map_err(|e| AppError::validation(format!("Price: {e}")))
}

fn require_name(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}

impl CreateCategoryRequest {
    /// Check the request and build the category to insert.
    pub fn into_entity(self) -> AppResult<Category> {
        require_name("CategoryName", &self.category_name)?;
        Ok(Category::new(self.category_name))
    }
}

impl UpdateCategoryRequest {
    /// Check the request and build the replacement category.
    pub fn into_entity(self) -> AppResult<Category> {
        require_name("CategoryName", &self.category_name)?;
        Ok(Category {
            category_id: self.category_id,
            category_name: self.category_name,
        })
    }
}

impl CreateProductRequest {
    /// Check the request and build the product to insert.
    pub fn into_entity(self) -> AppResult<Product> {
        require_name("Name", &self.name)?;
        Ok(Product {
            product_id: 0,
            category_id: self.category_id,
            name: self.name,
            description: self.description,
            price: to_money(self.price)?,
            quantity: self.quantity,
        })
    }
}

impl UpdateProductRequest {
    /// Check the request and build the replacement product.
    pub fn into_entity(self) -> AppResult<Product> {
        require_name("Name", &self.name)?;
        Ok(Product {
            product_id: self.product_id,
            category_id: self.category_id,
            name: self.name,
            description: self.description,
            price: to_money(self.price)?,
            quantity: self.quantity,
        })
    }
}
