//! # catalog-entity
//!
//! Domain entity models for the catalog API. Every struct in this crate
//! represents a database row. All entities derive `Debug`, `Clone`,
//! `Serialize`, `Deserialize`, and `sqlx::FromRow`.

pub mod category;
pub mod detail;
pub mod money;
pub mod product;

pub use category::Category;
pub use detail::Detail;
pub use money::{Money, MoneyError};
pub use product::Product;
