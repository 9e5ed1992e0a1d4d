//! # catalog-database
//!
//! SQLite connection management and concrete repository implementations
//! for the catalog entities.

pub mod connection;
pub mod error;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::{CategoryRepository, DetailRepository, ProductRepository};
