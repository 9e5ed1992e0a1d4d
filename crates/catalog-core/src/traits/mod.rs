//! Core traits defined in `catalog-core` and implemented by other crates.

pub mod repository;

pub use repository::Repository;
