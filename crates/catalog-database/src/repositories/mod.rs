//! Repository implementations for the catalog entities.

pub mod category;
pub mod crud;
pub mod detail;
pub mod product;

pub use category::CategoryRepository;
pub use crud::{Record, SqlRepository};
pub use detail::DetailRepository;
pub use product::ProductRepository;
