//! Product/category join view.

pub mod model;

pub use model::Detail;
