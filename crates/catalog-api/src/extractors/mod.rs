//! Extractors whose rejections use the API error body.
//!
//! Axum's stock `Json` and `Path` reject malformed input with plain-text
//! bodies; these wrappers turn the same failures into `400` responses in
//! the [`ApiErrorResponse`](crate::error::ApiErrorResponse) shape.

pub mod json;
pub mod path;

pub use json::ApiJson;
pub use path::ApiPath;
