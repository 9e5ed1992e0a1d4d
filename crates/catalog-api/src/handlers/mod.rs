//! HTTP route handlers.

pub mod category;
pub mod detail;
pub mod health;
pub mod product;

use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use catalog_core::error::AppError;
use catalog_core::result::AppResult;

use crate::error::ApiError;

/// Lists and searches answer `404` rather than an empty collection.
pub(crate) fn non_empty<T>(items: Vec<T>, message: impl Into<String>) -> AppResult<Vec<T>> {
    if items.is_empty() {
        return Err(AppError::not_found(message));
    }
    Ok(items)
}

/// `201 Created` with a `Location` header and the created entity as body.
pub(crate) fn created<T: Serialize>(location: String, body: T) -> Response {
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(body),
    )
        .into_response()
}

/// Fallback for unmatched routes.
pub async fn route_not_found() -> ApiError {
    AppError::not_found("Route not found").into()
}
