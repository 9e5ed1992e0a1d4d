//! # catalog-api
//!
//! HTTP API layer for the catalog built on Axum.
//!
//! Provides the category, product, and product-detail endpoints,
//! middleware (CORS, request logging), extractors, DTOs, the OpenAPI
//! document, and the single place where [`AppError`](catalog_core::AppError)
//! kinds become HTTP status codes.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
