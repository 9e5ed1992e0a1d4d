//! Route definitions for the catalog HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! Swagger UI is served at `/swagger-ui` with the document at `/api-docs/openapi.json`.
//! The router receives `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, put},
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::middleware;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(category_routes())
        .merge(product_routes())
        .merge(detail_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(handlers::route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Category CRUD and search
fn category_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/category",
            get(handlers::category::list_categories)
                .post(handlers::category::create_category)
                .put(handlers::category::update_category),
        )
        .route("/categoryById/{id}", get(handlers::category::get_category))
        .route(
            "/category/search/{name}",
            get(handlers::category::search_categories),
        )
        .route("/category/{id}", delete(handlers::category::delete_category))
}

/// Product CRUD, search, and stock adjustment
fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/product",
            get(handlers::product::list_products)
                .post(handlers::product::create_product)
                .put(handlers::product::update_product),
        )
        .route("/productById/{id}", get(handlers::product::get_product))
        .route(
            "/product/search/{name}",
            get(handlers::product::search_products),
        )
        .route("/product/{id}", delete(handlers::product::delete_product))
        .route("/products/updatestock", put(handlers::product::update_stock))
        .route(
            "/products/updatestockcancel",
            put(handlers::product::cancel_stock_update),
        )
}

/// Product/category join
fn detail_routes() -> Router<AppState> {
    Router::new()
        .route("/detailsProduct", get(handlers::detail::list_details))
        .route("/detailsProduct/", get(handlers::detail::list_details))
        .route(
            "/detailsProduct/search/{name}",
            get(handlers::detail::search_details),
        )
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
