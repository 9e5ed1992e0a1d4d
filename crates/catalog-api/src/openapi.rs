//! OpenAPI document for the catalog API, served by Swagger UI.

use utoipa::OpenApi;

use crate::handlers;

/// Generated OpenAPI description of every `/api` route.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        description = "Categories, products, and product details"
    ),
    paths(
        handlers::category::list_categories,
        handlers::category::get_category,
        handlers::category::search_categories,
        handlers::category::create_category,
        handlers::category::update_category,
        handlers::category::delete_category,
        handlers::product::list_products,
        handlers::product::get_product,
        handlers::product::search_products,
        handlers::product::create_product,
        handlers::product::update_product,
        handlers::product::delete_product,
        handlers::product::update_stock,
        handlers::product::cancel_stock_update,
        handlers::detail::list_details,
        handlers::detail::search_details,
        handlers::health::health,
    ),
    tags(
        (name = "category", description = "Category CRUD and search"),
        (name = "product", description = "Product CRUD, search, and stock adjustment"),
        (name = "detail", description = "Products joined with their category"),
        (name = "health", description = "Liveness and database reachability"),
    )
)]
pub struct ApiDoc;
