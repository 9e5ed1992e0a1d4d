//! Product handlers, including stock adjustment.

use axum::Json;
use axum::extract::State;
use axum::response::Response;
use tracing::info;

use catalog_core::traits::Repository;
use catalog_database::repositories::ProductRepository;
use catalog_entity::product::Product;

use super::{created, non_empty};
use crate::dto::request::{CreateProductRequest, UpdateProductRequest, UpdateStockRequest};
use crate::dto::response::{
    ApiResponse, DATA_MESSAGE, DELETE_MESSAGE, MessageResponse, ProductResponse, UPDATE_MESSAGE,
};
use crate::error::{ApiErrorResponse, ApiResult};
use crate::extractors::{ApiJson, ApiPath};
use crate::state::AppState;

type ProductList = Json<ApiResponse<Vec<ProductResponse>>>;
type ProductBody = Json<ApiResponse<ProductResponse>>;

fn to_responses(products: Vec<Product>) -> Vec<ProductResponse> {
    products.into_iter().map(ProductResponse::from).collect()
}

/// GET /api/product
#[utoipa::path(
    get,
    path = "/api/product",
    tag = "product",
    responses(
        (status = 200, description = "All products ordered by name", body = ApiResponse<Vec<ProductResponse>>),
        (status = 404, description = "No products exist", body = ApiErrorResponse)
    )
)]
pub async fn list_products(State(state): State<AppState>) -> ApiResult<ProductList> {
    let products = non_empty(state.products.find_all().await?, "No products found")?;
    Ok(Json(ApiResponse::ok(DATA_MESSAGE, to_responses(products))))
}

/// GET /api/productById/{id}
#[utoipa::path(
    get,
    path = "/api/productById/{id}",
    tag = "product",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "The product", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Malformed id", body = ApiErrorResponse),
        (status = 404, description = "Product not found", body = ApiErrorResponse)
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<ProductBody> {
    let product = state
        .products
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ProductRepository::not_found(id))?;
    Ok(Json(ApiResponse::ok(DATA_MESSAGE, product.into())))
}

/// GET /api/product/search/{name}
#[utoipa::path(
    get,
    path = "/api/product/search/{name}",
    tag = "product",
    params(("name" = String, Path, description = "Substring of the product name")),
    responses(
        (status = 200, description = "Matching products", body = ApiResponse<Vec<ProductResponse>>),
        (status = 404, description = "No product matches", body = ApiErrorResponse)
    )
)]
pub async fn search_products(
    State(state): State<AppState>,
    ApiPath(name): ApiPath<String>,
) -> ApiResult<ProductList> {
    let products = non_empty(
        state.products.find_by_name(&name).await?,
        format!("No products match '{name}'"),
    )?;
    Ok(Json(ApiResponse::ok(DATA_MESSAGE, to_responses(products))))
}

/// POST /api/product
#[utoipa::path(
    post,
    path = "/api/product",
    tag = "product",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Invalid request body", body = ApiErrorResponse),
        (status = 409, description = "Unknown category", body = ApiErrorResponse)
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateProductRequest>,
) -> ApiResult<Response> {
    let product = state.products.create(&req.into_entity()?).await?;
    info!(
        product_id = product.product_id,
        category_id = product.category_id,
        "Product created"
    );

    Ok(created(
        format!("/api/productById/{}", product.product_id),
        ProductResponse::from(product),
    ))
}

/// PUT /api/product
#[utoipa::path(
    put,
    path = "/api/product",
    tag = "product",
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product replaced", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Invalid request body", body = ApiErrorResponse),
        (status = 404, description = "Product not found", body = ApiErrorResponse),
        (status = 409, description = "Unknown category", body = ApiErrorResponse)
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<UpdateProductRequest>,
) -> ApiResult<ProductBody> {
    let product = state.products.update(&req.into_entity()?).await?;
    info!(product_id = product.product_id, "Product updated");
    Ok(Json(ApiResponse::ok(UPDATE_MESSAGE, product.into())))
}

/// DELETE /api/product/{id}
#[utoipa::path(
    delete,
    path = "/api/product/{id}",
    tag = "product",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 404, description = "Product not found", body = ApiErrorResponse)
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<MessageResponse>> {
    state.products.delete(&id).await?;
    info!(product_id = id, "Product deleted");
    Ok(Json(MessageResponse::ok(DELETE_MESSAGE)))
}

/// PUT /api/products/updatestock
#[utoipa::path(
    put,
    path = "/api/products/updatestock",
    tag = "product",
    request_body = UpdateStockRequest,
    responses(
        (status = 200, description = "Stock decremented", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Quantity not positive", body = ApiErrorResponse),
        (status = 404, description = "Product not found", body = ApiErrorResponse),
        (status = 409, description = "Insufficient stock", body = ApiErrorResponse)
    )
)]
pub async fn update_stock(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<UpdateStockRequest>,
) -> ApiResult<ProductBody> {
    let product = state
        .products
        .update_stock(req.product_id, req.quantity)
        .await?;
    Ok(Json(ApiResponse::ok(
        "Product stock updated successfully",
        product.into(),
    )))
}

/// PUT /api/products/updatestockcancel
#[utoipa::path(
    put,
    path = "/api/products/updatestockcancel",
    tag = "product",
    request_body = UpdateStockRequest,
    responses(
        (status = 200, description = "Stock restored", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Quantity not positive", body = ApiErrorResponse),
        (status = 404, description = "Product not found", body = ApiErrorResponse),
        (status = 409, description = "Stock limit exceeded", body = ApiErrorResponse)
    )
)]
pub async fn cancel_stock_update(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<UpdateStockRequest>,
) -> ApiResult<ProductBody> {
    let product = state
        .products
        .cancel_stock_update(req.product_id, req.quantity)
        .await?;
    Ok(Json(ApiResponse::ok(
        "Product stock update cancelled successfully",
        product.into(),
    )))
}
