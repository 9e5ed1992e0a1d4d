//! Category handlers.

use axum::Json;
use axum::extract::State;
use axum::response::Response;
use tracing::info;

use catalog_core::traits::Repository;
use catalog_database::repositories::CategoryRepository;
use catalog_entity::category::Category;

use super::{created, non_empty};
use crate::dto::request::{CreateCategoryRequest, UpdateCategoryRequest};
use crate::dto::response::{
    ApiResponse, CategoryResponse, DATA_MESSAGE, DELETE_MESSAGE, MessageResponse, UPDATE_MESSAGE,
};
use crate::error::{ApiErrorResponse, ApiResult};
use crate::extractors::{ApiJson, ApiPath};
use crate::state::AppState;

type CategoryList = Json<ApiResponse<Vec<CategoryResponse>>>;

fn to_responses(categories: Vec<Category>) -> Vec<CategoryResponse> {
    categories.into_iter().map(CategoryResponse::from).collect()
}

/// GET /api/category
#[utoipa::path(
    get,
    path = "/api/category",
    tag = "category",
    responses(
        (status = 200, description = "All categories ordered by name", body = ApiResponse<Vec<CategoryResponse>>),
        (status = 404, description = "No categories exist", body = ApiErrorResponse)
    )
)]
pub async fn list_categories(State(state): State<AppState>) -> ApiResult<CategoryList> {
    let categories = non_empty(state.categories.find_all().await?, "No categories found")?;
    Ok(Json(ApiResponse::ok(DATA_MESSAGE, to_responses(categories))))
}

/// GET /api/categoryById/{id}
#[utoipa::path(
    get,
    path = "/api/categoryById/{id}",
    tag = "category",
    params(("id" = i64, Path, description = "Category ID")),
    responses(
        (status = 200, description = "The category", body = ApiResponse<CategoryResponse>),
        (status = 400, description = "Malformed id", body = ApiErrorResponse),
        (status = 404, description = "Category not found", body = ApiErrorResponse)
    )
)]
pub async fn get_category(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<ApiResponse<CategoryResponse>>> {
    let category = state
        .categories
        .find_by_id(&id)
        .await?
        .ok_or_else(|| CategoryRepository::not_found(id))?;
    Ok(Json(ApiResponse::ok(DATA_MESSAGE, category.into())))
}

/// GET /api/category/search/{name}
#[utoipa::path(
    get,
    path = "/api/category/search/{name}",
    tag = "category",
    params(("name" = String, Path, description = "Substring of the category name")),
    responses(
        (status = 200, description = "Matching categories", body = ApiResponse<Vec<CategoryResponse>>),
        (status = 404, description = "No category matches", body = ApiErrorResponse)
    )
)]
pub async fn search_categories(
    State(state): State<AppState>,
    ApiPath(name): ApiPath<String>,
) -> ApiResult<CategoryList> {
    let categories = non_empty(
        state.categories.find_by_name(&name).await?,
        format!("No categories match '{name}'"),
    )?;
    Ok(Json(ApiResponse::ok(DATA_MESSAGE, to_responses(categories))))
}

/// POST /api/category
#[utoipa::path(
    post,
    path = "/api/category",
    tag = "category",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = CategoryResponse),
        (status = 400, description = "Invalid request body", body = ApiErrorResponse)
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateCategoryRequest>,
) -> ApiResult<Response> {
    let category = state.categories.create(&req.into_entity()?).await?;
    info!(category_id = category.category_id, "Category created");

    Ok(created(
        format!("/api/categoryById/{}", category.category_id),
        CategoryResponse::from(category),
    ))
}

/// PUT /api/category
#[utoipa::path(
    put,
    path = "/api/category",
    tag = "category",
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category replaced", body = ApiResponse<CategoryResponse>),
        (status = 400, description = "Invalid request body", body = ApiErrorResponse),
        (status = 404, description = "Category not found", body = ApiErrorResponse)
    )
)]
pub async fn update_category(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<UpdateCategoryRequest>,
) -> ApiResult<Json<ApiResponse<CategoryResponse>>> {
    let category = state.categories.update(&req.into_entity()?).await?;
    info!(category_id = category.category_id, "Category updated");
    Ok(Json(ApiResponse::ok(UPDATE_MESSAGE, category.into())))
}

/// DELETE /api/category/{id}
#[utoipa::path(
    delete,
    path = "/api/category/{id}",
    tag = "category",
    params(("id" = i64, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category deleted", body = MessageResponse),
        (status = 404, description = "Category not found", body = ApiErrorResponse),
        (status = 409, description = "Products still reference the category", body = ApiErrorResponse)
    )
)]
pub async fn delete_category(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<MessageResponse>> {
    state.categories.delete(&id).await?;
    info!(category_id = id, "Category deleted");
    Ok(Json(MessageResponse::ok(DELETE_MESSAGE)))
}
