//! Product detail (product joined with category) handlers.

use axum::Json;
use axum::extract::State;

use catalog_entity::detail::Detail;

use super::non_empty;
use crate::dto::response::{ApiResponse, DATA_MESSAGE, DetailResponse};
use crate::error::{ApiErrorResponse, ApiResult};
use crate::extractors::ApiPath;
use crate::state::AppState;

type DetailList = Json<ApiResponse<Vec<DetailResponse>>>;

fn to_responses(details: Vec<Detail>) -> Vec<DetailResponse> {
    details.into_iter().map(DetailResponse::from).collect()
}

/// GET /api/detailsProduct/
#[utoipa::path(
    get,
    path = "/api/detailsProduct/",
    tag = "detail",
    responses(
        (status = 200, description = "Products joined with their category, ordered by product name", body = ApiResponse<Vec<DetailResponse>>),
        (status = 404, description = "No products exist", body = ApiErrorResponse)
    )
)]
pub async fn list_details(State(state): State<AppState>) -> ApiResult<DetailList> {
    let details = non_empty(state.details.find_all().await?, "No product details found")?;
    Ok(Json(ApiResponse::ok(DATA_MESSAGE, to_responses(details))))
}

/// GET /api/detailsProduct/search/{name}
#[utoipa::path(
    get,
    path = "/api/detailsProduct/search/{name}",
    tag = "detail",
    params(("name" = String, Path, description = "Substring of the product name")),
    responses(
        (status = 200, description = "Matching product details", body = ApiResponse<Vec<DetailResponse>>),
        (status = 404, description = "No product matches", body = ApiErrorResponse)
    )
)]
pub async fn search_details(
    State(state): State<AppState>,
    ApiPath(name): ApiPath<String>,
) -> ApiResult<DetailList> {
    let details = non_empty(
        state.details.find_by_name(&name).await?,
        format!("No product details match '{name}'"),
    )?;
    Ok(Json(ApiResponse::ok(DATA_MESSAGE, to_responses(details))))
}
