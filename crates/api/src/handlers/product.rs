//! Handlers for the `/products` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use catalog_core::types::DbId;
use catalog_db::models::product::{ProductDetail, ProductInput, ProductSummary};

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::response::DataResponse;
use crate::services::product as service;
use crate::state::AppState;

/// GET /api/v1/products
///
/// Returns the flattened list projection: type name and colour names only.
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ProductSummary>>>> {
    let products = service::list(&state.pool).await?;
    Ok(Json(DataResponse { data: products }))
}

/// POST /api/v1/products
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<ProductInput>,
) -> AppResult<(StatusCode, Json<DataResponse<ProductDetail>>)> {
    let product = service::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: product })))
}

/// GET /api/v1/products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<ProductDetail>>> {
    let product = service::get(&state.pool, id).await?;
    Ok(Json(DataResponse { data: product }))
}

/// PUT /api/v1/products/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<ProductInput>,
) -> AppResult<Json<DataResponse<ProductDetail>>> {
    let product = service::update(&state.pool, id, &input).await?;
    Ok(Json(DataResponse { data: product }))
}

/// DELETE /api/v1/products/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    service::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
