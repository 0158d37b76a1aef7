//! Handlers for the `/product-types` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use catalog_core::types::DbId;
use catalog_db::models::product_type::{ProductType, ProductTypeInput};

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::response::DataResponse;
use crate::services::product_type as service;
use crate::state::AppState;

/// GET /api/v1/product-types
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ProductType>>>> {
    let product_types = service::list(&state.pool).await?;
    Ok(Json(DataResponse {
        data: product_types,
    }))
}

/// POST /api/v1/product-types
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<ProductTypeInput>,
) -> AppResult<(StatusCode, Json<DataResponse<ProductType>>)> {
    let product_type = service::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: product_type,
        }),
    ))
}

/// PUT /api/v1/product-types/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<ProductTypeInput>,
) -> AppResult<Json<DataResponse<ProductType>>> {
    let product_type = service::update(&state.pool, id, &input).await?;
    Ok(Json(DataResponse { data: product_type }))
}

/// DELETE /api/v1/product-types/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    service::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
