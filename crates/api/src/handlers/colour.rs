//! Handlers for the `/colours` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use catalog_core::types::DbId;
use catalog_db::models::colour::{Colour, ColourInput};

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::response::DataResponse;
use crate::services::colour as service;
use crate::state::AppState;

/// GET /api/v1/colours
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Colour>>>> {
    let colours = service::list(&state.pool).await?;
    Ok(Json(DataResponse { data: colours }))
}

/// POST /api/v1/colours
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<ColourInput>,
) -> AppResult<(StatusCode, Json<DataResponse<Colour>>)> {
    let colour = service::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: colour })))
}

/// PUT /api/v1/colours/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<ColourInput>,
) -> AppResult<Json<DataResponse<Colour>>> {
    let colour = service::update(&state.pool, id, &input).await?;
    Ok(Json(DataResponse { data: colour }))
}

/// DELETE /api/v1/colours/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    service::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
