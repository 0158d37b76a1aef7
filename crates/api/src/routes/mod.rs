pub mod colour;
pub mod health;
pub mod product;
pub mod product_type;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /colours                 list, create
/// /colours/{id}            update, delete
///
/// /product-types           list, create
/// /product-types/{id}      update, delete
///
/// /products                list, create
/// /products/{id}           get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/colours", colour::router())
        .nest("/product-types", product_type::router())
        .nest("/products", product::router())
}
