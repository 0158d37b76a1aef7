//! Route definitions for the `/product-types` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::product_type;
use crate::state::AppState;

/// Routes mounted at `/product-types`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(product_type::list).post(product_type::create))
        .route("/{id}", put(product_type::update).delete(product_type::delete))
}
