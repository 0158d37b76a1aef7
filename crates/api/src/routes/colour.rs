//! Route definitions for the `/colours` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::colour;
use crate::state::AppState;

/// Routes mounted at `/colours`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(colour::list).post(colour::create))
        .route("/{id}", put(colour::update).delete(colour::delete))
}
