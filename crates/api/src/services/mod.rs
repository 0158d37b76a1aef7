//! Catalog service layer.
//!
//! Each operation validates its input with `catalog_core::catalog`, resolves
//! references through [`integrity`], and performs its writes inside a single
//! transaction. Handlers stay thin: extract, call a service, wrap the result.

use catalog_core::error::CoreError;

use crate::error::AppError;

pub mod colour;
pub mod integrity;
pub mod product;
pub mod product_type;

/// Log a rejected operation and lift the domain error into an [`AppError`].
pub(crate) fn rejected(operation: &'static str, err: CoreError) -> AppError {
    tracing::error!(operation, error = %err, "Catalog operation rejected");
    AppError::Core(err)
}
