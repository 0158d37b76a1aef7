//! Request handlers for the catalog resources.
//!
//! Each submodule provides async handler functions (list, create, update,
//! delete, and for products get_by_id) for a single resource. Handlers
//! delegate to the matching module in [`crate::services`] and wrap results in
//! the [`DataResponse`](crate::response::DataResponse) envelope.

pub mod colour;
pub mod product;
pub mod product_type;
