//! Success envelope for catalog responses.
//!
//! Every 200/201 body is `{ "data": ... }`; errors use the envelope in
//! [`crate::error`] instead.

use serde::Serialize;

/// `{ "data": T }`, where `T` is a record, a `ProductDetail`, or a list of
/// `ProductSummary` rows.
///
/// ```ignore
/// Ok((StatusCode::CREATED, Json(DataResponse { data: product_detail })))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
