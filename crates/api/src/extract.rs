//! Request extractors whose rejections render as [`AppError`].
//!
//! axum's own `Json` and `Path` reject with plain-text bodies; these wrappers
//! route the same failures through the `{ "error", "code" }` envelope.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body. A malformed or mistyped body is a `BAD_REQUEST`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameters. A segment that does not parse (e.g. a non-numeric id)
/// is a `BAD_REQUEST`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
