use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use catalog_core::error::CoreError;
use serde_json::json;

/// Message shown to clients in place of any internal failure detail.
const SANITIZED: &str = "An internal error occurred";

/// Error returned by catalog services and handlers.
///
/// Domain failures arrive as [`CoreError`], storage failures as raw
/// [`sqlx::Error`], and unreadable requests as `BadRequest`. All render as
/// `{ "error": ..., "code": ... }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection, "Rejected request body");
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(error = %rejection, "Rejected path parameters");
        AppError::BadRequest(rejection.body_text())
    }
}

/// Status, machine-readable code and client-facing message for one error.
struct Rendered {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl Rendered {
    fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", SANITIZED)
    }
}

impl AppError {
    fn render(&self) -> Rendered {
        match self {
            AppError::Core(core) => render_core(core),
            AppError::Database(err) => render_sqlx(err),
            AppError::BadRequest(msg) => Rendered::new(StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let Rendered {
            status,
            code,
            message,
        } = self.render();
        (status, axum::Json(json!({ "error": message, "code": code }))).into_response()
    }
}

/// `NotFound` uses the full display text ("Colour not found with ID: 3");
/// validation and conflict messages are shown as written.
fn render_core(core: &CoreError) -> Rendered {
    match core {
        CoreError::NotFound { .. } => {
            Rendered::new(StatusCode::NOT_FOUND, "NOT_FOUND", core.to_string())
        }
        CoreError::Validation(msg) => {
            Rendered::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg)
        }
        CoreError::Conflict(msg) => Rendered::new(StatusCode::CONFLICT, "CONFLICT", msg),
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            Rendered::internal()
        }
    }
}

/// Storage errors that reach the response layer unclassified.
///
/// Delete paths turn foreign key violations into kind-specific conflicts
/// before this point; any that slip through still answer 409.
fn render_sqlx(err: &sqlx::Error) -> Rendered {
    if matches!(err, sqlx::Error::RowNotFound) {
        return Rendered::new(StatusCode::NOT_FOUND, "NOT_FOUND", "Resource not found");
    }
    if catalog_db::is_foreign_key_violation(err) {
        return Rendered::new(
            StatusCode::CONFLICT,
            "CONFLICT",
            "The operation conflicts with records that reference it",
        );
    }
    tracing::error!(error = %err, "Database error");
    Rendered::internal()
}
