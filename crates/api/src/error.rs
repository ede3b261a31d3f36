use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use kino_core::error::FilmError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`FilmError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `kino-core`.
    #[error(transparent)]
    Film(#[from] FilmError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Field-validation failures carry per-field messages and get
        // their own body shape.
        if let AppError::Film(FilmError::Validation(messages)) = &self {
            let body = json!({
                "error": "Validation failed",
                "code": "VALIDATION_ERROR",
                "messages": messages,
            });
            return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(body)).into_response();
        }

        let (status, code, message) = match &self {
            // --- FilmError variants ---
            AppError::Film(film) => match film {
                FilmError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
                FilmError::ImdbExists(imdb) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "IMDB_EXISTS",
                    format!("A film with the IMDb number {imdb} already exists"),
                ),
                FilmError::VersionInvalid(token) => (
                    StatusCode::PRECONDITION_FAILED,
                    "VERSION_INVALID",
                    format!("Invalid version token: {token}"),
                ),
                FilmError::VersionOutdated(version) => (
                    StatusCode::PRECONDITION_FAILED,
                    "VERSION_OUTDATED",
                    format!("Version {version} is outdated"),
                ),
                FilmError::VersionMissing => (
                    StatusCode::PRECONDITION_REQUIRED,
                    "VERSION_MISSING",
                    "Header \"If-Match\" is missing".to_string(),
                ),
                // Handled above.
                FilmError::Validation(_) => unreachable!(),
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`)
///   map to 409. The create path checks IMDb uniqueness up front, so this
///   only fires when two creates race on the same number.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
