//! HTTP error mapping.
//!
//! Validation and ownership failures carry user-safe detail; persistence
//! failures are logged with the full cause and surfaced only as an opaque
//! 500 body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use folio_core::errors::{DatabaseError, Error};

pub type ApiResult<T> = std::result::Result<T, ApiError>;

pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            Error::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            Error::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            Error::Forbidden(_) => (StatusCode::FORBIDDEN, "Forbidden".to_string()),
            Error::Database(DatabaseError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "Not found".to_string())
            }
            other => {
                tracing::error!("Request failed: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
