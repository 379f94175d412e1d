//! Common error types and handling for Crowdfund

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::response::{ApiResponse, ErrorPayload};

/// Common result type
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Crowdfund services
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Conflict(_) => StatusCode::CONFLICT,
            Error::Database(_) | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::Database(_) => "DATABASE_ERROR",
            Error::Validation(_) => "VALIDATION_ERROR",
            Error::NotFound(_) => "NOT_FOUND",
            Error::Conflict(_) => "CONFLICT",
            Error::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert into the error envelope returned to clients.
    ///
    /// Server-side failures are logged here and reported without their
    /// underlying detail.
    pub fn to_envelope(&self) -> ApiResponse<ErrorPayload> {
        let code = self.error_code().to_string();

        if self.status_code() == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, code = %code, "Internal server error");
            return ApiResponse::error(
                "Internal server error",
                ErrorPayload {
                    code,
                    errors: Vec::new(),
                },
            );
        }

        ApiResponse::error(
            self.to_string(),
            ErrorPayload {
                code,
                errors: vec![self.to_string()],
            },
        )
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(self.to_envelope())).into_response()
    }
}
