//! Error handling middleware - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use postboard_core::error::DomainError;
use postboard_shared::ErrorResponse;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Not logged in")]
    Unauthorized,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Domain(err) => match err {
                DomainError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
                DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
                DomainError::AuthFailed(_) => StatusCode::UNAUTHORIZED,
                DomainError::Conflict(_) => StatusCode::CONFLICT,
                DomainError::Unavailable(_) => StatusCode::BAD_GATEWAY,
                DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error = match self {
            AppError::Unauthorized => ErrorResponse::unauthorized(),
            AppError::Domain(err) => {
                if status.is_server_error() {
                    tracing::error!(error = %err, "Request failed");
                }
                ErrorResponse::new(
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Error"),
                )
                .with_detail(err.user_message())
            }
        };

        HttpResponse::build(status).json(error)
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
