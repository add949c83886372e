//! Error types for the Users service.
//!
//! Defines a unified error type that maps cleanly to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Unified error type for Users service operations.
#[derive(Debug, Error)]
pub enum UsersError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body for API clients.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl UsersError {
    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            UsersError::NotFound(_) => StatusCode::NOT_FOUND,
            UsersError::BadRequest(_) => StatusCode::BAD_REQUEST,
            UsersError::Database(_) | UsersError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for UsersError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message) = match self {
            UsersError::NotFound(msg) => ("NOT_FOUND", msg),
            UsersError::BadRequest(msg) => ("BAD_REQUEST", msg),
            UsersError::Database(e) => {
                // Log the actual error but don't expose internals
                tracing::error!(error = %e, "Database error");
                ("DATABASE_ERROR", "A database error occurred".to_string())
            }
            UsersError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                ("INTERNAL_ERROR", "An internal error occurred".to_string())
            }
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for Users service operations.
pub type UsersResult<T> = Result<T, UsersError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404() {
        let response = UsersError::NotFound("User 1 not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["code"], "NOT_FOUND");
        assert_eq!(body["error"], "User 1 not found");
    }

    #[tokio::test]
    async fn test_internal_error_hides_message() {
        let response = UsersError::Internal("pool exhausted".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["code"], "INTERNAL_ERROR");
        assert_eq!(body["error"], "An internal error occurred");
    }

    #[test]
    fn test_database_error_is_server_error() {
        let err = UsersError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
