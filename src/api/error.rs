//! Unified API error handling.
//!
//! Every failure leaves the boundary as the same JSON envelope
//! `{"error": "<message>"}`; only the status code varies by class.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::AuthError;

/// The error response envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad credentials. One message for every cause.
    #[error("Incorrect username or password")]
    Authentication,
    #[error("{0}")]
    NotFound(String),
    /// Persistence failure. Fatal to the current request, never retried.
    #[error("A database error occurred")]
    Database(#[source] sqlx::Error),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Authentication => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {}", err);
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("Resource not found".to_string()),
            other => ApiError::Database(other),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => ApiError::Authentication,
            AuthError::Store(e) => e.into(),
            AuthError::Token(e) => {
                tracing::error!("Token signing error: {}", e);
                ApiError::Internal("Failed to issue session token".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_by_class() {
        assert_eq!(ApiError::Authentication.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Database(sqlx::Error::PoolClosed).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn envelope_has_single_error_field() {
        let body = serde_json::to_value(ErrorResponse {
            error: "Incorrect username or password".to_string(),
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"error": "Incorrect username or password"})
        );
    }

    #[test]
    fn auth_error_collapses_to_fixed_message() {
        let err: ApiError = AuthError::InvalidCredentials.into();
        assert_eq!(err.to_string(), "Incorrect username or password");
    }
}
