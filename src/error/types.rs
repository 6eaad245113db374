/**
 * API Error Types
 *
 * This module defines the error taxonomy for the HTTP surface. Every
 * handler failure is one of these variants, and each variant has a fixed
 * HTTP status and a fixed client-safe message.
 *
 * # Error Categories
 *
 * - `Validation` - missing or malformed input, duplicate email (400)
 * - `Unauthorized` - missing bearer token (401)
 * - `InvalidToken` - malformed, unverifiable, or expired token (400)
 * - `Database` - store failure (500, generic message)
 * - `Completion` - upstream completion API failure (500, generic message)
 * - `Internal` - anything else that must not leak (500, generic message)
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::completion::CompletionError;
use crate::store::StoreError;

/// API error taxonomy.
///
/// Server-side causes are preserved for logging; clients only ever see the
/// strings produced by [`ApiError::message`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing/malformed input or duplicate email.
    #[error("{0}")]
    Validation(String),

    /// No bearer token on a protected route.
    #[error("Access Denied")]
    Unauthorized,

    /// Bearer token failed verification (malformed or expired).
    #[error("Invalid Token")]
    InvalidToken,

    /// Store failure.
    #[error("database error: {0}")]
    Database(StoreError),

    /// Completion API failure.
    #[error(transparent)]
    Completion(#[from] CompletionError),

    /// Anything else that must not leak detail to the client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::InvalidToken => StatusCode::BAD_REQUEST,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Completion(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. 500-class variants collapse to fixed strings;
    /// the underlying cause only goes to the log.
    pub fn message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Unauthorized => "Access Denied".to_string(),
            Self::InvalidToken => "Invalid Token".to_string(),
            Self::Database(_) | Self::Internal(_) => "Server error".to_string(),
            Self::Completion(_) => "Error interacting with the completion API".to_string(),
        }
    }
}

impl From<StoreError> for ApiError {
    /// Duplicate email is a client error; everything else from the store is
    /// a generic 500.
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => ApiError::Validation("Email already registered".to_string()),
            other => ApiError::Database(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::Validation("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::InvalidToken.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_duplicate_email_maps_to_validation() {
        let err: ApiError = StoreError::DuplicateEmail.into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Email already registered");
    }

    #[test]
    fn test_store_failure_is_generic_500() {
        let err: ApiError = StoreError::Database(sqlx::Error::RowNotFound).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Server error");
    }

    #[test]
    fn test_internal_detail_never_reaches_client() {
        let err = ApiError::Internal("secret connection string".into());
        assert!(!err.message().contains("secret"));
    }
}
