/**
 * Error Conversion
 *
 * Implements `IntoResponse` so handlers can return `Result<_, ApiError>`
 * directly. 500-class causes are logged here; the response body carries
 * only the fixed client-safe message.
 *
 * # Response Format
 *
 * ```json
 * { "message": "Invalid email or password" }
 * ```
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {}", self);
        } else {
            tracing::warn!("request rejected: {}", self);
        }

        let body = serde_json::json!({ "message": self.message() });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_error_response_body_is_generic() {
        let response = ApiError::Internal("pool exhausted".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Server error");
    }

    #[tokio::test]
    async fn test_validation_response_keeps_message() {
        let response =
            ApiError::Validation("Email and password are required".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Email and password are required");
    }
}
