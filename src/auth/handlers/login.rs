/**
 * Login Handler
 *
 * Implements POST /api/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Generate JWT token (1-hour expiry)
 *
 * # Security
 *
 * - Unknown email and wrong password return the same generic message, so
 *   the response does not reveal which field was wrong
 * - Passwords are never logged or returned in responses
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::auth::sessions::create_token;
use crate::error::ApiError;
use crate::store::{ChatStore, SqliteStore};

/// One message for both bad-credential causes.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - missing fields, unknown email, or wrong password
/// * `500 Internal Server Error` - store or token generation failure
pub async fn login(
    State(store): State<SqliteStore>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    if request.email.is_empty() || request.password.is_empty() {
        return Err(ApiError::Validation(
            "Email and password are required".to_string(),
        ));
    }

    tracing::info!("Login request for: {}", request.email);

    let user = store
        .find_user_by_email(&request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", request.email);
            ApiError::Validation(INVALID_CREDENTIALS.to_string())
        })?;

    let valid = bcrypt::verify(&request.password, &user.password_hash)
        .map_err(|e| ApiError::Internal(format!("password verification error: {e}")))?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", request.email);
        return Err(ApiError::Validation(INVALID_CREDENTIALS.to_string()));
    }

    let token = create_token(user.id)
        .map_err(|e| ApiError::Internal(format!("failed to create token: {e}")))?;

    tracing::info!("User logged in successfully: {}", user.email);

    Ok(Json(LoginResponse {
        token,
        message: "Login successful!".to_string(),
    }))
}
