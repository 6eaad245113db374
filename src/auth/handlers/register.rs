/**
 * Registration Handler
 *
 * Implements POST /api/users.
 *
 * # Registration Process
 *
 * 1. Validate that name, email and password are present
 * 2. Hash the password with bcrypt
 * 3. Create the user (the store enforces email uniqueness)
 * 4. Return the created record, sanitized
 *
 * # Security
 *
 * - Passwords are hashed before they reach the store; plaintext is never
 *   persisted or logged
 * - Responses never contain the password hash
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::auth::handlers::types::{RegisterRequest, UserResponse};
use crate::error::ApiError;
use crate::store::{ChatStore, SqliteStore};

/// Fixed bcrypt cost factor for stored credentials.
const BCRYPT_COST: u32 = 10;

/// Registration handler
///
/// # Errors
///
/// * `400 Bad Request` - missing field or already-registered email
/// * `500 Internal Server Error` - hashing or store failure
pub async fn register(
    State(store): State<SqliteStore>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    if request.name.is_empty() || request.email.is_empty() || request.password.is_empty() {
        return Err(ApiError::Validation(
            "Name, email and password are required".to_string(),
        ));
    }

    tracing::info!("Registration request for email: {}", request.email);

    let password_hash = bcrypt::hash(&request.password, BCRYPT_COST)
        .map_err(|e| ApiError::Internal(format!("failed to hash password: {e}")))?;

    let user = store
        .create_user(&request.name, &request.email, &password_hash, None)
        .await?;

    tracing::info!("User created: {} ({})", user.name, user.email);

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}
