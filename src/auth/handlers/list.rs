/**
 * User Listing Handler
 *
 * Implements GET /api/users: returns every registered user, sanitized.
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::UserResponse;
use crate::error::ApiError;
use crate::store::{ChatStore, SqliteStore};

/// List all users.
///
/// # Errors
///
/// * `500 Internal Server Error` - store failure
pub async fn list_users(
    State(store): State<SqliteStore>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = store.list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
