/**
 * Authentication Handler Types
 *
 * Request and response types shared across the registration, login, and
 * user-listing handlers.
 *
 * Missing body fields deserialize to empty strings so the handlers can
 * answer with the API's own 400 messages instead of a deserialization
 * rejection.
 */

use serde::{Deserialize, Serialize};

use crate::store::User;

/// Registration request
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// User's display name
    #[serde(default)]
    pub name: String,
    /// User's email address
    #[serde(default)]
    pub email: String,
    /// User's password (will be hashed before storage)
    #[serde(default)]
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// User's email address
    #[serde(default)]
    pub email: String,
    /// User's password (will be verified against the stored hash)
    #[serde(default)]
    pub password: String,
}

/// Login response: the bearer token plus a human-readable message.
#[derive(Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    /// JWT token for authentication (1-hour expiration)
    pub token: String,
    pub message: String,
}

/// User record as returned to clients.
///
/// Never includes the password hash.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: String,
    pub name: String,
    pub email: String,
    /// Persona prompt used for this user's completions
    #[serde(rename = "systemRole")]
    pub system_role: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            system_role: user.system_role,
        }
    }
}
