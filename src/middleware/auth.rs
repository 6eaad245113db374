/**
 * Authentication Middleware
 *
 * Protects routes that require a signed bearer token. The middleware
 * extracts the token from the Authorization header, verifies it, and
 * attaches the verified identity to the request extensions.
 *
 * A missing token fails with 401 before any handler runs; a token that
 * fails verification (malformed or expired) fails with 400.
 */

use axum::{
    extract::Request,
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::sessions::verify_token;
use crate::error::ApiError;

/// Authenticated identity extracted from the bearer token.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Authentication middleware
///
/// 1. Extracts the JWT from the `Authorization: Bearer <token>` header
/// 2. Verifies the token
/// 3. Attaches [`AuthenticatedUser`] to request extensions for handlers
pub async fn auth_middleware(mut request: Request, next: Next) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::Unauthorized
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        ApiError::Unauthorized
    })?;

    let claims = verify_token(token).map_err(|e| {
        tracing::warn!("Invalid token: {e}");
        ApiError::InvalidToken
    })?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| {
        tracing::warn!("Token subject is not a user id");
        ApiError::InvalidToken
    })?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user.
///
/// Only valid on routes behind [`auth_middleware`].
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::Unauthorized
            })?;

        Ok(AuthUser(user))
    }
}
