//! Middleware Module
//!
//! Request-processing middleware for the HTTP server.

/// Bearer-token authentication middleware
pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
