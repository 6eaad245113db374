//! Authentication Handlers Module
//!
//! HTTP handlers for the public user endpoints.
//!
//! # Handlers
//!
//! - **`register`** - POST /api/users - User registration
//! - **`login`** - POST /api/login - User authentication
//! - **`list_users`** - GET /api/users - List all users
//!
//! # Flow
//!
//! 1. **Register**: name/email/password → bcrypt hash → user created
//! 2. **Login**: credentials verified → JWT token returned
//! 3. Protected routes present the token as `Authorization: Bearer <token>`

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// User listing handler
pub mod list;

// Re-export commonly used types
pub use types::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};

// Re-export handlers
pub use list::list_users;
pub use login::login;
pub use register::register;
