//! Authentication Module
//!
//! User registration, login, and session management.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports
//! ├── sessions.rs     - JWT token management
//! └── handlers/       - HTTP handlers
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - User registration handler
//!     ├── login.rs    - User authentication handler
//!     └── list.rs     - User listing handler
//! ```
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - JWT tokens are stateless and expire after 1 hour
//! - Unknown email and wrong password fail with the same message

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{list_users, login, register};
pub use sessions::{create_token, verify_token, Claims, TokenError};
