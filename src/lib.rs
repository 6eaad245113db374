//! Personabot - Main Library
//!
//! Personabot is a minimal authenticated chat backend built with Rust. It
//! registers users, authenticates them with signed bearer tokens, persists
//! per-user conversation history, and relays messages to an external
//! chat-completion API with a per-user "persona" system prompt.
//!
//! # Module Structure
//!
//! The library is organized into focused modules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`store`** - User and conversation persistence (sqlx/SQLite)
//! - **`auth`** - Registration, login, and JWT session management
//! - **`completion`** - Chat-completion API client
//! - **`chat`** - The authenticated chatbot endpoint
//! - **`middleware`** - Bearer-token authentication middleware
//! - **`error`** - API error taxonomy
//!
//! # Usage
//!
//! ```rust,no_run
//! use personabot::server::config::Config;
//! use personabot::server::init::create_app;
//!
//! # async fn example() -> Result<(), sqlx::Error> {
//! let app = create_app(Config::from_env()).await?;
//! // Use app with Axum server
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Handlers return `Result<Json<T>, ApiError>`; the error type maps each
//! failure class to its HTTP status and a fixed client-safe message, and
//! logs server-side causes via `tracing`.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// User and conversation persistence
pub mod store;

/// Authentication, JWT tokens, user management
pub mod auth;

/// Chat-completion API client
pub mod completion;

/// The chatbot endpoint
pub mod chat;

/// Middleware for request processing
pub mod middleware;

/// API error types
pub mod error;

pub use error::ApiError;
pub use server::init::create_app;
