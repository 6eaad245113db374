//! API Error Types
//!
//! Error taxonomy for the HTTP surface and its conversion to responses.
//!
//! - **`types`** - the `ApiError` enum and status/message mapping
//! - **`conversion`** - `IntoResponse` implementation

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::ApiError;
