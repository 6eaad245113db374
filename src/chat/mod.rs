//! Chat Module
//!
//! The authenticated chatbot endpoint: relays a user message to the
//! completion API with the user's persona and stored history, and appends
//! the exchange to the conversation log.

/// Chatbot endpoint handler
pub mod handlers;

pub use handlers::{chatbot, ChatRequest, ChatResponse};
