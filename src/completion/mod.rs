/**
 * Chat-Completion Client
 *
 * This module wraps the external chat-completion API behind the
 * [`CompletionBackend`] capability trait. The default implementation is
 * [`openai::OpenAiClient`]; to swap providers, implement the trait for a
 * new type and change the concrete type in
 * [`crate::server::state::AppState`].
 *
 * Every completion request carries one system-role entry (the user's
 * persona, or [`FALLBACK_SYSTEM_ROLE`] when the persona is empty), the
 * stored conversation history in order, and the new user message.
 */

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod openai;

pub use openai::OpenAiClient;

/// System prompt used when a user has no persona set.
pub const FALLBACK_SYSTEM_ROLE: &str = "You are a helpful assistant.";

/// A single message in a completion request or response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// The role of the message author (`"system"`, `"user"`, `"assistant"`).
    pub role: String,
    /// The content of the message.
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

/// Opaque upstream failure. Transport errors, non-success statuses, and
/// malformed bodies all collapse into this one condition; the detail is for
/// the server log only.
#[derive(Debug, Error)]
#[error("completion request failed: {0}")]
pub struct CompletionError(String);

impl CompletionError {
    pub(crate) fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Capability trait for generating an assistant reply.
pub trait CompletionBackend: Clone + Send + Sync + 'static {
    /// Generate a reply to `message`, given the persona and prior turns.
    ///
    /// No retry, no backoff: any upstream failure surfaces as a single
    /// [`CompletionError`].
    fn complete(
        &self,
        system_role: &str,
        history: &[ChatMessage],
        message: &str,
    ) -> impl std::future::Future<Output = Result<String, CompletionError>> + Send;
}

/// Assemble the message list for one completion request: system persona,
/// then the stored history in order, then the new user message.
pub fn build_messages(
    system_role: &str,
    history: &[ChatMessage],
    message: &str,
) -> Vec<ChatMessage> {
    let persona = if system_role.is_empty() {
        FALLBACK_SYSTEM_ROLE
    } else {
        system_role
    };

    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(ChatMessage::new("system", persona));
    messages.extend_from_slice(history);
    messages.push(ChatMessage::new("user", message));
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_build_messages_with_no_history() {
        let messages = build_messages("Be terse.", &[], "hi");
        assert_eq!(
            messages,
            vec![
                ChatMessage::new("system", "Be terse."),
                ChatMessage::new("user", "hi"),
            ]
        );
    }

    #[test]
    fn test_build_messages_empty_persona_falls_back() {
        let messages = build_messages("", &[], "hi");
        assert_eq!(messages[0].content, FALLBACK_SYSTEM_ROLE);
    }

    #[test]
    fn test_build_messages_keeps_history_order() {
        let history = vec![
            ChatMessage::new("user", "first"),
            ChatMessage::new("assistant", "second"),
        ];
        let messages = build_messages("persona", &history, "third");

        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1].content, "first");
        assert_eq!(messages[2].content, "second");
        assert_eq!(messages[3], ChatMessage::new("user", "third"));
    }
}
