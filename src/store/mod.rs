/**
 * User and Conversation Store
 *
 * This module defines the persistence interface for user records and
 * conversation turns. [`ChatStore`] is the capability trait; the default
 * implementation is [`sqlite::SqliteStore`]. To swap to another database,
 * implement [`ChatStore`] for your new type and change the concrete type in
 * [`crate::server::state::AppState`].
 *
 * All trait methods use `impl Future` in their signatures so no extra
 * `async-trait` crate is required.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub mod sqlite;

pub use sqlite::SqliteStore;

/// Persona prompt assigned to users who register without one.
pub const DEFAULT_SYSTEM_ROLE: &str = "대화 시, 겉으로는 무뚝뚝하고 차가운 말투를 사용해. 그러나 실제로는 상대방을 도와주고 싶어 하며, 본심이 드러나는 친절한 조언이나 설명을 덧붙여줘.";

/// A registered user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID, generated by the store at creation.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address (unique).
    pub email: String,
    /// Hashed password (bcrypt). Never the plaintext.
    pub password_hash: String,
    /// Persona prompt prepended to every completion request for this user.
    pub system_role: String,
    /// Created at timestamp.
    pub created_at: DateTime<Utc>,
}

/// Author of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "user" => Some(Role::User),
            "assistant" => Some(Role::Assistant),
            _ => None,
        }
    }
}

/// One stored message in a user's conversation history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub id: Uuid,
    /// Owning user. Not enforced as a foreign key by the store.
    pub user_id: Uuid,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// Store-level errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Unique-index violation on the email column.
    #[error("email already registered")]
    DuplicateEmail,

    /// Any other database failure.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Capability trait for user and conversation persistence.
///
/// Every call persists immediately; there is no in-memory caching layer.
pub trait ChatStore: Clone + Send + Sync + 'static {
    /// Create a user. `system_role` falls back to [`DEFAULT_SYSTEM_ROLE`]
    /// when not supplied. Fails with [`StoreError::DuplicateEmail`] if the
    /// email is already registered.
    fn create_user(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
        system_role: Option<&str>,
    ) -> impl std::future::Future<Output = Result<User, StoreError>> + Send;

    /// Look up a user by email.
    fn find_user_by_email(
        &self,
        email: &str,
    ) -> impl std::future::Future<Output = Result<Option<User>, StoreError>> + Send;

    /// Look up a user by ID.
    fn find_user_by_id(
        &self,
        id: Uuid,
    ) -> impl std::future::Future<Output = Result<Option<User>, StoreError>> + Send;

    /// List all users.
    fn list_users(&self) -> impl std::future::Future<Output = Result<Vec<User>, StoreError>> + Send;

    /// Overwrite a user's persona prompt.
    fn update_system_role(
        &self,
        user_id: Uuid,
        system_role: &str,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// Append one turn to a user's conversation history.
    fn append_turn(
        &self,
        user_id: Uuid,
        role: Role,
        content: &str,
    ) -> impl std::future::Future<Output = Result<ConversationTurn, StoreError>> + Send;

    /// All turns for a user, in insertion order.
    fn list_turns(
        &self,
        user_id: Uuid,
    ) -> impl std::future::Future<Output = Result<Vec<ConversationTurn>, StoreError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        assert_eq!(Role::from_str("user"), Some(Role::User));
        assert_eq!(Role::from_str("assistant"), Some(Role::Assistant));
        assert_eq!(Role::from_str("system"), None);
        assert_eq!(Role::User.as_str(), "user");
        assert_eq!(Role::Assistant.as_str(), "assistant");
    }

    #[test]
    fn test_role_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), "\"assistant\"");
        let role: Role = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(role, Role::User);
    }
}
