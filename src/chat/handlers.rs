/**
 * Chatbot Handler
 *
 * Implements the protected chat endpoint (ALL /api/chatbot).
 *
 * # Exchange Algorithm
 *
 * 1. Load the authenticated user
 * 2. If the request carries a `systemRole`, persist it on the user first
 * 3. Load all prior turns for the user
 * 4. Call the completion client with (persona, history, new message)
 * 5. Append the `user` turn, then the `assistant` turn
 * 6. Return the assistant text
 *
 * The two appends are not transactional: a process failure between them
 * leaves an orphaned user turn. Store and upstream failures surface as the
 * generic 500.
 */

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};

use crate::completion::{ChatMessage, CompletionBackend};
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::server::state::AppState;
use crate::store::{ChatStore, Role};

/// Chat request body.
#[derive(Deserialize, Serialize, Debug)]
pub struct ChatRequest {
    /// The new user message
    #[serde(default)]
    pub message: String,
    /// Optional persona override, persisted on the user when present
    #[serde(rename = "systemRole", default, skip_serializing_if = "Option::is_none")]
    pub system_role: Option<String>,
}

/// Chat response body.
#[derive(Serialize, Deserialize, Debug)]
pub struct ChatResponse {
    /// The assistant's reply
    pub response: String,
}

/// Chatbot handler
///
/// # Errors
///
/// * `500 Internal Server Error` - store failure, unknown user id in a
///   valid token, or completion API failure
pub async fn chatbot(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let user = state
        .store
        .find_user_by_id(auth.user_id)
        .await?
        .ok_or_else(|| ApiError::Internal(format!("user {} from token not in store", auth.user_id)))?;

    // A persona supplied with the message overwrites the stored one before
    // the completion call.
    let system_role = match request.system_role {
        Some(role) => {
            state.store.update_system_role(user.id, &role).await?;
            role
        }
        None => user.system_role,
    };

    let history: Vec<ChatMessage> = state
        .store
        .list_turns(user.id)
        .await?
        .into_iter()
        .map(|turn| ChatMessage::new(turn.role.as_str(), turn.content))
        .collect();

    tracing::info!(user = %user.email, history_len = history.len(), "chat exchange");

    let reply = state
        .completion
        .complete(&system_role, &history, &request.message)
        .await?;

    state
        .store
        .append_turn(user.id, Role::User, &request.message)
        .await?;
    state
        .store
        .append_turn(user.id, Role::Assistant, &reply)
        .await?;

    Ok(Json(ChatResponse { response: reply }))
}
