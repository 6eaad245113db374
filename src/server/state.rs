/**
 * Application State Management
 *
 * This module defines the application state and the `FromRef`
 * implementations for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds the two external collaborators: the store and the
 * completion client. Both are cheap to clone (connection pool / HTTP
 * client handles) and internally safe for concurrent use, so no extra
 * locking is layered on top.
 *
 * To swap either collaborator, implement its capability trait
 * ([`crate::store::ChatStore`] / [`crate::completion::CompletionBackend`])
 * and change the concrete type here.
 */

use axum::extract::FromRef;

use crate::completion::OpenAiClient;
use crate::store::SqliteStore;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// User and conversation store.
    pub store: SqliteStore,
    /// Chat-completion client.
    pub completion: OpenAiClient,
}

/// Allows handlers to extract `State<SqliteStore>` directly.
impl FromRef<AppState> for SqliteStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

/// Allows handlers to extract `State<OpenAiClient>` directly.
impl FromRef<AppState> for OpenAiClient {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.completion.clone()
    }
}
