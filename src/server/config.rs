/**
 * Server Configuration
 *
 * This module collects the environment configuration for the server. All
 * options have fallbacks so a bare `cargo run` starts a working local
 * instance; the completion credential fallback is a placeholder that will
 * make upstream calls fail until `OPENAI_API_KEY` is set.
 */

use crate::completion::openai::DEFAULT_BASE_URL;

/// Runtime configuration, read once at startup.
#[derive(Clone)]
pub struct Config {
    /// Store connection string (sqlx SQLite URL).
    pub database_url: String,
    /// Completion API credential.
    pub openai_api_key: String,
    /// Completion API endpoint prefix; overridden in tests.
    pub completion_base_url: String,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Fallbacks are logged; none of them aborts startup.
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
            tracing::warn!("DATABASE_URL not set, using local SQLite file");
            "sqlite://chatbot.db?mode=rwc".to_string()
        });

        let openai_api_key = std::env::var("OPENAI_API_KEY").unwrap_or_else(|_| {
            tracing::error!("OPENAI_API_KEY is not set.");
            "default-api-key".to_string()
        });

        Self {
            database_url,
            openai_api_key,
            completion_base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
