/**
 * Server Initialization
 *
 * Builds the Axum application: connects the store (running embedded
 * migrations), constructs the completion client, and assembles the router.
 */

use axum::Router;

use crate::completion::OpenAiClient;
use crate::routes::create_router;
use crate::server::config::Config;
use crate::server::state::AppState;
use crate::store::SqliteStore;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails if the store connection or its migrations fail; the server cannot
/// run without persistence.
pub async fn create_app(config: Config) -> Result<Router, sqlx::Error> {
    tracing::info!("Connecting to database...");
    let store = SqliteStore::connect(&config.database_url).await?;
    tracing::info!("Database connection pool created, migrations applied");

    let completion = OpenAiClient::new(config.openai_api_key, config.completion_base_url);

    let app_state = AppState { store, completion };

    Ok(create_router(app_state))
}
