/**
 * Router Configuration
 *
 * Combines all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Public API routes (registration, listing, login)
 * 2. Protected chatbot route, gated by the bearer-token middleware
 * 3. Static fallback: the landing page and assets from `public/`
 */

use axum::Router;
use tower_http::services::ServeDir;

use crate::chat::chatbot;
use crate::middleware::auth_middleware;
use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Route Details
///
/// - `POST /api/users` - User registration (public)
/// - `GET /api/users` - List users (public)
/// - `POST /api/login` - Login, returns a bearer token (public)
/// - `ALL /api/chatbot` - Chat exchange (requires bearer token)
/// - `GET /` and assets - served from the `public` directory
pub fn create_router(app_state: AppState) -> Router<()> {
    // The chatbot answers on every method, like the original all-methods
    // route; the auth gate runs before the handler.
    let protected = Router::new()
        .route("/api/chatbot", axum::routing::any(chatbot))
        .route_layer(axum::middleware::from_fn(auth_middleware));

    let router = configure_api_routes(Router::new()).merge(protected);

    // Static landing page; ServeDir resolves "/" to public/index.html.
    let router = router.fallback_service(ServeDir::new("public"));

    router.with_state(app_state)
}
