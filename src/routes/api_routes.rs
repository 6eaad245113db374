/**
 * API Route Handlers
 *
 * Public (unauthenticated) API endpoints:
 *
 * - `POST /api/users` - User registration
 * - `GET /api/users` - List all users
 * - `POST /api/login` - User login
 */

use axum::Router;

use crate::auth::{list_users, login, register};
use crate::server::state::AppState;

/// Configure the public API routes.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(
            "/api/users",
            axum::routing::post(register).get(list_users),
        )
        .route("/api/login", axum::routing::post(login))
}
