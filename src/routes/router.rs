/**
 * Router Configuration
 *
 * Combines the liveness route, the API routes, and the fallback into
 * the single router the server runs.
 */

use axum::{http::StatusCode, routing::get, Router};

use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the router with all routes configured.
///
/// `GET /` answers a plain liveness string; everything else lives under
/// `/api` (see [`configure_api_routes`]); unknown paths fall back to a
/// plain 404.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "API running..." }))
        .merge(configure_api_routes(state.clone()))
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .with_state(state)
}
