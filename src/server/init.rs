/**
 * Server Initialization
 *
 * Builds the application from loaded configuration: connects the
 * PostgreSQL store, runs migrations, assembles [`AppState`], and
 * configures the router.
 *
 * # Error Handling
 *
 * A failed database connection aborts startup. Migration failures are
 * logged but do not prevent startup — migrations might have already
 * been applied by an earlier deploy.
 */

use std::sync::Arc;

use axum::Router;

use crate::profile::feed::FeedClient;
use crate::routes::router::create_router;
use crate::server::config::AppConfig;
use crate::server::state::AppState;
use crate::storage::PgStore;

/// Create and configure the application
///
/// # Errors
///
/// Fails if the database connection cannot be established.
pub async fn create_app(config: AppConfig) -> Result<Router, sqlx::Error> {
    let store = PgStore::connect(&config.database_url).await?;

    tracing::info!("Running database migrations...");
    if let Err(e) = store.migrate().await {
        tracing::error!("Failed to run database migrations: {}", e);
        tracing::warn!("Continuing without migrations - database might not be up to date");
    }

    let state = AppState::new(
        Arc::new(store),
        config.auth,
        FeedClient::new(config.feed),
    );

    Ok(create_router(state))
}
