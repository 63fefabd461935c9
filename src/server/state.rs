/**
 * Application State
 *
 * The central state container handed to every handler via Axum's
 * `State` extractor. Everything inside is immutable configuration or an
 * `Arc` handle, so cloning per request is cheap and no locking happens
 * at this layer.
 */

use std::sync::Arc;

use crate::auth::tokens::AuthConfig;
use crate::profile::feed::FeedClient;
use crate::storage::Store;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Persistence seam; the concrete store is chosen at startup
    pub store: Arc<dyn Store>,
    /// Token signing configuration
    pub auth: Arc<AuthConfig>,
    /// Upstream feed client
    pub feed: Arc<FeedClient>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, auth: AuthConfig, feed: FeedClient) -> Self {
        Self {
            store,
            auth: Arc::new(auth),
            feed: Arc::new(feed),
        }
    }
}

#[cfg(test)]
pub mod test_support {
    use super::*;
    use crate::auth::tokens::DEFAULT_TOKEN_TTL_SECS;
    use crate::storage::MemoryStore;

    /// State over an in-memory store, for handler unit tests
    pub fn test_state() -> AppState {
        AppState::new(
            Arc::new(MemoryStore::new()),
            AuthConfig {
                jwt_secret: "test-secret".to_string(),
                token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            },
            FeedClient::new(None),
        )
    }
}
