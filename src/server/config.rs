/**
 * Server Configuration
 *
 * Loads the whole configuration from environment variables once at
 * startup into an immutable [`AppConfig`]. Nothing else in the crate
 * reads the environment; handlers receive configuration through
 * application state.
 *
 * # Configuration Keys
 *
 * - `PORT` - listen port (default 5000)
 * - `DATABASE_URL` - PostgreSQL connection string (required)
 * - `JWT_SECRET` - token signing secret (required)
 * - `JWT_TTL_SECS` - token lifetime in seconds (default 360000)
 * - `FEED_API_URL` / `FEED_API_HOST` / `FEED_API_KEY` - upstream feed
 *   credentials; all three optional, the feed endpoint returns 404 when
 *   any is unset
 */

use std::env;

use thiserror::Error;

use crate::auth::tokens::{AuthConfig, DEFAULT_TOKEN_TTL_SECS};
use crate::profile::feed::FeedConfig;

/// Default listen port when `PORT` is unset
pub const DEFAULT_PORT: u16 = 5000;

/// Startup configuration failures
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is unset
    #[error("missing required environment variable `{0}`")]
    Missing(&'static str),

    /// A variable is set but unparseable
    #[error("invalid value for environment variable `{0}`")]
    Invalid(&'static str),
}

/// Immutable application configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub auth: AuthConfig,
    /// Feed proxy credentials; `None` disables the feed endpoint
    pub feed: Option<FeedConfig>,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Fails fast on a missing `DATABASE_URL` or `JWT_SECRET`, or an
    /// unparseable `PORT` / `JWT_TTL_SECS`. Missing feed credentials are
    /// not an error; the feed endpoint degrades instead.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Tests inject a
    /// map here instead of mutating process-wide environment variables.
    fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> Result<Self, ConfigError> {
        let required =
            |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => DEFAULT_PORT,
        };

        let token_ttl_secs = match lookup("JWT_TTL_SECS") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::Invalid("JWT_TTL_SECS"))?,
            None => DEFAULT_TOKEN_TTL_SECS,
        };

        let feed = match (
            lookup("FEED_API_URL"),
            lookup("FEED_API_HOST"),
            lookup("FEED_API_KEY"),
        ) {
            (Some(api_url), Some(api_host), Some(api_key)) => Some(FeedConfig {
                api_url,
                api_host,
                api_key,
            }),
            _ => {
                tracing::warn!("feed API not configured; instagram endpoint will return 404");
                None
            }
        };

        Ok(Self {
            port,
            database_url: required("DATABASE_URL")?,
            auth: AuthConfig {
                jwt_secret: required("JWT_SECRET")?,
                token_ttl_secs,
            },
            feed,
        })
    }
}
