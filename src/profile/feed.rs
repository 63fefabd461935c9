/**
 * Instagram Feed Proxy
 *
 * Fetches a user's recent posts from a third-party feed API and relays
 * the JSON body untouched. The upstream credentials live server-side so
 * they never reach browsers; when they are not configured the endpoint
 * degrades to 404 instead of failing startup.
 */

use serde_json::Value;

use crate::error::ApiError;

/// Upstream feed API settings, read from the environment at startup
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Base URL of the feed endpoint
    pub api_url: String,
    /// Value for the `x-rapidapi-host` header
    pub api_host: String,
    /// Value for the `x-rapidapi-key` header
    pub api_key: String,
}

/// Shared HTTP client for the feed proxy
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    config: Option<FeedConfig>,
}

impl FeedClient {
    pub fn new(config: Option<FeedConfig>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Fetch a username's feed and return the upstream JSON body.
    ///
    /// # Errors
    ///
    /// * [`ApiError::Upstream`] (404) — proxy unconfigured, or the
    ///   upstream answered with any non-200 status
    /// * [`ApiError::Internal`] (500) — transport failure or unparseable
    ///   upstream body
    pub async fn fetch(&self, username: &str) -> Result<Value, ApiError> {
        let Some(config) = &self.config else {
            tracing::warn!("feed requested but no feed API is configured");
            return Err(ApiError::Upstream);
        };

        let response = self
            .http
            .get(&config.api_url)
            .query(&[("username", username)])
            .header("x-rapidapi-host", &config.api_host)
            .header("x-rapidapi-key", &config.api_key)
            .send()
            .await
            .map_err(ApiError::internal)?;

        if response.status() != reqwest::StatusCode::OK {
            tracing::warn!(
                "feed upstream returned {} for username {}",
                response.status(),
                username
            );
            return Err(ApiError::Upstream);
        }

        response.json().await.map_err(ApiError::internal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> FeedClient {
        FeedClient::new(Some(FeedConfig {
            api_url: format!("{}/feed", server.uri()),
            api_host: "feed.example.com".to_string(),
            api_key: "test-key".to_string(),
        }))
    }

    #[tokio::test]
    async fn relays_upstream_body_with_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("username", "rex"))
            .and(header("x-rapidapi-host", "feed.example.com"))
            .and(header("x-rapidapi-key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "p1"}])))
            .mount(&server)
            .await;

        let body = client_for(&server).fetch("rex").await.unwrap();
        assert_eq!(body[0]["id"], "p1");
    }

    #[tokio::test]
    async fn upstream_failure_maps_to_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch("rex").await.unwrap_err();
        assert!(matches!(err, ApiError::Upstream));
    }

    #[tokio::test]
    async fn unconfigured_client_is_upstream_error() {
        let err = FeedClient::new(None).fetch("rex").await.unwrap_err();
        assert!(matches!(err, ApiError::Upstream));
    }
}
