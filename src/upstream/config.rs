//! Upstream connection settings.

use std::sync::Arc;

use super::UpstreamError;
use super::client::WebApiConnector;

/// Base URL of the provider's Web API.
pub const DEFAULT_BASE_URL: &str = "https://api.spotify.com/v1";

/// Upstream configuration.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Base URL every upstream path is appended to.
    pub base_url: String,
    /// User-Agent sent with upstream requests.
    pub user_agent: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: format!("music-gateway/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl UpstreamConfig {
    /// Create a configuration pointing at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Build the shared HTTP transport.
    ///
    /// No timeout is set; requests rely on the transport defaults.
    pub fn build_http_client(&self) -> Result<reqwest::Client, UpstreamError> {
        Ok(reqwest::Client::builder()
            .user_agent(self.user_agent.as_str())
            .build()?)
    }

    /// Build the connector that hands out per-request clients.
    pub fn connector(&self) -> Result<Arc<WebApiConnector>, UpstreamError> {
        let http = self.build_http_client()?;
        Ok(Arc::new(WebApiConnector::new(http, &self.base_url)))
    }
}
