//! Service-intelligence API client.

use netrecon_core::{HostIntel, ReconError, Result};
use reqwest::Client as HttpClient;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// The service-intelligence API base URL
const DEFAULT_BASE_URL: &str = "https://api.shodan.io";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the service-intelligence host endpoint
#[derive(Clone)]
pub struct IntelClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    api_key: String,
    base_url: String,
}

impl IntelClient {
    /// Create a new client with the given API key using default settings
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        IntelClientBuilder::new(api_key).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(api_key: impl Into<String>) -> IntelClientBuilder {
        IntelClientBuilder::new(api_key)
    }

    /// Fetch organization, OS, and service banners for a host
    pub async fn host(&self, ip: IpAddr) -> Result<HostIntel> {
        let url = format!(
            "{}/shodan/host/{ip}?key={}",
            self.inner.base_url, self.inner.api_key
        );
        debug!(ip = %ip, "service-intelligence lookup");

        let response = self
            .inner
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ReconError::Http(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| ReconError::Http(e.to_string()))?;
            serde_json::from_str(&body).map_err(ReconError::Json)
        } else {
            Self::handle_error(status.as_u16(), response).await
        }
    }

    /// Convert an error response into a typed error
    async fn handle_error<T>(status: u16, response: reqwest::Response) -> Result<T> {
        let body = response.text().await.unwrap_or_default();

        // Try to parse an error message from JSON
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
            .unwrap_or(body);

        match status {
            401 => Err(ReconError::Unauthorized),
            404 => Err(ReconError::NotFound { resource: message }),
            429 => {
                warn!("rate limited by service-intelligence API");
                Err(ReconError::RateLimited { retry_after: None })
            }
            _ => Err(ReconError::Api {
                code: status,
                message,
            }),
        }
    }
}

/// Builder for configuring an [`IntelClient`]
pub struct IntelClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl IntelClientBuilder {
    /// Create a new builder with the given API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("netrecon/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client
    #[must_use]
    pub fn build(self) -> IntelClient {
        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .expect("Failed to build HTTP client");

        IntelClient {
            inner: Arc::new(ClientInner {
                http,
                api_key: self.api_key,
                base_url: self.base_url,
            }),
        }
    }
}
