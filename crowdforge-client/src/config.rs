//! Client configuration with builder pattern

use std::time::Duration;

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.crowdforge.io/v1/";
/// Sandbox endpoint for integration testing against throwaway data.
pub const SANDBOX_BASE_URL: &str = "https://sandbox.api.crowdforge.io/v1/";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_USER_AGENT: &str = concat!("crowdforge-client/", env!("CARGO_PKG_VERSION"));

/// Connection settings for [`CrowdforgeClient`](crate::CrowdforgeClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every request path is joined onto. Must end with `/`.
    pub base_url: String,
    /// API token sent as a bearer credential.
    pub token: String,
    pub user_agent: String,
    /// Per-request timeout at the transport level.
    pub request_timeout: Duration,
}

impl ClientConfig {
    /// Configuration against the production endpoint.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: token.into(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Configuration against the sandbox endpoint.
    pub fn sandbox(token: impl Into<String>) -> Self {
        Self {
            base_url: SANDBOX_BASE_URL.to_string(),
            ..Self::new(token)
        }
    }

    /// Create a new builder seeded with defaults.
    pub fn builder(token: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder {
            config: Self::new(token),
        }
    }
}

/// Builder for [`ClientConfig`]
#[derive(Debug)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Point the client at a different deployment (self-hosted, mock server).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.config.base_url = base_url;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::new("secret");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.token, "secret");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("crowdforge-client/"));
    }

    #[test]
    fn test_sandbox_config() {
        let config = ClientConfig::sandbox("secret");
        assert_eq!(config.base_url, SANDBOX_BASE_URL);
        assert_eq!(config.token, "secret");
    }

    #[test]
    fn test_builder_pattern() {
        let config = ClientConfig::builder("secret")
            .base_url("http://localhost:8080/api/v1")
            .user_agent("integration-suite")
            .request_timeout(Duration::from_secs(5))
            .build();

        assert_eq!(config.base_url, "http://localhost:8080/api/v1/");
        assert_eq!(config.user_agent, "integration-suite");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }
}
