//! Authority adapter configuration.

use std::time::Duration;

use crate::config::ClientConfig;

/// Configuration for the government server adapter.
#[derive(Debug, Clone)]
pub struct AuthorityConfig {
    /// Base URL of the server, e.g. `http://localhost:5000`.
    pub endpoint: String,
    /// HTTP request timeout.
    pub timeout: Duration,
}

impl AuthorityConfig {
    /// Build a configuration for an endpoint with the default timeout.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Override the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl From<&ClientConfig> for AuthorityConfig {
    fn from(config: &ClientConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_timeout() {
        let config = AuthorityConfig::new("http://localhost:5000")
            .with_timeout(Duration::from_secs(3));
        assert_eq!(config.endpoint, "http://localhost:5000");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }
}
