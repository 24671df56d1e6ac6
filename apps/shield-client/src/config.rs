//! Configuration for the shield client.
//!
//! Values are read from `SHIELD_*` environment variables with sensible
//! defaults, e.g. `SHIELD_ENDPOINT=http://localhost:5000`.

use serde::Deserialize;

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Reading or deserializing the configuration failed.
    #[error("failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),
}

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the government server.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_endpoint() -> String {
    "http://localhost:5000".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

/// Load configuration from the environment.
///
/// # Errors
///
/// Returns [`ConfigError`] if the environment values cannot be
/// deserialized.
pub fn load_config() -> Result<ClientConfig, ConfigError> {
    let settings = ::config::Config::builder()
        .add_source(::config::Environment::with_prefix("SHIELD"))
        .build()?;
    Ok(settings.try_deserialize()?)
}
