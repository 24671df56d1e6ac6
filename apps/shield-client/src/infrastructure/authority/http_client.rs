//! Blocking HTTP client wrapper for the government server.

use reqwest::blocking::Client;
use serde::Serialize;

use super::config::AuthorityConfig;
use super::error::AuthorityError;

/// Thin wrapper over `reqwest::blocking` carrying the base endpoint.
///
/// Every call blocks until a response or a transport failure; there is no
/// retry at this layer.
#[derive(Debug, Clone)]
pub struct AuthorityHttpClient {
    client: Client,
    endpoint: String,
}

impl AuthorityHttpClient {
    /// Create a client from config.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorityError::Http`] if the underlying client cannot be
    /// constructed.
    pub fn new(config: &AuthorityConfig) -> Result<Self, AuthorityError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_owned(),
        })
    }

    /// GET a path with query parameters, returning the raw body text.
    pub fn get_text(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<String, AuthorityError> {
        let url = format!("{}{}", self.endpoint, path);
        let response = self
            .client
            .get(url)
            .query(query)
            .send()?
            .error_for_status()?;
        Ok(response.text()?)
    }

    /// POST a JSON body to a path with query parameters, returning the raw
    /// body text.
    pub fn post_json<B: Serialize>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        body: &B,
    ) -> Result<String, AuthorityError> {
        let url = format!("{}{}", self.endpoint, path);
        let response = self
            .client
            .post(url)
            .query(query)
            .json(body)
            .send()?
            .error_for_status()?;
        Ok(response.text()?)
    }
}
