//! HTTP client for the per-ticker data service.

use reqwest::{Client, Url};
use serde_json::Value;
use std::time::Duration;
use stockview_types::Ticker;
use thiserror::Error;

use crate::url::{DEFAULT_BASE_URL, Endpoint, endpoint_url, parse_base_url};

/// Configuration for the source client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the data service.
    pub base_url: String,
    /// Overall request timeout. `None` waits for the service indefinitely.
    pub timeout: Option<Duration>,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("stockview/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors that can occur while fetching a payload.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The configured base URL is unusable.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned a non-success status.
    #[error("Server returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// Body was not valid JSON.
    #[error("Invalid JSON body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// HTTP client issuing one JSON request per call, without retries.
#[derive(Debug, Clone)]
pub struct SourceClient {
    client: Client,
    base_url: Url,
}

impl SourceClient {
    /// Creates a new source client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot
    /// be created.
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let base_url = parse_base_url(&config.base_url)?;
        let mut builder = Client::builder()
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { client, base_url })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, FetchError> {
        Self::new(ClientConfig::default())
    }

    /// Returns the URL requested for `endpoint` and `ticker`.
    #[must_use]
    pub fn url(&self, endpoint: Endpoint, ticker: &Ticker) -> Url {
        endpoint_url(&self.base_url, endpoint, ticker.as_str())
    }

    /// Fetches one endpoint for a ticker and decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, on a non-2xx status, or if the
    /// body is not valid JSON.
    pub async fn get_json(&self, endpoint: Endpoint, ticker: &Ticker) -> Result<Value, FetchError> {
        let url = self.url(endpoint, ticker);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.timeout.is_none());
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("stockview/"));
    }

    #[tokio::test]
    async fn test_client_creation() {
        let client = SourceClient::with_defaults();
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_rejects_bad_base() {
        let config = ClientConfig {
            base_url: "::nope::".into(),
            ..ClientConfig::default()
        };
        assert!(matches!(
            SourceClient::new(config),
            Err(FetchError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_client_url() {
        let client = SourceClient::with_defaults().unwrap();
        let ticker = Ticker::new("NVDA").unwrap();
        assert_eq!(
            client.url(Endpoint::Description, &ticker).as_str(),
            "http://127.0.0.1:5000/description/NVDA"
        );
    }
}
