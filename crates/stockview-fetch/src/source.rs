//! Data source adapters.
//!
//! Each adapter issues exactly one request per call and always resolves to
//! a value. Transport failures and malformed payloads are logged and replaced
//! by the source's fallback: no headlines, empty price series, or no profile.

use async_trait::async_trait;
use stockview_types::{PriceHistory, PriceSeries, Profile, Ticker};

use crate::parse::{LONG_TERM_KEY, SHORT_TERM_KEY, parse_headlines, parse_profile, parse_series};
use crate::{ClientConfig, Endpoint, FetchError, SourceClient};

/// The three per-ticker data sources a detail view loads from.
///
/// Implementations must not fail: every method resolves to either the
/// payload or the documented fallback for that source.
#[async_trait]
pub trait MarketSource: Send + Sync + 'static {
    /// Recent headlines, in display order. Falls back to no headlines.
    async fn headlines(&self, ticker: &Ticker) -> Vec<String>;

    /// Short-term and long-term prices. Each series falls back to empty on
    /// its own.
    async fn prices(&self, ticker: &Ticker) -> PriceHistory;

    /// Company profile. Falls back to `None`.
    async fn profile(&self, ticker: &Ticker) -> Option<Profile>;
}

/// [`MarketSource`] backed by the HTTP data service.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: SourceClient,
}

impl HttpSource {
    /// Creates a source on top of an existing client.
    #[must_use]
    pub const fn new(client: SourceClient) -> Self {
        Self { client }
    }

    /// Creates a source with its own client.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn with_config(config: ClientConfig) -> Result<Self, FetchError> {
        Ok(Self::new(SourceClient::new(config)?))
    }
}

#[async_trait]
impl MarketSource for HttpSource {
    async fn headlines(&self, ticker: &Ticker) -> Vec<String> {
        let value = match self.client.get_json(Endpoint::News, ticker).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(source = "news", %ticker, error = %e, "failed to fetch headlines");
                return Vec::new();
            }
        };

        parse_headlines(value).unwrap_or_else(|e| {
            tracing::warn!(source = "news", %ticker, error = %e, "invalid headlines payload");
            Vec::new()
        })
    }

    async fn prices(&self, ticker: &Ticker) -> PriceHistory {
        let value = match self.client.get_json(Endpoint::Prices, ticker).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(source = "prices", %ticker, error = %e, "failed to fetch prices");
                return PriceHistory::default();
            }
        };

        let series = |key: &'static str| {
            parse_series(&value, key).unwrap_or_else(|e| {
                tracing::warn!(
                    source = "prices",
                    %ticker,
                    series = key,
                    error = %e,
                    "invalid price series"
                );
                PriceSeries::default()
            })
        };
        PriceHistory::new(series(SHORT_TERM_KEY), series(LONG_TERM_KEY))
    }

    async fn profile(&self, ticker: &Ticker) -> Option<Profile> {
        let value = match self.client.get_json(Endpoint::Description, ticker).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(
                    source = "description",
                    %ticker,
                    error = %e,
                    "failed to fetch profile"
                );
                return None;
            }
        };

        match parse_profile(value) {
            Ok(profile) => Some(profile),
            Err(e) => {
                tracing::warn!(
                    source = "description",
                    %ticker,
                    error = %e,
                    "invalid profile payload"
                );
                None
            }
        }
    }
}
