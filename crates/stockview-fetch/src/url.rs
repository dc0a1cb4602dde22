//! Data service URL construction.

use reqwest::Url;

use crate::FetchError;

/// Default base URL of the data service.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// The per-ticker endpoints exposed by the data service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Recent headlines.
    News,
    /// Short-term and long-term price series.
    Prices,
    /// Company profile.
    Description,
}

impl Endpoint {
    /// Returns the path segment of the endpoint.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::News => "news",
            Self::Prices => "prices",
            Self::Description => "description",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parses and checks a service base URL.
///
/// # Errors
///
/// Returns [`FetchError::InvalidBaseUrl`] if the URL does not parse or
/// cannot carry path segments.
pub fn parse_base_url(base: &str) -> Result<Url, FetchError> {
    let url = Url::parse(base).map_err(|e| FetchError::InvalidBaseUrl(format!("{base}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(FetchError::InvalidBaseUrl(format!(
            "{base}: not a hierarchical URL"
        )));
    }
    Ok(url)
}

/// Builds the URL of `endpoint` for a ticker.
///
/// URL format: `{BASE}/{ENDPOINT}/{TICKER}`, with the ticker encoded as a
/// single path segment.
///
/// # Example
///
/// ```
/// use stockview_fetch::url::{Endpoint, endpoint_url, parse_base_url};
///
/// let base = parse_base_url("http://127.0.0.1:5000").unwrap();
/// let url = endpoint_url(&base, Endpoint::News, "AAPL");
/// assert_eq!(url.as_str(), "http://127.0.0.1:5000/news/AAPL");
/// ```
#[must_use]
pub fn endpoint_url(base: &Url, endpoint: Endpoint, ticker: &str) -> Url {
    let mut url = base.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(endpoint.as_str()).push(ticker);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        parse_base_url(DEFAULT_BASE_URL).unwrap()
    }

    #[test]
    fn test_endpoint_urls() {
        assert_eq!(
            endpoint_url(&base(), Endpoint::Prices, "MSFT").as_str(),
            "http://127.0.0.1:5000/prices/MSFT"
        );
        assert_eq!(
            endpoint_url(&base(), Endpoint::Description, "MSFT").as_str(),
            "http://127.0.0.1:5000/description/MSFT"
        );
    }

    #[test]
    fn test_ticker_is_one_segment() {
        let url = endpoint_url(&base(), Endpoint::News, "BRK/B");
        assert_eq!(url.as_str(), "http://127.0.0.1:5000/news/BRK%2FB");
    }

    #[test]
    fn test_base_with_path_and_trailing_slash() {
        let base = parse_base_url("http://localhost:8080/api/").unwrap();
        let url = endpoint_url(&base, Endpoint::News, "TSLA");
        assert_eq!(url.as_str(), "http://localhost:8080/api/news/TSLA");
    }

    #[test]
    fn test_invalid_base() {
        assert!(matches!(
            parse_base_url("not a url"),
            Err(FetchError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            parse_base_url("mailto:someone@example.com"),
            Err(FetchError::InvalidBaseUrl(_))
        ));
    }
}
