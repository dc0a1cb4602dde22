//! Ticker identifier.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::StockviewError;

/// Identifier of the instrument presented by one detail view (e.g. "AAPL").
///
/// The value is opaque: it is trimmed but otherwise passed to the data
/// services exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    /// Creates a ticker from user or routing input.
    ///
    /// # Errors
    ///
    /// Returns [`StockviewError::EmptyTicker`] if the input is empty after trimming.
    pub fn new(value: impl AsRef<str>) -> Result<Self, StockviewError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(StockviewError::EmptyTicker);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the ticker as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Ticker {
    type Err = StockviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Ticker {
    type Error = StockviewError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Ticker> for String {
    fn from(ticker: Ticker) -> Self {
        ticker.0
    }
}

impl AsRef<str> for Ticker {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
