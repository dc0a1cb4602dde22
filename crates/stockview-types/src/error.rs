//! Error types for stockview.

use thiserror::Error;

/// Errors raised while building domain values.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockviewError {
    /// The ticker was empty or whitespace only.
    #[error("Ticker must not be empty")]
    EmptyTicker,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ticker_message() {
        assert_eq!(
            StockviewError::EmptyTicker.to_string(),
            "Ticker must not be empty"
        );
    }
}
