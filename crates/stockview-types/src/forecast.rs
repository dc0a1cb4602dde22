//! Placeholder price forecast.

use serde::{Deserialize, Serialize};

/// A forecast price with two-digit precision, stored as whole cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Forecast {
    cents: u64,
}

impl Forecast {
    /// Creates a forecast from whole cents.
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    /// Creates a forecast from a price, rounding to the nearest cent.
    ///
    /// Negative and non-finite prices clamp to zero.
    #[must_use]
    pub fn from_price(price: f64) -> Self {
        let cents = if price.is_finite() && price > 0.0 {
            (price * 100.0).round() as u64
        } else {
            0
        };
        Self { cents }
    }

    /// Returns the forecast in whole cents.
    #[must_use]
    pub const fn cents(&self) -> u64 {
        self.cents
    }

    /// Returns the forecast as a price.
    #[must_use]
    pub fn price(&self) -> f64 {
        self.cents as f64 / 100.0
    }
}

impl std::fmt::Display for Forecast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_price_rounds_to_cents() {
        let forecast = Forecast::from_price(123.456);
        assert_eq!(forecast.cents(), 12346);
        assert_eq!(forecast.to_string(), "123.46");
        assert_relative_eq!(forecast.price(), 123.46);
    }

    #[test]
    fn test_display_pads_cents() {
        assert_eq!(Forecast::from_cents(10005).to_string(), "100.05");
        assert_eq!(Forecast::from_cents(50000).to_string(), "500.00");
    }

    #[test]
    fn test_invalid_prices_clamp() {
        assert_eq!(Forecast::from_price(-1.0).cents(), 0);
        assert_eq!(Forecast::from_price(f64::NAN).cents(), 0);
    }
}
