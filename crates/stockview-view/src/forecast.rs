//! Placeholder forecast generation.

use rand::Rng;
use stockview_types::Forecast;

/// Draws a placeholder forecast uniformly from a fixed price range.
///
/// There is no model behind the value and no reproducibility across views:
/// entering a view for the same ticker twice may show two different numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastStub {
    low: f64,
    high: f64,
}

impl ForecastStub {
    /// Default lower bound of the range.
    pub const DEFAULT_LOW: f64 = 100.0;
    /// Default upper bound of the range.
    pub const DEFAULT_HIGH: f64 = 500.0;

    /// Creates a stub drawing from `[low, high)`. Bounds given in reverse are swapped.
    #[must_use]
    pub fn new(low: f64, high: f64) -> Self {
        if low <= high {
            Self { low, high }
        } else {
            Self {
                low: high,
                high: low,
            }
        }
    }

    /// Returns the lower bound.
    #[must_use]
    pub const fn low(&self) -> f64 {
        self.low
    }

    /// Returns the upper bound.
    #[must_use]
    pub const fn high(&self) -> f64 {
        self.high
    }

    /// Draws a forecast from the thread-local generator.
    #[must_use]
    pub fn generate(&self) -> Forecast {
        self.generate_with(&mut rand::rng())
    }

    /// Draws a forecast from the given generator.
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> Forecast {
        if self.low >= self.high {
            return Forecast::from_price(self.low);
        }
        Forecast::from_price(rng.random_range(self.low..self.high))
    }
}

impl Default for ForecastStub {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LOW, Self::DEFAULT_HIGH)
    }
}
