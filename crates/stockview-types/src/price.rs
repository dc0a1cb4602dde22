//! Price time series.

use serde::{Deserialize, Serialize};

/// A single observation of a price series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Timestamp label as delivered by the price service (e.g. "2024-01-15").
    pub date: String,
    /// Price at that timestamp.
    pub price: f64,
}

impl PricePoint {
    /// Creates a new price point.
    #[must_use]
    pub fn new(date: impl Into<String>, price: f64) -> Self {
        Self {
            date: date.into(),
            price,
        }
    }
}

/// Ordered price observations, kept in the order the service delivered them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceSeries(Vec<PricePoint>);

impl PriceSeries {
    /// Creates a series from points in delivery order.
    #[must_use]
    pub const fn new(points: Vec<PricePoint>) -> Self {
        Self(points)
    }

    /// Returns the points of the series.
    #[must_use]
    pub fn points(&self) -> &[PricePoint] {
        &self.0
    }

    /// Returns true if the series has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the lowest price, or `None` for an empty series.
    #[must_use]
    pub fn min_price(&self) -> Option<f64> {
        self.0.iter().map(|p| p.price).reduce(f64::min)
    }

    /// Returns the highest price, or `None` for an empty series.
    #[must_use]
    pub fn max_price(&self) -> Option<f64> {
        self.0.iter().map(|p| p.price).reduce(f64::max)
    }

    /// Returns the most recently delivered point.
    #[must_use]
    pub fn last(&self) -> Option<&PricePoint> {
        self.0.last()
    }
}

impl From<Vec<PricePoint>> for PriceSeries {
    fn from(points: Vec<PricePoint>) -> Self {
        Self(points)
    }
}

/// Short-term and long-term series returned together by the price service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceHistory {
    /// Daily series.
    pub short_term: PriceSeries,
    /// Yearly series.
    pub long_term: PriceSeries,
}

impl PriceHistory {
    /// Creates a price history from its two series.
    #[must_use]
    pub const fn new(short_term: PriceSeries, long_term: PriceSeries) -> Self {
        Self {
            short_term,
            long_term,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn series() -> PriceSeries {
        PriceSeries::new(vec![
            PricePoint::new("2024-01-03", 187.5),
            PricePoint::new("2024-01-01", 185.25),
            PricePoint::new("2024-01-02", 190.0),
        ])
    }

    #[test]
    fn test_series_keeps_delivery_order() {
        let s = series();
        let dates: Vec<_> = s.points().iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, ["2024-01-03", "2024-01-01", "2024-01-02"]);
        assert_eq!(s.last().unwrap().date, "2024-01-02");
    }

    #[test]
    fn test_series_bounds() {
        let s = series();
        assert_relative_eq!(s.min_price().unwrap(), 185.25);
        assert_relative_eq!(s.max_price().unwrap(), 190.0);
        assert!(PriceSeries::default().min_price().is_none());
    }

    #[test]
    fn test_history_wire_names() {
        let json = r#"{"shortTerm":[{"date":"d1","price":1.5}],"longTerm":[]}"#;
        let history: PriceHistory = serde_json::from_str(json).unwrap();
        assert_eq!(history.short_term.len(), 1);
        assert!(history.long_term.is_empty());

        let back = serde_json::to_value(&history).unwrap();
        assert!(back.get("shortTerm").is_some());
        assert!(back.get("longTerm").is_some());
    }
}
