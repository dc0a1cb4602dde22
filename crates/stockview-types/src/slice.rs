//! Load state of one independently fetched piece of view data.

use serde::{Deserialize, Serialize};

/// Load state of one slice of a detail view.
///
/// A slice starts as [`Slice::Pending`] and settles exactly once per view
/// lifetime into either [`Slice::Empty`] (the source failed, or answered
/// with nothing) or [`Slice::Data`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "lowercase")]
pub enum Slice<T> {
    /// Request issued, no answer yet.
    Pending,
    /// Settled without data.
    Empty,
    /// Settled with data.
    Data(T),
}

impl<T> Default for Slice<T> {
    fn default() -> Self {
        Self::Pending
    }
}

impl<T> Slice<T> {
    /// Returns true while the slice has not settled.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns true once the slice has settled, with or without data.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        !self.is_pending()
    }

    /// Returns the loaded data, if any.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Data(value) => Some(value),
            _ => None,
        }
    }

    /// Settles a slice from an optional value.
    #[must_use]
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Self::Data)
    }
}

impl<T> Slice<Vec<T>> {
    /// Settles a slice from a sequence; an empty sequence settles as [`Slice::Empty`].
    #[must_use]
    pub fn from_vec(values: Vec<T>) -> Self {
        if values.is_empty() {
            Self::Empty
        } else {
            Self::Data(values)
        }
    }
}

impl Slice<crate::PriceSeries> {
    /// Settles a slice from a price series; an empty series settles as [`Slice::Empty`].
    #[must_use]
    pub fn from_series(series: crate::PriceSeries) -> Self {
        if series.is_empty() {
            Self::Empty
        } else {
            Self::Data(series)
        }
    }
}
