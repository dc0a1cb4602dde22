//! View state handed to the presentation layer.

use serde::Serialize;
use stockview_types::{Forecast, PriceSeries, Profile, Slice, Ticker};

/// Data slices of one detail view for one ticker.
///
/// `generation` identifies the load that produced this state. A load for a
/// new ticker (or a reload of the same one) gets a new generation, and
/// answers tagged with an older one are never merged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    /// Ticker the slices belong to.
    pub ticker: Ticker,
    /// Load generation.
    pub generation: u64,
    /// Recent headlines.
    pub headlines: Slice<Vec<String>>,
    /// Daily price series.
    pub short_term: Slice<PriceSeries>,
    /// Yearly price series.
    pub long_term: Slice<PriceSeries>,
    /// Company profile.
    pub profile: Slice<Profile>,
    /// Placeholder forecast.
    pub forecast: Option<Forecast>,
}

impl ViewState {
    /// Creates a state with every slice pending.
    #[must_use]
    pub const fn pending(ticker: Ticker, generation: u64) -> Self {
        Self {
            ticker,
            generation,
            headlines: Slice::Pending,
            short_term: Slice::Pending,
            long_term: Slice::Pending,
            profile: Slice::Pending,
            forecast: None,
        }
    }

    /// Returns the number of slices still waiting for their source.
    #[must_use]
    pub fn pending_slices(&self) -> usize {
        [
            self.headlines.is_pending(),
            self.short_term.is_pending(),
            self.long_term.is_pending(),
            self.profile.is_pending(),
        ]
        .into_iter()
        .filter(|pending| *pending)
        .count()
    }

    /// Returns true once every slice has settled.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.pending_slices() == 0
    }
}

/// Everything one render needs: the data slices and the scroll position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSnapshot {
    /// Data slices.
    pub state: ViewState,
    /// Headline strip scroll offset.
    pub scroll_offset: u64,
}
