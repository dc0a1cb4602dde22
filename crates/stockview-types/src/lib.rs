//! Core types for the stockview ticker detail view.
//!
//! This crate provides the data structures shared by the fetch and view crates:
//!
//! - [`Ticker`] - The identifier of the instrument a view presents
//! - [`PricePoint`], [`PriceSeries`], [`PriceHistory`] - Price time series
//! - [`Profile`] - Descriptive company record
//! - [`Slice`] - Pending / empty / loaded state of one piece of view data
//! - [`Forecast`] - Placeholder price forecast with cent precision

#![doc(issue_tracker_base_url = "https://github.com/stockview/stockview/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod forecast;
mod price;
mod profile;
mod slice;
mod ticker;

pub use error::StockviewError;
pub use forecast::Forecast;
pub use price::{PriceHistory, PricePoint, PriceSeries};
pub use profile::{MarketCap, Profile};
pub use slice::Slice;
pub use ticker::Ticker;
