//! Detail view state orchestration for stockview.
//!
//! A detail view presents one ticker. This crate owns everything about its
//! lifecycle that is not rendering:
//!
//! - [`ForecastStub`] - Placeholder forecast drawn once per view
//! - [`Aggregator`] - Loads the four data slices concurrently and merges
//!   each one as it settles, discarding answers for a superseded ticker
//! - [`ScrollScheduler`] - Fixed-rate headline scroll timer, released on drop
//! - [`DetailView`] - A mounted view tying the above together
//! - [`ViewSnapshot`] - Read-only state handed to the presentation layer

#![doc(issue_tracker_base_url = "https://github.com/stockview/stockview/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod aggregator;
mod forecast;
mod scroll;
mod state;
mod view;

#[cfg(test)]
mod testing;

pub use aggregator::Aggregator;
pub use forecast::ForecastStub;
pub use scroll::{ScrollConfig, ScrollOffset, ScrollScheduler};
pub use state::{ViewSnapshot, ViewState};
pub use view::{DetailView, ViewConfig};
