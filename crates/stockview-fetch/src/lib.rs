//! HTTP data sources for the stockview ticker detail view.
//!
//! This crate provides the three data source adapters a detail view loads
//! from:
//!
//! - [`url::endpoint_url`] - Builds per-ticker endpoint URLs
//! - [`SourceClient`] - HTTP client issuing one JSON request per call
//! - [`parse`] - Payload shape validation for each source
//! - [`MarketSource`] / [`HttpSource`] - Adapters that always resolve to a
//!   value, falling back to empty data on failure

#![doc(issue_tracker_base_url = "https://github.com/stockview/stockview/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
pub mod parse;
mod source;
pub mod url;

pub use client::{ClientConfig, FetchError, SourceClient};
pub use parse::ShapeError;
pub use source::{HttpSource, MarketSource};
pub use url::Endpoint;
