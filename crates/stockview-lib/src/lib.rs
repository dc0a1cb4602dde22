//! Ticker detail view with concurrent, failure-tolerant data loading.
//!
//! This is a facade crate that re-exports functionality from the stockview
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use stockview_lib::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = Arc::new(HttpSource::with_config(ClientConfig::default())?);
//!     let mut view = DetailView::mount(source, Ticker::new("AAPL")?, ViewConfig::default());
//!
//!     while !view.snapshot().state.is_settled() {
//!         view.changed().await;
//!     }
//!     println!("{:?}", view.unmount());
//!     Ok(())
//! }
//! ```

#![doc(issue_tracker_base_url = "https://github.com/stockview/stockview/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use stockview_types::*;

// Re-export data sources
#[cfg(feature = "fetch")]
pub use stockview_fetch::{
    ClientConfig, Endpoint, FetchError, HttpSource, MarketSource, ShapeError, SourceClient,
    parse, url,
};

// Re-export view orchestration
#[cfg(feature = "view")]
pub use stockview_view::{
    Aggregator, DetailView, ForecastStub, ScrollConfig, ScrollOffset, ScrollScheduler, ViewConfig,
    ViewSnapshot, ViewState,
};

/// Prelude module for convenient imports.
///
/// ```
/// use stockview_lib::prelude::*;
/// ```
pub mod prelude {
    pub use stockview_types::{
        Forecast, MarketCap, PriceHistory, PricePoint, PriceSeries, Profile, Slice, StockviewError,
        Ticker,
    };

    #[cfg(feature = "fetch")]
    pub use stockview_fetch::{ClientConfig, HttpSource, MarketSource, SourceClient};

    #[cfg(feature = "view")]
    pub use stockview_view::{
        DetailView, ForecastStub, ScrollConfig, ViewConfig, ViewSnapshot, ViewState,
    };
}
