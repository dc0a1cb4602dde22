//! Placeholder forecast command.

use anyhow::{Context, Result};
use stockview_lib::prelude::*;

/// Execute the forecast command.
pub(crate) fn forecast(ticker: &str, low: f64, high: f64) -> Result<()> {
    let ticker = Ticker::new(ticker).context("Invalid ticker")?;
    let forecast = ForecastStub::new(low, high).generate();
    println!("{ticker}: Predicted Price: ${forecast}");
    Ok(())
}
