//! Single data source fetch command.

use anyhow::{Context, Result};
use serde_json::json;
use stockview_lib::prelude::*;

use crate::display::Source;

/// Execute the fetch command.
///
/// Sources never fail: a failed request prints the fallback value, with the
/// reason logged as a warning.
pub(crate) async fn fetch(ticker: &str, source: Source, config: ClientConfig) -> Result<()> {
    let ticker = Ticker::new(ticker).context("Invalid ticker")?;
    let http = HttpSource::with_config(config).context("Failed to create HTTP client")?;

    let output = match source {
        Source::News => serde_json::to_value(http.headlines(&ticker).await)?,
        Source::Prices => serde_json::to_value(http.prices(&ticker).await)?,
        Source::Profile => serde_json::to_value(http.profile(&ticker).await)?,
        Source::All => {
            let (headlines, prices, profile) = tokio::join!(
                http.headlines(&ticker),
                http.prices(&ticker),
                http.profile(&ticker),
            );
            json!({
                "ticker": ticker,
                "headlines": headlines,
                "prices": prices,
                "profile": profile,
            })
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
