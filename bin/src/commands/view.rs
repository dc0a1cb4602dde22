//! Live detail view command.

use anyhow::{Context, Result};
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use stockview_lib::prelude::*;
use tokio::time::{Instant, MissedTickBehavior, sleep_until};

use crate::display::render_snapshot;

/// ANSI sequence clearing the screen and homing the cursor.
const CLEAR: &str = "\x1b[2J\x1b[H";

/// Execute the view command.
#[allow(clippy::too_many_arguments)]
pub(crate) async fn view(
    ticker: &str,
    then: Option<&str>,
    after: u64,
    duration: Option<u64>,
    once: bool,
    refresh_ms: u64,
    width: usize,
    plain: bool,
    client_config: ClientConfig,
    view_config: ViewConfig,
) -> Result<()> {
    let ticker = Ticker::new(ticker).context("Invalid ticker")?;
    let next = then
        .map(|t| Ticker::new(t).context("Invalid --then ticker"))
        .transpose()?;
    let source = Arc::new(
        HttpSource::with_config(client_config).context("Failed to create HTTP client")?,
    );

    let mut view = DetailView::mount(source, ticker, view_config);

    if once {
        while !view.snapshot().state.is_settled() {
            view.changed().await;
        }
        let last = view.unmount();
        print!("{}", render_snapshot(&last, width));
        return Ok(());
    }

    let mut redraw = tokio::time::interval(Duration::from_millis(refresh_ms.max(10)));
    redraw.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let started = Instant::now();
    let mut switch = next.map(|t| (started + Duration::from_secs(after), t));
    let deadline = duration.map(|secs| started + Duration::from_secs(secs));

    let mut stdout = std::io::stdout();
    loop {
        tokio::select! {
            _ = redraw.tick() => {}
            () = view.changed() => {}
            () = wait_until(switch.as_ref().map(|(at, _)| *at)) => {
                if let Some((_, t)) = switch.take() {
                    view.navigate(t);
                }
            }
            () = wait_until(deadline) => break,
            result = tokio::signal::ctrl_c() => {
                result.context("Failed to listen for Ctrl-C")?;
                break;
            }
        }

        let frame = render_snapshot(&view.snapshot(), width);
        if plain {
            writeln!(stdout, "{frame}")?;
        } else {
            write!(stdout, "{CLEAR}{frame}")?;
        }
        stdout.flush()?;
    }

    let last = view.unmount();
    tracing::info!(
        ticker = %last.state.ticker,
        pending = last.state.pending_slices(),
        scroll_offset = last.scroll_offset,
        "view closed"
    );
    Ok(())
}

/// Sleeps until `at`, or forever when there is nothing to wait for.
async fn wait_until(at: Option<Instant>) {
    match at {
        Some(at) => sleep_until(at).await,
        None => std::future::pending().await,
    }
}
