//! A mounted detail view.

use std::sync::Arc;
use stockview_fetch::MarketSource;
use stockview_types::Ticker;
use tokio::sync::watch;

use crate::{Aggregator, ForecastStub, ScrollConfig, ScrollScheduler, ViewSnapshot, ViewState};

/// Configuration for a detail view.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewConfig {
    /// Headline scroll settings.
    pub scroll: ScrollConfig,
    /// Forecast range.
    pub forecast: ForecastStub,
}

/// The detail view of one ticker, from mount to unmount.
///
/// Mounting starts the headline scroll and the data load together; the
/// scroll never waits for data. Navigating to another ticker tears the
/// instance down and mounts a fresh one in its place, so the scroll restarts
/// from zero and no slice of the previous ticker survives. Unmounting, or
/// dropping the view on any other path, stops the scroll and aborts the
/// fetches still in flight.
#[derive(Debug)]
pub struct DetailView<S> {
    aggregator: Aggregator<S>,
    scroll: ScrollScheduler,
    updates: watch::Receiver<ViewState>,
    config: ViewConfig,
}

impl<S: MarketSource> DetailView<S> {
    /// Mounts a view for `ticker`.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    #[must_use]
    pub fn mount(source: Arc<S>, ticker: Ticker, config: ViewConfig) -> Self {
        tracing::info!(%ticker, "mounting view");
        let scroll = ScrollScheduler::start(config.scroll);
        let aggregator = Aggregator::new(source, config.forecast, ticker);
        let updates = aggregator.subscribe();
        Self {
            aggregator,
            scroll,
            updates,
            config,
        }
    }

    /// Replaces the view with a fresh one for `ticker`.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn navigate(&mut self, ticker: Ticker) {
        tracing::info!(from = %self.aggregator.ticker(), to = %ticker, "navigating");
        self.scroll.restart(self.config.scroll);
        self.aggregator.load(ticker);
    }

    /// Returns the ticker on display.
    #[must_use]
    pub fn ticker(&self) -> Ticker {
        self.aggregator.ticker()
    }

    /// Returns what the presentation layer should render right now.
    #[must_use]
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            state: self.aggregator.state(),
            scroll_offset: self.scroll.current(),
        }
    }

    /// Waits until a data slice changes. Scroll ticks do not count as changes.
    pub async fn changed(&mut self) {
        // The aggregator owns the sender, so the channel outlives this borrow.
        let _ = self.updates.changed().await;
    }

    /// Returns the number of fetches still in flight.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.aggregator.in_flight()
    }

    /// Unmounts the view, returning its last snapshot.
    #[must_use = "the final snapshot is the last state rendered"]
    pub fn unmount(self) -> ViewSnapshot {
        let snapshot = self.snapshot();
        tracing::info!(ticker = %snapshot.state.ticker, "unmounting view");
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedSource;
    use std::sync::atomic::Ordering;
    use std::time::Duration;
    use stockview_types::Slice;
    use tokio::time::sleep;

    fn ticker(s: &str) -> Ticker {
        Ticker::new(s).unwrap()
    }

    fn mount(source: &Arc<ScriptedSource>, t: &str) -> DetailView<ScriptedSource> {
        DetailView::mount(Arc::clone(source), ticker(t), ViewConfig::default())
    }

    #[tokio::test(start_paused = true)]
    async fn test_scroll_runs_before_data_arrives() {
        let source = Arc::new(ScriptedSource::default().delay("SLOW", Duration::from_secs(10)));
        let view = mount(&source, "SLOW");

        sleep(Duration::from_millis(525)).await;
        let snapshot = view.snapshot();
        assert_eq!(snapshot.scroll_offset, 20);
        assert_eq!(snapshot.state.pending_slices(), 4);
        assert!(snapshot.state.forecast.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_stops_scroll_and_fetches() {
        let source = Arc::new(ScriptedSource::default().delay("SLOW", Duration::from_secs(1)));
        let view = mount(&source, "SLOW");
        let offset = view.scroll.offset();

        sleep(Duration::from_millis(125)).await;
        let last = view.unmount();
        assert_eq!(last.scroll_offset, 4);

        sleep(Duration::from_secs(2)).await;
        assert_eq!(offset.get(), 4);
        assert_eq!(source.completed.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_navigate_resets_everything() {
        let source = Arc::new(ScriptedSource::default());
        let mut view = mount(&source, "AAPL");
        let old_offset = view.scroll.offset();

        sleep(Duration::from_millis(225)).await;
        assert!(view.snapshot().state.is_settled());
        assert_eq!(old_offset.get(), 8);

        view.navigate(ticker("MSFT"));
        let snapshot = view.snapshot();
        assert_eq!(snapshot.state.ticker.as_str(), "MSFT");
        assert_eq!(snapshot.state.pending_slices(), 4);
        assert_eq!(snapshot.scroll_offset, 0);

        sleep(Duration::from_millis(110)).await;
        assert_eq!(old_offset.get(), 8);
        let snapshot = view.snapshot();
        assert_eq!(snapshot.scroll_offset, 4);
        assert_eq!(snapshot.state.headlines, Slice::Data(vec!["MSFT headline".into()]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_remount_same_ticker_refetches() {
        let source = Arc::new(ScriptedSource::default());
        let view = mount(&source, "AAPL");
        sleep(Duration::from_millis(50)).await;
        assert!(view.snapshot().state.is_settled());
        let _ = view.unmount();

        let view = mount(&source, "AAPL");
        assert_eq!(view.snapshot().state.pending_slices(), 4);
        sleep(Duration::from_millis(50)).await;
        assert!(view.snapshot().state.is_settled());
        assert_eq!(source.started.load(Ordering::SeqCst), 6);
    }

    #[tokio::test(start_paused = true)]
    async fn test_changed_wakes_on_settle() {
        let source = Arc::new(ScriptedSource::default());
        let mut view = mount(&source, "AAPL");

        while !view.snapshot().state.is_settled() {
            view.changed().await;
        }
        assert_eq!(view.in_flight(), 0);
    }
}
