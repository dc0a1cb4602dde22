//! Concurrent loading of the detail view's data slices.

use std::sync::Arc;
use stockview_fetch::MarketSource;
use stockview_types::{Slice, Ticker};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::{ForecastStub, ViewState};

/// Owns the data slices of one detail view and drives their loading.
///
/// Every [`load`](Self::load) resets all slices to pending, draws the
/// forecast, then fetches headlines, prices and profile concurrently. Each
/// fetch merges only its own slice, in whatever order they settle. There is
/// no timeout: a source that never answers leaves its slice pending.
///
/// Fetches are tagged with the generation they were issued for. Starting a
/// new load aborts the previous fetches, and any answer that still arrives
/// for an older generation is discarded.
#[derive(Debug)]
pub struct Aggregator<S> {
    source: Arc<S>,
    forecaster: ForecastStub,
    state: watch::Sender<ViewState>,
    tasks: Vec<JoinHandle<()>>,
}

impl<S: MarketSource> Aggregator<S> {
    /// Creates an aggregator and starts loading `ticker`.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    #[must_use]
    pub fn new(source: Arc<S>, forecaster: ForecastStub, ticker: Ticker) -> Self {
        let (state, _) = watch::channel(ViewState::pending(ticker.clone(), 0));
        let mut aggregator = Self {
            source,
            forecaster,
            state,
            tasks: Vec::with_capacity(3),
        };
        aggregator.load(ticker);
        aggregator
    }

    /// Invalidates the current slices and loads `ticker` from scratch.
    ///
    /// Loading the ticker that is already shown still issues every fetch
    /// again; nothing is cached between loads.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn load(&mut self, ticker: Ticker) {
        self.cancel();

        let generation = self.state.borrow().generation + 1;
        let mut fresh = ViewState::pending(ticker.clone(), generation);
        fresh.forecast = Some(self.forecaster.generate());
        self.state.send_replace(fresh);

        tracing::debug!(%ticker, generation, "loading view");

        let source = Arc::clone(&self.source);
        let tx = self.state.clone();
        let t = ticker.clone();
        self.tasks.push(tokio::spawn(async move {
            let headlines = source.headlines(&t).await;
            settle(&tx, generation, "headlines", |state| {
                state.headlines = Slice::from_vec(headlines);
            });
        }));

        let source = Arc::clone(&self.source);
        let tx = self.state.clone();
        let t = ticker.clone();
        self.tasks.push(tokio::spawn(async move {
            let history = source.prices(&t).await;
            settle(&tx, generation, "prices", |state| {
                state.short_term = Slice::from_series(history.short_term);
                state.long_term = Slice::from_series(history.long_term);
            });
        }));

        let source = Arc::clone(&self.source);
        let tx = self.state.clone();
        self.tasks.push(tokio::spawn(async move {
            let profile = source.profile(&ticker).await;
            settle(&tx, generation, "profile", |state| {
                state.profile = Slice::from_option(profile);
            });
        }));
    }

    /// Returns a receiver that observes every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Returns the ticker currently loaded.
    #[must_use]
    pub fn ticker(&self) -> Ticker {
        self.state.borrow().ticker.clone()
    }

    /// Returns the current load generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.state.borrow().generation
    }

    /// Returns the number of fetches that have not finished yet.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.tasks.iter().filter(|task| !task.is_finished()).count()
    }
}

impl<S> Aggregator<S> {
    /// Aborts every fetch of the current load.
    fn cancel(&mut self) {
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }
}

impl<S> Drop for Aggregator<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Merges one settled fetch into the state if it still belongs to the
/// current generation. Returns whether it was applied.
fn settle(
    state: &watch::Sender<ViewState>,
    generation: u64,
    slice: &'static str,
    apply: impl FnOnce(&mut ViewState),
) -> bool {
    let applied = state.send_if_modified(|current| {
        if current.generation != generation {
            return false;
        }
        apply(current);
        true
    });

    if applied {
        tracing::debug!(slice, generation, "slice settled");
    } else {
        tracing::debug!(slice, generation, "discarded stale response");
    }
    applied
}
