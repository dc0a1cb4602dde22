//! Scripted [`MarketSource`] for view tests.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use stockview_fetch::MarketSource;
use stockview_types::{PriceHistory, PricePoint, PriceSeries, Profile, Ticker};

/// Slices a [`ScriptedSource`] can be told to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Part {
    Headlines,
    ShortTerm,
    LongTerm,
    Profile,
}

/// Answers with data derived from the ticker after a per-ticker delay.
#[derive(Debug, Default)]
pub(crate) struct ScriptedSource {
    delays: Mutex<HashMap<String, Duration>>,
    failing: Mutex<HashSet<Part>>,
    pub(crate) started: AtomicUsize,
    pub(crate) completed: AtomicUsize,
}

impl ScriptedSource {
    pub(crate) const DEFAULT_DELAY: Duration = Duration::from_millis(10);

    pub(crate) fn delay(self, ticker: &str, delay: Duration) -> Self {
        self.delays.lock().unwrap().insert(ticker.to_string(), delay);
        self
    }

    pub(crate) fn fail(self, part: Part) -> Self {
        self.failing.lock().unwrap().insert(part);
        self
    }

    fn fails(&self, part: Part) -> bool {
        self.failing.lock().unwrap().contains(&part)
    }

    async fn wait(&self, ticker: &Ticker) {
        self.started.fetch_add(1, Ordering::SeqCst);
        let delay = self
            .delays
            .lock()
            .unwrap()
            .get(ticker.as_str())
            .copied()
            .unwrap_or(Self::DEFAULT_DELAY);
        tokio::time::sleep(delay).await;
        self.completed.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl MarketSource for ScriptedSource {
    async fn headlines(&self, ticker: &Ticker) -> Vec<String> {
        self.wait(ticker).await;
        if self.fails(Part::Headlines) {
            return Vec::new();
        }
        vec![format!("{ticker} headline")]
    }

    async fn prices(&self, ticker: &Ticker) -> PriceHistory {
        self.wait(ticker).await;
        let series = |part| {
            if self.fails(part) {
                PriceSeries::default()
            } else {
                PriceSeries::new(vec![PricePoint::new(ticker.as_str(), 1.0)])
            }
        };
        PriceHistory::new(series(Part::ShortTerm), series(Part::LongTerm))
    }

    async fn profile(&self, ticker: &Ticker) -> Option<Profile> {
        self.wait(ticker).await;
        if self.fails(Part::Profile) {
            return None;
        }
        Some(Profile {
            name: ticker.to_string(),
            ..Profile::default()
        })
    }
}
