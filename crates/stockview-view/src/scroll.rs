//! Fixed-rate scroll timer for the headline strip.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

/// Configuration for the headline scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollConfig {
    /// Offset added on every tick.
    pub step: u64,
    /// Time between ticks.
    pub period: Duration,
}

impl ScrollConfig {
    /// Shortest period accepted; shorter periods are raised to it.
    pub const MIN_PERIOD: Duration = Duration::from_millis(1);
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            step: 2,
            period: Duration::from_millis(50),
        }
    }
}

/// Read-only view of a scroll offset.
///
/// Stays readable after the scheduler that advances it is gone, at which
/// point it no longer changes.
#[derive(Debug, Clone, Default)]
pub struct ScrollOffset(Arc<AtomicU64>);

impl ScrollOffset {
    /// Returns the current offset.
    #[must_use]
    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

/// Perpetual scroll timer owned by one mounted view.
///
/// Starting the scheduler spawns the only recurring task of a view. The
/// task lives exactly as long as this value: dropping it (or calling
/// [`stop`](Self::stop)) aborts the task, and no tick is applied afterwards.
#[derive(Debug)]
pub struct ScrollScheduler {
    offset: ScrollOffset,
    task: Option<JoinHandle<()>>,
}

impl ScrollScheduler {
    /// Starts ticking. The first tick fires one period from now.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    #[must_use]
    pub fn start(config: ScrollConfig) -> Self {
        let offset = ScrollOffset::default();
        let task = spawn_ticker(&offset, config);
        Self {
            offset,
            task: Some(task),
        }
    }

    /// Stops the running timer, then starts a new one from offset 0.
    ///
    /// Handles taken from [`offset`](Self::offset) before the restart keep
    /// the old, now frozen, value.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn restart(&mut self, config: ScrollConfig) {
        self.halt();
        self.offset = ScrollOffset::default();
        self.task = Some(spawn_ticker(&self.offset, config));
    }

    fn halt(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::trace!(offset = self.offset.get(), "scroll stopped");
        }
    }

    /// Returns the current offset.
    #[must_use]
    pub fn current(&self) -> u64 {
        self.offset.get()
    }

    /// Returns a handle to the offset that outlives the scheduler.
    #[must_use]
    pub fn offset(&self) -> ScrollOffset {
        self.offset.clone()
    }

    /// Stops ticking. Equivalent to dropping the scheduler.
    pub fn stop(self) {}
}

impl Drop for ScrollScheduler {
    fn drop(&mut self) {
        self.halt();
    }
}

fn spawn_ticker(offset: &ScrollOffset, config: ScrollConfig) -> JoinHandle<()> {
    let counter = Arc::clone(&offset.0);
    let period = config.period.max(ScrollConfig::MIN_PERIOD);
    let step = config.step;
    let first = Instant::now() + period;

    let task = tokio::spawn(async move {
        let mut ticks = interval_at(first, period);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticks.tick().await;
            counter.fetch_add(step, Ordering::Relaxed);
        }
    });
    tracing::trace!(?period, step, "scroll started");
    task
}
