//! Repeating timer for live elapsed-time displays.
//!
//! The ticker belongs to whatever view shows the running timer, not to the
//! punch state machine. It runs from [`Ticker::start`] until its handle is
//! stopped or dropped, so a view that goes away cannot leave a timer behind.

use chrono::{DateTime, Local};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

pub struct Ticker;

impl Ticker {
    /// Spawns a task calling `on_tick` every `period`, the first time immediately.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<F>(period: Duration, mut on_tick: F) -> TickerHandle
    where
        F: FnMut(DateTime<Local>) + Send + 'static,
    {
        let period = period.max(Duration::from_millis(1));
        let task = tokio::spawn(async move {
            let mut interval = time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                on_tick(Local::now());
            }
        });

        TickerHandle { task: Some(task) }
    }
}

/// Owning handle of a running ticker. Dropping it cancels the ticker.
pub struct TickerHandle {
    task: Option<JoinHandle<()>>,
}

impl TickerHandle {
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    pub fn stop(mut self) {
        self.cancel();
    }

    fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
