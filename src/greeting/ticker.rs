//! Periodic greeting refresh
//!
//! Runs as a tokio task that recomputes the greeting every period and
//! publishes it over a watch channel. The event loop reads the latest value
//! between input polls, so the ticker never touches UI state directly.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use super::{current_greeting, Clock, Greeting};

pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(60 * 60);
const MIN_REFRESH_INTERVAL: Duration = Duration::from_secs(1);
/// Longer periods would overflow `Instant` arithmetic for huge configured values.
const MAX_REFRESH_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

/// Owns the refresh task. Dropping the ticker aborts it.
pub struct GreetingTicker {
    rx: watch::Receiver<Greeting>,
    handle: Option<JoinHandle<()>>,
}

impl GreetingTicker {
    /// Computes the greeting once, then spawns the refresh task.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(clock: Arc<dyn Clock>, period: Duration) -> Self {
        let clamped = period.clamp(MIN_REFRESH_INTERVAL, MAX_REFRESH_INTERVAL);
        if clamped != period {
            tracing::warn!(
                "Greeting refresh interval {:?} out of range, using {:?}",
                period,
                clamped
            );
        }
        let period = clamped;
        let initial = current_greeting(clock.as_ref());
        let (tx, rx) = watch::channel(initial);

        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.is_closed() {
                    break;
                }
                let greeting = current_greeting(clock.as_ref());
                tx.send_if_modified(|current| {
                    if *current == greeting {
                        false
                    } else {
                        tracing::debug!("Greeting changed: {} -> {}", current, greeting);
                        *current = greeting;
                        true
                    }
                });
            }
        });

        Self {
            rx,
            handle: Some(handle),
        }
    }

    pub fn current(&self) -> Greeting {
        *self.rx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<Greeting> {
        self.rx.clone()
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!("Greeting ticker stopped");
        }
    }
}

impl Drop for GreetingTicker {
    fn drop(&mut self) {
        self.stop();
    }
}
