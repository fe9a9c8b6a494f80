//! Background auto-refresh timer.
//!
//! The dashboard can keep its "last updated" marker ticking on a fixed
//! interval. At most one timer task exists at a time; enabling an already
//! enabled ticker is a no-op and disabling (or dropping) aborts the task.

use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;

pub struct RefreshTicker {
    period: Duration,
    last_updated: Arc<RwLock<DateTime<Utc>>>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl RefreshTicker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            last_updated: Arc::new(RwLock::new(Utc::now())),
            task: Mutex::new(None),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Starts the timer task. No-op if one is already running.
    pub fn enable(&self) {
        let mut slot = self.task.lock().unwrap_or_else(|e| e.into_inner());
        if slot.as_ref().is_some_and(|task| !task.is_finished()) {
            return;
        }
        let period = self.period;
        let last_updated = Arc::clone(&self.last_updated);
        tracing::info!(period_secs = period.as_secs_f64(), "auto-refresh enabled");
        *slot = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first tick of a fresh interval fires immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                let now = Utc::now();
                *last_updated.write().unwrap_or_else(|e| e.into_inner()) = now;
                tracing::debug!(%now, "dashboard data refreshed");
            }
        }));
    }

    /// Stops the timer task if one is running.
    pub fn disable(&self) {
        let mut slot = self.task.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(task) = slot.take() {
            task.abort();
            tracing::info!("auto-refresh disabled");
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.task
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        *self.last_updated.read().unwrap_or_else(|e| e.into_inner())
    }
}

impl Drop for RefreshTicker {
    fn drop(&mut self) {
        if let Some(task) = self.task.lock().unwrap_or_else(|e| e.into_inner()).take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ticker_updates_last_updated_while_enabled() {
        let ticker = RefreshTicker::new(Duration::from_millis(10));
        let before = ticker.last_updated();

        ticker.enable();
        assert!(ticker.is_enabled());
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(ticker.last_updated() > before);
    }

    #[tokio::test]
    async fn test_disable_stops_updates() {
        let ticker = RefreshTicker::new(Duration::from_millis(10));
        ticker.enable();
        tokio::time::sleep(Duration::from_millis(40)).await;
        ticker.disable();
        assert!(!ticker.is_enabled());

        let frozen = ticker.last_updated();
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(ticker.last_updated(), frozen);
    }

    #[tokio::test]
    async fn test_enable_is_idempotent() {
        let ticker = RefreshTicker::new(Duration::from_millis(10));
        ticker.enable();
        ticker.enable();
        assert!(ticker.is_enabled());

        // A single disable clears the sole task.
        ticker.disable();
        assert!(!ticker.is_enabled());
    }

    #[tokio::test]
    async fn test_disabled_ticker_is_inert() {
        let ticker = RefreshTicker::new(Duration::from_millis(10));
        let before = ticker.last_updated();
        tokio::time::sleep(Duration::from_millis(40)).await;
        assert_eq!(ticker.last_updated(), before);
        assert!(!ticker.is_enabled());
    }
}
