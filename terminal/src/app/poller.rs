//! # Poll Scheduler
//!
//! Background reconciliation loop: one refresh immediately on [`PollScheduler::start`],
//! then one per interval until [`PollScheduler::stop`]. The loop is owned by the
//! scheduler (one per session); dropping the scheduler stops it, so no timer
//! outlives its session.
//!
//! Ticks run sequentially inside the task: if the service is slow, the next
//! tick waits for the current fetch instead of piling up requests.

use crate::app::store::ViewStore;
use crate::app::tasks::refresh_view;
use crate::core::service::LedgerService;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

pub struct PollScheduler {
    service: Arc<dyn LedgerService>,
    store: ViewStore,
    interval: Duration,
    runtime: Handle,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl PollScheduler {
    pub fn new(
        service: Arc<dyn LedgerService>,
        store: ViewStore,
        interval: Duration,
        runtime: Handle,
    ) -> Self {
        Self {
            service,
            store,
            interval,
            runtime,
            task: Mutex::new(None),
        }
    }

    /// Start polling. No-op when already running.
    pub fn start(&self) {
        let mut task = self.task.lock();
        if task.as_ref().is_some_and(|t| !t.is_finished()) {
            tracing::debug!("Poll scheduler already running");
            return;
        }

        let service = Arc::clone(&self.service);
        let store = self.store.clone();
        let period = self.interval;

        *task = Some(self.runtime.spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut tick_count: u64 = 0;

            loop {
                // First tick completes immediately
                ticker.tick().await;
                tick_count += 1;
                let connectivity = refresh_view(service.as_ref(), &store).await;
                tracing::trace!(tick_count, connectivity = ?connectivity, "Poll tick");
            }
        }));

        tracing::info!(interval_ms = period.as_millis(), "Poll scheduler started");
    }

    /// Stop polling. Idempotent; in-flight requests of other callers are untouched.
    pub fn stop(&self) {
        if let Some(task) = self.task.lock().take() {
            task.abort();
            tracing::info!("Poll scheduler stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.lock().as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl Drop for PollScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
