// Auto Advance - periodic serving-pointer advancement
//
// One running task per engine. The task owns nothing but a clone of the
// shared engine; stopping it is just ceasing to tick, every advance being a
// single increment under the engine lock.

pub mod cancel;
pub mod constants;

pub use cancel::{cancel_channel, CancelSender, CancelToken};
pub use constants::*;

use crate::application::queue_engine::SharedEngine;
use crate::port::AdvanceObserver;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{info, warn};

/// Handle to a running auto-advance task
///
/// Dropping the handle also stops the task, so an engine can never be left
/// with an orphaned ticker.
pub struct AutoAdvanceHandle {
    cancel: CancelSender,
    task: Option<JoinHandle<()>>,
}

impl AutoAdvanceHandle {
    /// Stop ticking and wait for the task to finish
    ///
    /// No advance happens after this returns.
    pub async fn cancel(mut self) {
        self.cancel.cancel();

        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                warn!(error = ?e, "Auto-advance task ended abnormally");
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for AutoAdvanceHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Spawn a task that advances `engine` once per `period`
///
/// The first advance happens one full period after the start. After each
/// advance the refreshed report is handed to `observer`.
///
/// Must be called from within a Tokio runtime.
pub fn start_auto_advance(
    engine: SharedEngine,
    period: Duration,
    observer: Option<Arc<dyn AdvanceObserver>>,
) -> AutoAdvanceHandle {
    let period = period.max(MIN_ADVANCE_PERIOD);
    let (cancel_tx, mut cancel_rx) = cancel_channel();

    info!(period_ms = period.as_millis() as u64, "Auto-advance started");

    let task = tokio::spawn(async move {
        let mut tick = interval_at(Instant::now() + period, period);
        tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;

                _ = cancel_rx.cancelled() => break,

                _ = tick.tick() => {
                    let report = {
                        let mut engine = engine.lock().await;
                        engine.advance();
                        engine.report()
                    };

                    if let Some(observer) = &observer {
                        observer.on_advance(&report).await;
                    }
                }
            }
        }

        info!("Auto-advance stopped");
    });

    AutoAdvanceHandle {
        cancel: cancel_tx,
        task: Some(task),
    }
}

/// Owner of at most one auto-advance per engine
///
/// Starting again cancels the previous task first, so the serving pointer
/// never advances at twice the intended rate.
#[derive(Default)]
pub struct AutoAdvanceSlot {
    active: Option<AutoAdvanceHandle>,
}

impl AutoAdvanceSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn start(
        &mut self,
        engine: SharedEngine,
        period: Duration,
        observer: Option<Arc<dyn AdvanceObserver>>,
    ) {
        if self.stop().await {
            info!("Replaced running auto-advance");
        }
        self.active = Some(start_auto_advance(engine, period, observer));
    }

    /// Stop the running task; returns false when nothing was running
    pub async fn stop(&mut self) -> bool {
        match self.active.take() {
            Some(handle) => {
                handle.cancel().await;
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.active.as_ref().is_some_and(AutoAdvanceHandle::is_running)
    }
}
