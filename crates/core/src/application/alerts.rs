//! Status alerts - notify only when the status actually changes
//!
//! Status is recomputed on every query and never stored by the engine, so the
//! previous value is remembered here and diffed against each new report.

use crate::domain::{Notice, QueueStatus, StatusReport};
use crate::port::{AdvanceObserver, StatusNotifier};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// A status transition between two successive observations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    /// `None` on the first observation
    pub from: Option<QueueStatus>,
    pub to: QueueStatus,
}

/// Remembers the last observed status
#[derive(Debug, Default)]
pub struct StatusTracker {
    last: Option<QueueStatus>,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `status`, returning the transition if it differs from the last one
    pub fn observe(&mut self, status: QueueStatus) -> Option<StatusChange> {
        if self.last == Some(status) {
            return None;
        }

        let change = StatusChange {
            from: self.last,
            to: status,
        };
        self.last = Some(status);
        Some(change)
    }

    pub fn last(&self) -> Option<QueueStatus> {
        self.last
    }

    /// Forget the last status (e.g. when a new token is tracked)
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[derive(Default)]
struct AlertState {
    token: Option<String>,
    tracker: StatusTracker,
}

/// Forwards alerting status changes to a notifier
///
/// A report for a different token starts a fresh history, so the new token
/// gets its own alerts even when its status equals the previous token's.
pub struct StatusAlerts {
    state: Mutex<AlertState>,
    notifier: Arc<dyn StatusNotifier>,
}

impl StatusAlerts {
    pub fn new(notifier: Arc<dyn StatusNotifier>) -> Self {
        Self {
            state: Mutex::new(AlertState::default()),
            notifier,
        }
    }

    /// Feed a fresh report; returns the notice sent, if any
    pub async fn observe(&self, report: &StatusReport) -> Option<Notice> {
        let change = {
            let mut state = self.state.lock().await;
            if state.token != report.token {
                debug!(token = ?report.token, "Tracking new token");
                state.token = report.token.clone();
                state.tracker.reset();
            }
            state.tracker.observe(report.status)?
        };

        if !change.to.is_alerting() {
            debug!(status = %change.to, "Status changed (no alert)");
            return None;
        }

        let notice = Notice::for_status(change.to, report.people_ahead);
        info!(
            from = ?change.from,
            to = %change.to,
            people_ahead = report.people_ahead,
            "Status alert"
        );

        self.notifier.notify(notice.clone()).await;
        Some(notice)
    }
}

#[async_trait]
impl AdvanceObserver for StatusAlerts {
    async fn on_advance(&self, report: &StatusReport) {
        self.observe(report).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::queue_engine::QueueEngine;
    use crate::domain::NoticeSeverity;
    use crate::port::notifier::mocks::RecordingNotifier;

    #[test]
    fn test_tracker_reports_only_changes() {
        let mut tracker = StatusTracker::new();

        assert_eq!(
            tracker.observe(QueueStatus::Relax),
            Some(StatusChange {
                from: None,
                to: QueueStatus::Relax
            })
        );
        assert_eq!(tracker.observe(QueueStatus::Relax), None);
        assert_eq!(
            tracker.observe(QueueStatus::Soon),
            Some(StatusChange {
                from: Some(QueueStatus::Relax),
                to: QueueStatus::Soon
            })
        );
        assert_eq!(tracker.observe(QueueStatus::Soon), None);
        assert_eq!(tracker.last(), Some(QueueStatus::Soon));
    }

    #[test]
    fn test_tracker_reset_forgets() {
        let mut tracker = StatusTracker::new();
        tracker.observe(QueueStatus::Now);
        tracker.reset();

        assert!(tracker.last().is_none());
        assert!(tracker.observe(QueueStatus::Now).is_some());
    }

    #[test]
    fn test_alerts_fire_once_per_change() {
        tokio_test::block_on(async {
            let notifier = RecordingNotifier::new();
            let alerts = StatusAlerts::new(Arc::new(notifier.clone()));

            let mut engine = QueueEngine::with_defaults();
            engine.issue("Jane", "5550001001", "General OP");

            // 6 ahead (relax) -> 2 ahead (soon) -> 0 (now) -> -1 (missed)
            assert!(alerts.observe(&engine.report()).await.is_none());
            for _ in 0..3 {
                engine.advance();
                assert!(alerts.observe(&engine.report()).await.is_none());
            }

            engine.advance();
            let soon = alerts.observe(&engine.report()).await.unwrap();
            assert_eq!(soon.severity, NoticeSeverity::Warning);

            // 1 ahead is still soon
            engine.advance();
            assert!(alerts.observe(&engine.report()).await.is_none());

            engine.advance();
            assert!(alerts.observe(&engine.report()).await.is_some());

            engine.advance();
            assert!(alerts.observe(&engine.report()).await.is_some());
            engine.advance();
            assert!(alerts.observe(&engine.report()).await.is_none());

            let sent = notifier.notices();
            assert_eq!(sent.len(), 3);
            assert!(sent[0].text.contains("Only 2 people left"));
            assert!(sent[1].text.contains("now being served"));
            assert!(sent[2].text.contains("missed"));
        });
    }

    #[test]
    fn test_new_token_gets_fresh_alerts() {
        tokio_test::block_on(async {
            let notifier = RecordingNotifier::new();
            let alerts = StatusAlerts::new(Arc::new(notifier.clone()));

            let mut engine = QueueEngine::with_defaults();
            engine.issue("Jane", "5550001001", "General OP");

            // A-43 overrun at serving 44
            for _ in 0..8 {
                engine.advance();
            }
            let missed = alerts.observe(&engine.report()).await.unwrap();
            assert!(missed.text.contains("missed"));
            assert!(alerts.observe(&engine.report()).await.is_none());

            // A-44 is issued already missed: same status, new token
            engine.issue("John", "5550001002", "Billing");
            assert_eq!(engine.status(), QueueStatus::Missed);
            assert!(alerts.observe(&engine.report()).await.is_some());
            assert!(alerts.observe(&engine.report()).await.is_none());

            assert_eq!(notifier.notices().len(), 2);
        });
    }
}
