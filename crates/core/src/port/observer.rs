// Advance Observer Port
// Replaces the bare "on tick" callback of a periodic advance
use crate::domain::StatusReport;
use async_trait::async_trait;

/// Receives the refreshed report after every automatic advance
#[async_trait]
pub trait AdvanceObserver: Send + Sync {
    async fn on_advance(&self, report: &StatusReport);
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Collects every report it is handed
    #[derive(Clone, Default)]
    pub struct CollectingObserver {
        reports: Arc<Mutex<Vec<StatusReport>>>,
    }

    impl CollectingObserver {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn reports(&self) -> Vec<StatusReport> {
            self.reports
                .lock()
                .map(|reports| reports.clone())
                .unwrap_or_default()
        }
    }

    #[async_trait]
    impl AdvanceObserver for CollectingObserver {
        async fn on_advance(&self, report: &StatusReport) {
            if let Ok(mut reports) = self.reports.lock() {
                reports.push(report.clone());
            }
        }
    }
}
