// Status Notifier Port
// Presentation of notices (toasts, SMS, terminal) lives behind this trait
use crate::domain::Notice;
use async_trait::async_trait;

/// Notification collaborator
///
/// Receives notices to present. Suppressing repeats is the caller's job (see
/// `application::alerts`), not the notifier's.
#[async_trait]
pub trait StatusNotifier: Send + Sync {
    /// Present a notice, replacing any sticky notice already shown
    async fn notify(&self, notice: Notice);
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Records every notice it receives
    #[derive(Clone, Default)]
    pub struct RecordingNotifier {
        notices: Arc<Mutex<Vec<Notice>>>,
    }

    impl RecordingNotifier {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn notices(&self) -> Vec<Notice> {
            self.notices
                .lock()
                .map(|notices| notices.clone())
                .unwrap_or_default()
        }
    }

    #[async_trait]
    impl StatusNotifier for RecordingNotifier {
        async fn notify(&self, notice: Notice) {
            if let Ok(mut notices) = self.notices.lock() {
                notices.push(notice);
            }
        }
    }
}
