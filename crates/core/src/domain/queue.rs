// Queue Views - public listing and polled status report

use super::status::QueueStatus;
use serde::{Deserialize, Serialize};

/// Role of an entry on the public queue board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryRole {
    Current,
    Next,
    Waiting,
}

impl EntryRole {
    pub fn label(&self) -> &'static str {
        match self {
            EntryRole::Current => "Now Serving",
            EntryRole::Next => "Next",
            EntryRole::Waiting => "Waiting",
        }
    }
}

/// One row of the queue snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueEntry {
    pub identifier: String,
    pub label: String,
    pub role: EntryRole,
}

impl QueueEntry {
    pub fn new(identifier: impl Into<String>, role: EntryRole) -> Self {
        Self {
            identifier: identifier.into(),
            label: role.label().to_string(),
            role,
        }
    }
}

/// Everything the presentation layer polls for the tracked token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusReport {
    pub token: Option<String>,
    pub department: Option<String>,
    pub now_serving: String,
    pub people_ahead: u64,
    /// Unclamped difference the status was classified from (None without a token)
    pub raw_people_ahead: Option<i64>,
    pub estimated_wait_minutes: u64,
    pub progress_percent: f64,
    pub status: QueueStatus,
    pub message: String,
}
