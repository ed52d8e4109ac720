// Queue Status Classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest people-ahead count still classified as `Soon`
pub const SOON_THRESHOLD: i64 = 2;

/// Urgency of a requester's position in the queue
///
/// Never stored: recomputed from the serving pointer and the tracked token on
/// every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueueStatus {
    /// Serving pointer has passed the token
    Missed,
    /// Token is at the counter
    Now,
    /// One or two people ahead
    Soon,
    /// Plenty of time left, or no token tracked
    Relax,
}

impl QueueStatus {
    /// Classify a raw (unclamped) people-ahead count
    pub fn classify(people_ahead: i64) -> Self {
        match people_ahead {
            n if n < 0 => QueueStatus::Missed,
            0 => QueueStatus::Now,
            n if n <= SOON_THRESHOLD => QueueStatus::Soon,
            _ => QueueStatus::Relax,
        }
    }

    /// Human-readable banner text
    pub fn message(&self) -> &'static str {
        match self {
            QueueStatus::Relax => {
                "Relax, you still have time. We'll notify you when your turn is near."
            }
            QueueStatus::Soon => "Almost your turn! Please come near the counter.",
            QueueStatus::Now => "Your token is being served. Please proceed to the counter.",
            QueueStatus::Missed => "Your token was missed. Please contact the help desk.",
        }
    }

    /// Whether a transition into this status warrants an alert
    pub fn is_alerting(&self) -> bool {
        !matches!(self, QueueStatus::Relax)
    }
}

impl fmt::Display for QueueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueStatus::Missed => write!(f, "missed"),
            QueueStatus::Now => write!(f, "now"),
            QueueStatus::Soon => write!(f, "soon"),
            QueueStatus::Relax => write!(f, "relax"),
        }
    }
}

/// Free-function form of [`QueueStatus::classify`]
pub fn classify(people_ahead: i64) -> QueueStatus {
    QueueStatus::classify(people_ahead)
}

/// Free-function form of [`QueueStatus::message`]
pub fn message(status: QueueStatus) -> &'static str {
    status.message()
}
