// Notices - alert content handed to the notification collaborator

use super::status::QueueStatus;
use super::token::TokenNumber;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Visual severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeSeverity {
    Success,
    Warning,
    Danger,
}

/// A message for the notification collaborator to present
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub text: String,
    pub severity: NoticeSeverity,
    /// Auto-dismiss delay; `None` keeps the notice until replaced
    pub dismiss_after: Option<Duration>,
}

impl Notice {
    pub fn new(
        text: impl Into<String>,
        severity: NoticeSeverity,
        dismiss_after: Option<Duration>,
    ) -> Self {
        Self {
            text: text.into(),
            severity,
            dismiss_after,
        }
    }

    /// Sticky notice describing a queue position
    pub fn for_status(status: QueueStatus, people_ahead: u64) -> Self {
        match status {
            QueueStatus::Relax => Self::new(
                format!(
                    "You can relax. {} people ahead of you. We'll notify you when your turn is near.",
                    people_ahead
                ),
                NoticeSeverity::Success,
                None,
            ),
            QueueStatus::Soon => Self::new(
                format!(
                    "Only {} people left before your turn. Please come near the counter.",
                    people_ahead
                ),
                NoticeSeverity::Warning,
                None,
            ),
            QueueStatus::Now => Self::new(
                "Your token is now being served! Please proceed to the counter immediately.",
                NoticeSeverity::Danger,
                None,
            ),
            QueueStatus::Missed => Self::new(
                "Your token was missed. Please contact the help desk for assistance.",
                NoticeSeverity::Danger,
                None,
            ),
        }
    }

    pub fn token_issued(number: &TokenNumber) -> Self {
        Self::new(
            format!("Token {} generated successfully!", number),
            NoticeSeverity::Success,
            Some(Duration::from_secs(3)),
        )
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, NoticeSeverity::Danger, Some(Duration::from_secs(5)))
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, NoticeSeverity::Success, Some(Duration::from_secs(4)))
    }
}
