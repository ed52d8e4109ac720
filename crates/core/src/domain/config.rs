// Engine Configuration

use super::error::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default token prefix
pub const DEFAULT_TOKEN_PREFIX: &str = "A";

/// Default serving pointer at construction
pub const DEFAULT_SERVING_START: u64 = 36;

/// Default last-issued counter at construction (first token is seed + 1)
pub const DEFAULT_LAST_ISSUED_SEED: u64 = 42;

/// Average minutes spent at the counter per person
pub const DEFAULT_AVERAGE_SERVICE_MINUTES: u64 = 3;

/// Upcoming entries listed after the one now serving
pub const DEFAULT_SNAPSHOT_DEPTH: usize = 9;

/// Seconds between automatic advances
pub const DEFAULT_ADVANCE_INTERVAL_SECS: u64 = 5;

/// Minimum contact length accepted at registration
pub const DEFAULT_MIN_CONTACT_LEN: usize = 10;

/// How progress measures the distance already covered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressBaseline {
    /// Measure from a fixed serving number regardless of when the token was issued
    #[default]
    Fixed,
    /// Measure from the serving pointer captured at issuance
    AtIssuance,
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub token_prefix: String,
    pub serving_start: u64,
    pub last_issued_seed: u64,
    pub average_service_minutes: u64,
    pub snapshot_depth: usize,
    pub departments: Vec<String>,
    pub progress_baseline: ProgressBaseline,
    /// Fixed progress baseline; `serving_start` when unset
    pub fixed_baseline: Option<u64>,
    pub advance_interval_secs: u64,
    pub min_contact_len: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            token_prefix: DEFAULT_TOKEN_PREFIX.to_string(),
            serving_start: DEFAULT_SERVING_START,
            last_issued_seed: DEFAULT_LAST_ISSUED_SEED,
            average_service_minutes: DEFAULT_AVERAGE_SERVICE_MINUTES,
            snapshot_depth: DEFAULT_SNAPSHOT_DEPTH,
            departments: [
                "General OP",
                "X-Ray",
                "Billing",
                "Laboratory",
                "Pharmacy",
                "Emergency",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            progress_baseline: ProgressBaseline::Fixed,
            fixed_baseline: None,
            advance_interval_secs: DEFAULT_ADVANCE_INTERVAL_SECS,
            min_contact_len: DEFAULT_MIN_CONTACT_LEN,
        }
    }
}

impl EngineConfig {
    /// Serving number progress is measured from under `ProgressBaseline::Fixed`
    pub fn baseline_serving(&self) -> u64 {
        self.fixed_baseline.unwrap_or(self.serving_start)
    }

    pub fn advance_period(&self) -> Duration {
        Duration::from_secs(self.advance_interval_secs)
    }

    /// Reject configurations the engine cannot operate sensibly with
    pub fn validate(&self) -> Result<()> {
        if self.token_prefix.trim().is_empty() {
            return Err(DomainError::InvalidConfig(
                "token_prefix cannot be empty".to_string(),
            ));
        }

        if self.last_issued_seed < self.serving_start {
            return Err(DomainError::InvalidConfig(format!(
                "last_issued_seed ({}) is behind serving_start ({})",
                self.last_issued_seed, self.serving_start
            )));
        }

        if self.snapshot_depth == 0 {
            return Err(DomainError::InvalidConfig(
                "snapshot_depth must be at least 1".to_string(),
            ));
        }

        if self.advance_interval_secs == 0 {
            return Err(DomainError::InvalidConfig(
                "advance_interval_secs must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
