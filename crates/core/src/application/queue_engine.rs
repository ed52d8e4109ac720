//! Queue Engine - single source of truth for queue progress
//!
//! Owns the serving pointer, the last-issued counter, the department catalog
//! and at most one tracked token. Every derived view (people ahead, wait time,
//! progress, status, board) is recomputed from those two counters on demand.
//!
//! The engine is an explicitly constructed value owned by the caller. Share it
//! with a periodic advance through [`SharedEngine`].

use crate::domain::{
    EngineConfig, EntryRole, ProgressBaseline, QueueEntry, QueueStatus, StatusReport, Token,
    TokenNumber,
};
use crate::port::id_provider::UuidProvider;
use crate::port::time_provider::SystemTimeProvider;
use crate::port::{IdProvider, TimeProvider};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Engine handle shared between the caller and an automatic advance task
pub type SharedEngine = Arc<Mutex<QueueEngine>>;

pub struct QueueEngine {
    config: EngineConfig,
    serving_pointer: u64,
    last_issued_number: u64,
    current_token: Option<Token>,
    id_provider: Arc<dyn IdProvider>,
    time_provider: Arc<dyn TimeProvider>,
}

impl QueueEngine {
    /// Create an engine with its counters at the configured starting values
    ///
    /// # Arguments
    ///
    /// * `config` - Engine configuration (prefix, seeds, catalog, baseline)
    /// * `id_provider` - Token ID generator (injected for determinism)
    /// * `time_provider` - Issuance clock (injected for determinism)
    pub fn new(
        config: EngineConfig,
        id_provider: Arc<dyn IdProvider>,
        time_provider: Arc<dyn TimeProvider>,
    ) -> Self {
        Self {
            serving_pointer: config.serving_start,
            last_issued_number: config.last_issued_seed,
            current_token: None,
            config,
            id_provider,
            time_provider,
        }
    }

    /// Production engine: default configuration, UUIDs and system clock
    pub fn with_defaults() -> Self {
        Self::new(
            EngineConfig::default(),
            Arc::new(UuidProvider),
            Arc::new(SystemTimeProvider),
        )
    }

    pub fn into_shared(self) -> SharedEngine {
        Arc::new(Mutex::new(self))
    }

    /// Issue the next token and start tracking it
    ///
    /// Never fails. `department` is stored as given, even when it is not in
    /// the catalog.
    pub fn issue(
        &mut self,
        holder_name: impl Into<String>,
        contact: impl Into<String>,
        department: impl Into<String>,
    ) -> Token {
        self.last_issued_number += 1;

        let token = Token::new(
            self.id_provider.generate_id(),
            TokenNumber::new(self.config.token_prefix.clone(), self.last_issued_number),
            holder_name,
            contact,
            department,
            self.time_provider.now_millis(),
            self.serving_pointer,
        );

        info!(
            token = %token.number,
            department = %token.department,
            now_serving = self.serving_pointer,
            "Token issued"
        );

        self.current_token = Some(token.clone());
        token
    }

    /// Complete one unit of service and return the new serving identifier
    ///
    /// The pointer may run past the last issued token (empty queue).
    pub fn advance(&mut self) -> String {
        self.serving_pointer += 1;
        let serving = self.now_serving().to_string();

        debug!(
            now_serving = %serving,
            last_issued = self.last_issued_number,
            "Queue advanced"
        );

        serving
    }

    pub fn serving_pointer(&self) -> u64 {
        self.serving_pointer
    }

    pub fn last_issued_number(&self) -> u64 {
        self.last_issued_number
    }

    pub fn now_serving(&self) -> TokenNumber {
        TokenNumber::new(self.config.token_prefix.clone(), self.serving_pointer)
    }

    pub fn current_token(&self) -> Option<&Token> {
        self.current_token.as_ref()
    }

    /// Read-only department catalog
    pub fn departments(&self) -> &[String] {
        &self.config.departments
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Unclamped `token - serving - 1`; negative once the pointer overran the token
    pub fn raw_people_ahead(&self) -> Option<i64> {
        self.current_token.as_ref().map(|token| {
            token.number.value() as i64 - self.serving_pointer as i64 - 1
        })
    }

    /// Tokens strictly between the counter and the tracked token (0 without one)
    pub fn people_ahead(&self) -> u64 {
        self.raw_people_ahead().map_or(0, |n| n.max(0) as u64)
    }

    pub fn estimated_wait_minutes(&self) -> u64 {
        self.people_ahead() * self.config.average_service_minutes
    }

    /// Share of the way from the baseline to the tracked token, in [0, 100]
    pub fn progress_percent(&self) -> f64 {
        let Some(token) = &self.current_token else {
            return 0.0;
        };

        let token_number = token.number.value();
        if self.serving_pointer >= token_number {
            return 100.0;
        }

        let baseline = match self.config.progress_baseline {
            ProgressBaseline::Fixed => self.config.baseline_serving(),
            ProgressBaseline::AtIssuance => token.serving_at_issue,
        };

        let total_ahead = token_number as i64 - baseline as i64;
        if total_ahead <= 0 {
            return 100.0;
        }

        let remaining = (token_number - self.serving_pointer) as i64;
        let progress = (total_ahead - remaining) as f64 / total_ahead as f64 * 100.0;

        progress.clamp(0.0, 100.0)
    }

    /// Status of the tracked token; `Relax` when nothing is tracked
    pub fn status(&self) -> QueueStatus {
        self.raw_people_ahead()
            .map_or(QueueStatus::Relax, QueueStatus::classify)
    }

    pub fn status_message(&self) -> &'static str {
        self.status().message()
    }

    /// Public board: the token now serving followed by the next `depth` numbers
    ///
    /// Reads only the serving pointer, not the tracked token.
    pub fn queue_snapshot(&self, depth: usize) -> Vec<QueueEntry> {
        let prefix = &self.config.token_prefix;
        let mut entries = Vec::with_capacity(depth + 1);

        entries.push(QueueEntry::new(
            self.now_serving().to_string(),
            EntryRole::Current,
        ));

        entries.extend((1..=depth as u64).map(|offset| {
            let role = if offset == 1 {
                EntryRole::Next
            } else {
                EntryRole::Waiting
            };
            let number = TokenNumber::new(prefix.clone(), self.serving_pointer + offset);
            QueueEntry::new(number.to_string(), role)
        }));

        entries
    }

    /// Board with the configured depth
    pub fn default_snapshot(&self) -> Vec<QueueEntry> {
        self.queue_snapshot(self.config.snapshot_depth)
    }

    /// Combined view polled by the presentation layer
    pub fn report(&self) -> StatusReport {
        let status = self.status();

        StatusReport {
            token: self.current_token.as_ref().map(|t| t.number.to_string()),
            department: self.current_token.as_ref().map(|t| t.department.clone()),
            now_serving: self.now_serving().to_string(),
            people_ahead: self.people_ahead(),
            raw_people_ahead: self.raw_people_ahead(),
            estimated_wait_minutes: self.estimated_wait_minutes(),
            progress_percent: self.progress_percent(),
            status,
            message: status.message().to_string(),
        }
    }
}
