// Auto-advance constants (no magic values)
use std::time::Duration;

/// Shortest accepted period; shorter requests are raised to this (100ms)
pub const MIN_ADVANCE_PERIOD: Duration = Duration::from_millis(100);
