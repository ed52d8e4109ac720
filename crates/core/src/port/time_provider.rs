// Issuance Clock Port (fixed clocks in tests)

/// Source of the `issued_at` stamp put on every token
pub trait TimeProvider: Send + Sync {
    /// Epoch milliseconds to stamp on a token issued now
    fn now_millis(&self) -> i64;
}

/// Wall-clock issuance stamps
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

pub mod mocks {
    use super::*;

    /// Clock frozen at a given instant
    pub struct FixedTimeProvider {
        pub now: i64,
    }

    impl TimeProvider for FixedTimeProvider {
        fn now_millis(&self) -> i64 {
            self.now
        }
    }
}
